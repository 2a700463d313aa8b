use crate::modules::system::controller::{get_api_analytics, get_logs};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_system_router() -> Router<AppState> {
    Router::new()
        .route("/logs", get(get_logs))
        .route("/api-analytics", get(get_api_analytics))
}
