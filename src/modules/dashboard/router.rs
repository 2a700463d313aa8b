use crate::modules::dashboard::controller::{
    get_business_metrics, get_customer_metrics, get_delivery_metrics, get_orders, get_overview,
    get_revenue,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/revenue", get(get_revenue))
        .route("/orders", get(get_orders))
        .route("/businesses", get(get_business_metrics))
        .route("/customers", get(get_customer_metrics))
        .route("/delivery", get(get_delivery_metrics))
}
