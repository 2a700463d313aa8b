use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::rate_limit::login_rate_limit;
use crate::state::AppState;

use super::controller::{login_user, logout_user, verify_token};

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    let login = Router::new()
        .route("/login", post(login_user))
        .route_layer(middleware::from_fn_with_state(state, login_rate_limit));

    Router::new()
        .merge(login)
        .route("/logout", post(logout_user))
        .route("/verify", get(verify_token))
}
