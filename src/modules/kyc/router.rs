use crate::modules::kyc::controller::{get_pending_verifications, verify_submission};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_kyc_router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(get_pending_verifications))
        .route("/verify/{verification_id}", post(verify_submission))
}
