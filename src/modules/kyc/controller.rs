use axum::{
    Json,
    extract::{Path, Query},
};
use tracing::instrument;

use kirazee_core::AppError;
use kirazee_core::params::parse_choice;
use kirazee_models::auth::ErrorResponse;
use kirazee_models::kyc::{
    KycPendingQuery, KycTypeFilter, KycVerifyRequest, KycVerifyResponse,
    PendingVerificationsResponse,
};

use crate::middleware::auth::{RequireVerifyKyc, RequireViewKycQueue};
use crate::modules::kyc::service::KycService;
use crate::validator::AppJson;

/// Pending KYC verifications
#[utoipa::path(
    get,
    path = "/api/kyc/pending",
    params(KycPendingQuery),
    responses(
        (status = 200, description = "Pending verifications", body = PendingVerificationsResponse),
        (status = 400, description = "Invalid type filter", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires view_kyc_queue", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "KYC"
)]
#[instrument(skip(_auth))]
pub async fn get_pending_verifications(
    RequireViewKycQueue(_auth): RequireViewKycQueue,
    Query(query): Query<KycPendingQuery>,
) -> Result<Json<PendingVerificationsResponse>, AppError> {
    let filter = parse_choice::<KycTypeFilter>(query.kyc_type.as_deref(), "type")?
        .unwrap_or_default();
    Ok(Json(PendingVerificationsResponse {
        verifications: KycService::pending(filter),
    }))
}

/// Approve or reject a KYC submission
#[utoipa::path(
    post,
    path = "/api/kyc/verify/{verification_id}",
    params(
        ("verification_id" = String, Path, description = "Verification ID")
    ),
    request_body = KycVerifyRequest,
    responses(
        (status = 200, description = "Verification processed successfully", body = KycVerifyResponse),
        (status = 400, description = "Invalid id, action or reason", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires verify_kyc", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "KYC"
)]
#[instrument(skip(auth, request), fields(reviewer = %auth.username()))]
pub async fn verify_submission(
    RequireVerifyKyc(auth): RequireVerifyKyc,
    Path(verification_id): Path<String>,
    AppJson(request): AppJson<KycVerifyRequest>,
) -> Result<Json<KycVerifyResponse>, AppError> {
    let response = KycService::decide(&verification_id, request)?;
    Ok(Json(response))
}
