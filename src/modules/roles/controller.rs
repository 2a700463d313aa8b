use axum::Json;
use tracing::instrument;

use kirazee_models::auth::ErrorResponse;
use kirazee_models::roles::RolesResponse;

use crate::middleware::auth::AuthUser;

/// The role-permission map the server enforces
#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "Every role and the permissions it grants", body = RolesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(_auth_user))]
pub async fn get_roles(_auth_user: AuthUser) -> Json<RolesResponse> {
    Json(RolesResponse::current())
}
