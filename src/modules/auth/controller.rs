use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{info, instrument};

use kirazee_core::AppError;
use kirazee_models::auth::{
    AuthUserInfo, ErrorResponse, LoginRequest, LoginResponse, MessageResponse, VerifyResponse,
};

use super::service::AuthService;
use crate::middleware::auth::{AuthUser, authenticate};
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Login and receive a JWT
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 429, description = "Too many login attempts from this IP", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Log out. Tokens are stateless, so the client simply discards it.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip(auth_user), fields(username = %auth_user.username()))]
pub async fn logout_user(auth_user: AuthUser) -> Json<MessageResponse> {
    info!("User logged out");
    Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    })
}

/// Check whether the bearer token is valid and describe its owner
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    responses(
        (status = 200, description = "Token is valid", body = VerifyResponse),
        (status = 401, description = "Token is missing, malformed or expired", body = VerifyResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state, headers))]
pub async fn verify_token(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match authenticate(&headers, &state) {
        Ok(claims) => Json(VerifyResponse::valid(AuthUserInfo::from(&claims))).into_response(),
        Err(err) => (
            StatusCode::UNAUTHORIZED,
            Json(VerifyResponse::invalid(err.public_message())),
        )
            .into_response(),
    }
}
