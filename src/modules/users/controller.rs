use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use kirazee_core::AppError;
use kirazee_models::auth::ErrorResponse;
use kirazee_models::ids::UserId;
use kirazee_models::users::{
    CreateUserDto, UpdateUserDto, UserFilterParams, UserMutationResponse, UserSummary,
    UsersListResponse,
};

use crate::middleware::auth::RequireManageUsers;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::{AppJson, ValidatedJson};

const MAX_USER_ID_LENGTH: usize = 100;

/// Path ids that are not UUIDs cannot name a user, so they are reported as
/// not found rather than as malformed.
fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    let raw = raw.trim();
    if raw.chars().count() > MAX_USER_ID_LENGTH {
        return Err(AppError::bad_request(anyhow!("Invalid user ID")));
    }
    raw.parse()
        .map_err(|_| AppError::not_found(anyhow!("User not found")))
}

/// List active users
#[utoipa::path(
    get,
    path = "/api/users",
    params(UserFilterParams),
    responses(
        (status = 200, description = "Active users, newest first", body = UsersListResponse),
        (status = 400, description = "Invalid role filter or search term", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires manage_users", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _auth))]
pub async fn get_users(
    State(state): State<AppState>,
    RequireManageUsers(_auth): RequireManageUsers,
    Query(filters): Query<UserFilterParams>,
) -> Result<Json<UsersListResponse>, AppError> {
    let users = UserService::list_users(&state.db, filters).await?;
    Ok(Json(UsersListResponse {
        users: users.into_iter().map(UserSummary::from).collect(),
    }))
}

/// Create a new dashboard user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created successfully", body = UserMutationResponse),
        (status = 400, description = "Validation error or username already exists", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires manage_users", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _auth, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    RequireManageUsers(_auth): RequireManageUsers,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserMutationResponse>), AppError> {
    let user = UserService::create_user(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserMutationResponse {
            message: "User created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// Update a user's username, password or role
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated successfully", body = UserMutationResponse),
        (status = 400, description = "Validation error or username already exists", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires manage_users", body = ErrorResponse),
        (status = 404, description = "User not found or deactivated, checked before the body is validated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _auth, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    RequireManageUsers(_auth): RequireManageUsers,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<UserMutationResponse>, AppError> {
    let id = parse_user_id(&id)?;
    let user = UserService::update_user(&state.db, id, dto).await?;
    Ok(Json(UserMutationResponse {
        message: "User updated successfully".to_string(),
        user: user.into(),
    }))
}

/// Deactivate a user (soft delete)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = UserMutationResponse),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires manage_users", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _auth))]
pub async fn delete_user(
    State(state): State<AppState>,
    RequireManageUsers(_auth): RequireManageUsers,
    Path(id): Path<String>,
) -> Result<Json<UserMutationResponse>, AppError> {
    let id = parse_user_id(&id)?;
    let user = UserService::deactivate_user(&state.db, id).await?;
    Ok(Json(UserMutationResponse {
        message: "User deleted successfully".to_string(),
        user: user.into(),
    }))
}
