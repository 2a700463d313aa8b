//! User domain models and DTOs.
//!
//! This module contains the dashboard user entity, the request DTOs used by
//! the user management endpoints, and their response shapes.

use chrono::{DateTime, Utc};
use kirazee_core::serde::deserialize_empty_string_as_none;
use kirazee_core::{HasRole, Role};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ids::UserId;
use crate::validation::{validate_password_field, validate_role, validate_username};
use crate::value_types::Username;

/// A dashboard user.
///
/// The password hash is never loaded into this struct; queries that need it
/// select it separately.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl HasRole for User {
    fn role(&self) -> Role {
        self.role
    }
}

/// User row including the password hash, used only by login.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
}

/// The public view of a user returned by the list and create endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: UserId,
    pub username: Username,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

/// DTO for creating a new user.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(custom(function = "validate_username"))]
    #[schema(example = "support2")]
    pub username: String,
    #[validate(custom(function = "validate_password_field"))]
    #[schema(example = "support456")]
    pub password: String,
    #[validate(custom(function = "validate_role"))]
    #[schema(example = "support")]
    pub role: String,
}

/// DTO for updating a user.
///
/// Absent and blank fields are left unchanged, so an edit form can submit an
/// empty password box.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    #[validate(custom(function = "validate_password_field"))]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

/// Query parameters for filtering users.
///
/// Both filters are optional and can be combined.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilterParams {
    /// Only return users with this role
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    pub role: Option<String>,
    /// Case-insensitive username substring
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersListResponse {
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserMutationResponse {
    pub message: String,
    pub user: UserSummary,
}
