//! Authentication domain models and DTOs.
//!
//! This module contains the login request and the login, logout and token
//! verification responses.

use kirazee_core::{Permission, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{validate_password_field, validate_username};

// Re-export JWT claim types from kirazee-auth
pub use kirazee_auth::Claims;

/// Login request with username and password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_username"))]
    #[schema(example = "admin1")]
    pub username: String,
    #[validate(custom(function = "validate_password_field"))]
    #[schema(example = "admin123")]
    pub password: String,
}

/// The authenticated user as the frontend sees it.
///
/// `permissions` is derived from `role` so the client can hide UI using the
/// same table the server enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthUserInfo {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub permissions: Vec<Permission>,
}

impl AuthUserInfo {
    pub fn new(id: impl Into<String>, username: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role,
            permissions: role.permissions().to_vec(),
        }
    }
}

impl From<&Claims> for AuthUserInfo {
    fn from(claims: &Claims) -> Self {
        Self::new(claims.sub.clone(), claims.username.clone(), claims.role)
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUserInfo,
}

/// Result of checking a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerifyResponse {
    pub fn valid(user: AuthUserInfo) -> Self {
        Self {
            valid: true,
            user: Some(user),
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            user: None,
            error: Some(error.into()),
        }
    }
}

/// Generic success message response.
///
/// Used for operations that don't return specific data, such as logout.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Access denied")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_valid() {
        let request = LoginRequest {
            username: "admin1".to_string(),
            password: "admin123".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_invalid_username() {
        let request = LoginRequest {
            username: "a b".to_string(),
            password: "admin123".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(!errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_request_short_password() {
        let request = LoginRequest {
            username: "admin1".to_string(),
            password: "short".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_auth_user_info_permissions_follow_role() {
        let info = AuthUserInfo::new("id-1", "kyc1", Role::KycAssociate);
        assert_eq!(
            info.permissions,
            vec![Permission::ViewKycQueue, Permission::VerifyKyc]
        );
    }

    #[test]
    fn test_auth_user_info_from_claims() {
        let claims = Claims {
            sub: "abc".to_string(),
            username: "dev1".to_string(),
            role: Role::Developer,
            exp: 10,
            iat: 1,
        };
        let info = AuthUserInfo::from(&claims);
        assert_eq!(info.id, "abc");
        assert_eq!(info.username, "dev1");
        assert!(info.permissions.contains(&Permission::ViewSystemLogs));
    }

    #[test]
    fn test_verify_response_shapes() {
        let invalid = serde_json::to_value(VerifyResponse::invalid("No token provided")).unwrap();
        assert_eq!(invalid["valid"], false);
        assert_eq!(invalid["error"], "No token provided");
        assert!(invalid.get("user").is_none());

        let valid =
            serde_json::to_value(VerifyResponse::valid(AuthUserInfo::new("1", "x", Role::Support)))
                .unwrap();
        assert_eq!(valid["valid"], true);
        assert_eq!(valid["user"]["role"], "support");
        assert!(valid.get("error").is_none());
    }
}
