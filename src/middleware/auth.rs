use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use uuid::Uuid;

use kirazee_auth::{Claims, verify_token};
use kirazee_core::{AppError, HasRole, Permission, Role, has_permission};
use kirazee_observability::track_jwt_validation;

use crate::state::AppState;

/// Extractor that validates the bearer JWT and provides the caller's claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Check if the user's role grants `permission`
    pub fn has_permission(&self, permission: Permission) -> bool {
        has_permission(Some(self), permission)
    }

    /// Get the user ID as UUID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.0
            .user_id()
            .ok_or_else(|| AppError::unauthorized("Invalid or expired token".to_string()))
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl HasRole for AuthUser {
    fn role(&self) -> Role {
        self.0.role
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::unauthorized("No token provided".to_string()))?;

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::unauthorized("Invalid token format".to_string()));
    }

    Ok(token)
}

/// Validates the request's bearer token against the configured secret.
pub fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<Claims, AppError> {
    let token = bearer_token(headers)?;
    let result = verify_token(token, &state.jwt_config);
    track_jwt_validation(result.is_ok());
    result
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, state).map(AuthUser)
    }
}

/// Declares an extractor that authenticates the caller and then requires
/// one permission, rejecting with 403 `Access denied` otherwise.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = $crate::kirazee_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user =
                    $crate::middleware::auth::AuthUser::from_request_parts(parts, state).await?;
                let permission: $crate::kirazee_core::Permission = $permission;

                let allowed = auth_user.has_permission(permission);
                kirazee_observability::track_authorization_check(
                    allowed,
                    auth_user.0.role.as_str(),
                    permission.as_str(),
                );

                if !allowed {
                    tracing::warn!(
                        username = %auth_user.0.username,
                        role = %auth_user.0.role,
                        permission = %permission,
                        "Permission denied"
                    );
                    return Err($crate::kirazee_core::AppError::forbidden(
                        "Access denied".to_string(),
                    ));
                }

                Ok($name(auth_user))
            }
        }
    };
}

// Metrics
require_permission!(RequireViewRevenue, Permission::ViewRevenue);
require_permission!(RequireViewOrders, Permission::ViewOrders);
require_permission!(RequireViewBusinesses, Permission::ViewBusinesses);
require_permission!(RequireViewCustomers, Permission::ViewCustomers);
require_permission!(RequireViewDeliveryPartners, Permission::ViewDeliveryPartners);

// KYC
require_permission!(RequireViewKycQueue, Permission::ViewKycQueue);
require_permission!(RequireVerifyKyc, Permission::VerifyKyc);

// System
require_permission!(RequireViewSystemLogs, Permission::ViewSystemLogs);
require_permission!(RequireViewApiAnalytics, Permission::ViewApiAnalytics);

// Users
require_permission!(RequireManageUsers, Permission::ManageUsers);
