//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: The `AuthUser` extractor and per-permission guard extractors
//! - [`rate_limit`]: Per-IP login rate limiting
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` validates the JWT and extracts claims (401 on failure)
//! 3. A `Require*` extractor checks the role's permission set (403 on failure)
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, RequireViewRevenue};
//!
//! // Any valid token
//! async fn roles(auth_user: AuthUser) -> impl IntoResponse { /* ... */ }
//!
//! // Only roles holding view_revenue
//! async fn revenue(RequireViewRevenue(auth_user): RequireViewRevenue) -> impl IntoResponse {
//!     /* ... */
//! }
//! ```

pub mod auth;
pub mod rate_limit;
