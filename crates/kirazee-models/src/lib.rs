//! # Kirazee Models
//!
//! Domain models and DTOs for the Kirazee dashboard API.
//!
//! # Modules
//!
//! - [`auth`]: Login request and auth responses
//! - [`users`]: The dashboard user entity and user management DTOs
//! - [`roles`]: The role-permission map as returned to clients
//! - [`dashboard`]: Revenue, order, business, customer and delivery metrics
//! - [`kyc`]: KYC verification queue
//! - [`system`]: System logs and API analytics
//!
//! # Example
//!
//! ```ignore
//! use kirazee_models::auth::{LoginRequest, LoginResponse};
//! use kirazee_models::users::{CreateUserDto, User};
//! ```

pub mod auth;
pub mod dashboard;
pub mod ids;
pub mod kyc;
pub mod roles;
pub mod system;
pub mod users;
pub mod validation;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use auth::{
    AuthUserInfo, Claims, ErrorResponse, LoginRequest, LoginResponse, MessageResponse,
    VerifyResponse,
};
pub use ids::UserId;
pub use roles::{RoleInfo, RolesResponse};
pub use users::{
    CreateUserDto, UpdateUserDto, User, UserCredentials, UserFilterParams, UserMutationResponse,
    UserSummary, UsersListResponse,
};
pub use value_types::{Username, ValueTypeError};
