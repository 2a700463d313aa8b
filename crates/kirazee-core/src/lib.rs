//! # Kirazee Core
//!
//! Core types, errors, and the authorization model for the Kirazee dashboard API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing and verification
//! - [`roles`]: The six dashboard roles
//! - [`permissions`]: The fourteen permissions, the role-permission map and [`has_permission`]
//! - [`sanitize`]: Input sanitisation helpers
//! - [`params`]: Query parameter parsing with uniform error messages
//! - [`serde`]: Custom serde helpers
//!
//! # Example
//!
//! ```ignore
//! use kirazee_core::{Permission, Role, has_permission};
//!
//! assert!(has_permission(Some(&Role::KycAssociate), Permission::VerifyKyc));
//! assert!(!has_permission(Some(&Role::KycAssociate), Permission::ViewRevenue));
//! assert!(!has_permission(None::<&Role>, Permission::ViewOrders));
//! ```

pub mod errors;
pub mod params;
pub mod password;
pub mod permissions;
pub mod roles;
pub mod sanitize;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use permissions::{HasRole, Permission, has_permission};
pub use roles::Role;
