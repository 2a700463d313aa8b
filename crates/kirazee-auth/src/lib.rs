//! # Kirazee Auth
//!
//! Authentication types and JWT utilities for the Kirazee dashboard API.
//!
//! This crate provides:
//!
//! - [`claims`]: The access token claim structure
//! - [`jwt`]: Token creation and verification utilities
//!
//! Tokens are HS256 signed, carry the user's id, username and role, and are
//! valid for 24 hours by default. Authorization decisions are made from the
//! role in the claims without a database lookup.
//!
//! # Example
//!
//! ```ignore
//! use kirazee_auth::{create_access_token, verify_token};
//! use kirazee_config::JwtConfig;
//! use kirazee_core::Role;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "manager1", Role::Manager, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, Role::Manager);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
