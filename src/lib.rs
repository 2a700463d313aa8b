//! # Kirazee Dashboard API
//!
//! Backend for the Kirazee marketplace admin dashboard. Staff log in with a
//! username and password, receive a JWT, and every other endpoint is gated by
//! the permissions of their role.
//!
//! ## Roles
//!
//! | Role | Can see |
//! |------|---------|
//! | `super_admin` | Everything, including user management |
//! | `manager` | Orders, businesses, delivery partners |
//! | `support` | Orders, customers |
//! | `kyc_associate` | KYC queue and decisions |
//! | `ca_finance` | Revenue and financial reports |
//! | `developer` | System logs and API analytics |
//!
//! The role-permission table lives in [`kirazee_core::permissions`] and is
//! served to the frontend through `GET /api/roles`, so the UI hides exactly
//! what the server refuses.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # AuthUser + Require* extractors, login rate limiting
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login, logout, token verification
//! │   ├── dashboard/   # /api/metrics/*
//! │   ├── kyc/         # Verification queue and decisions
//! │   ├── system/      # Logs and API analytics
//! │   ├── users/       # Dashboard user management
//! │   └── roles/       # Role-permission map
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Route tree, CORS and security headers
//! ├── state.rs          # Shared application state
//! └── validator.rs      # JSON body extractors
//! ```
//!
//! Each feature module is split into `controller.rs` (handlers),
//! `service.rs` (business logic) and `router.rs`. Shared models and DTOs
//! live in the `kirazee-models` crate.
//!
//! ## API Documentation
//!
//! When the server is running:
//!
//! - Swagger UI: `http://localhost:8000/swagger-ui`
//! - Scalar: `http://localhost:8000/scalar`

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use kirazee_auth;
pub use kirazee_config;
pub use kirazee_core;
pub use kirazee_db;
pub use kirazee_models;
