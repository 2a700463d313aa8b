pub mod auth;
pub mod dashboard;
pub mod kyc;
pub mod roles;
pub mod system;
pub mod users;
