//! Database seeding.
//!
//! - [`sample`]: the fixed demo accounts, one or more per role
//! - [`users`]: bulk fake users for load and UI testing

pub mod models;
pub mod sample;
pub mod users;

pub use models::{SeedSummary, UserSeed};
pub use sample::{SAMPLE_USERS, seed_sample_users};
pub use users::{generate_fake_users, insert_users_batch, seed_fake_users};
