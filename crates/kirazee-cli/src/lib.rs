//! # Kirazee CLI
//!
//! Account administration and database seeding for the Kirazee dashboard.
//!
//! This library crate provides the functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use kirazee_cli::seeder::{seed_sample_users, seed_fake_users};
//!
//! let summary = seed_sample_users(&pool).await?;
//! seed_fake_users(&pool, 500).await?;
//! ```

pub mod accounts;
pub mod seeder;
