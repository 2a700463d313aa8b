//! Data models shared by the seeders.

use chrono::{DateTime, Utc};
use kirazee_core::Role;

/// Seed data for creating a user.
#[derive(Debug, Clone)]
pub struct UserSeed {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub last_login: Option<DateTime<Utc>>,
}

/// Outcome of an idempotent seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub created: usize,
    pub updated: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.created + self.updated
    }
}
