//! Fixed demo accounts.
//!
//! Re-running the seeder resets each account's password, role and activity
//! so the documented credentials always work.

use chrono::{Duration, Utc};
use kirazee_core::{Role, hash_password};
use kirazee_models::UserId;
use sqlx::SqlitePool;
use std::time::Instant;

use super::models::SeedSummary;

/// `(username, password, role)` for every demo account.
pub const SAMPLE_USERS: [(&str, &str, Role); 8] = [
    ("admin1", "admin123", Role::SuperAdmin),
    ("manager1", "manager123", Role::Manager),
    ("support1", "support123", Role::Support),
    ("kyc1", "kyc12345", Role::KycAssociate),
    ("finance1", "finance123", Role::CaFinance),
    ("dev1", "dev12345", Role::Developer),
    ("admin2", "admin456", Role::SuperAdmin),
    ("manager2", "manager456", Role::Manager),
];

/// Creates or resets the demo accounts. The nth account gets a `last_login`
/// n days in the past so the user list has varied data.
pub async fn seed_sample_users(db: &SqlitePool) -> Result<SeedSummary, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Seeding {} sample users...", SAMPLE_USERS.len());

    let mut summary = SeedSummary::default();
    let mut tx = db.begin().await?;

    for (i, (username, password, role)) in SAMPLE_USERS.into_iter().enumerate() {
        let password_hash = hash_password(password)
            .map_err(|e| format!("Failed to hash password: {}", e.error))?;
        let now = Utc::now();
        let last_login = now - Duration::days(i as i64);

        let updated = sqlx::query(
            "UPDATE users
             SET password_hash = ?, role = ?, is_active = 1, last_login = ?, updated_at = ?
             WHERE username = ?",
        )
        .bind(&password_hash)
        .bind(role)
        .bind(last_login)
        .bind(now)
        .bind(username)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated > 0 {
            summary.updated += 1;
            println!("   ✓ Updated user: {} ({})", username, role);
            continue;
        }

        sqlx::query(
            "INSERT INTO users (id, username, password_hash, role, is_active, created_at, updated_at, last_login)
             VALUES (?, ?, ?, ?, 1, ?, ?, ?)",
        )
        .bind(UserId::new())
        .bind(username)
        .bind(&password_hash)
        .bind(role)
        .bind(now)
        .bind(now)
        .bind(last_login)
        .execute(&mut *tx)
        .await?;

        summary.created += 1;
        println!("   ✓ Created user: {} ({})", username, role);
    }

    tx.commit().await?;

    println!(
        "   ✓ Seeded {} users in {:?}",
        summary.total(),
        start_time.elapsed()
    );

    Ok(summary)
}
