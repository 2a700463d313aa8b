//! Fake user seeding.
//!
//! Usernames are built from fake first and last names plus the user's index,
//! so they are unique within a run and always pass username validation.

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::name::en::*;
use kirazee_core::{Role, hash_password};
use kirazee_models::UserId;
use kirazee_models::value_types::USERNAME_MAX_LENGTH;
use rayon::prelude::*;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::time::Instant;

use super::models::UserSeed;

/// Password shared by every fake user.
pub const FAKE_USER_PASSWORD: &str = "password123";

fn fake_username(index: usize) -> String {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();

    let stem: String = format!("{first}{last}")
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let suffix = format!("_{index}");

    // Room for the suffix; fall back to a plain stem if the names were all non-ASCII
    let max_stem = USERNAME_MAX_LENGTH - suffix.len();
    let stem = match stem.len() {
        0 => "user".to_string(),
        n if n > max_stem => stem[..max_stem].to_string(),
        _ => stem,
    };

    format!("{stem}{suffix}")
}

/// Generates `count` users with random names, roles and recent logins.
pub fn generate_fake_users(count: usize, password_hash: &str) -> Vec<UserSeed> {
    let now = Utc::now();

    (0..count)
        .into_par_iter()
        .map(|index| {
            let role = Role::ALL[(0..Role::ALL.len()).fake::<usize>()];
            // Roughly a quarter have never logged in
            let has_logged_in = (0..4).fake::<u8>() != 0;
            let last_login =
                has_logged_in.then(|| now - Duration::hours((1..24 * 30).fake::<i64>()));

            UserSeed {
                username: fake_username(index),
                password_hash: password_hash.to_string(),
                role,
                last_login,
            }
        })
        .collect()
}

/// Generates and inserts `count` fake users. Returns how many were inserted.
pub async fn seed_fake_users(
    db: &SqlitePool,
    count: usize,
) -> Result<usize, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} fake users...", count);

    let password_hash = hash_password(FAKE_USER_PASSWORD)
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;
    let users = generate_fake_users(count, &password_hash);
    let inserted = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} fake users in {:?} (password: {})",
        inserted,
        start_time.elapsed(),
        FAKE_USER_PASSWORD
    );

    Ok(inserted)
}

/// Inserts users in batches, skipping usernames that already exist.
pub async fn insert_users_batch(
    db: &SqlitePool,
    users: &[UserSeed],
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 7 params per user, under SQLite's default 32766 variable limit
    const BATCH_SIZE: usize = 4000;

    let mut inserted = 0;
    for chunk in users.chunks(BATCH_SIZE) {
        inserted += insert_users_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;
    Ok(inserted)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Sqlite>,
    users: &[UserSeed],
) -> Result<usize, Box<dyn std::error::Error>> {
    if users.is_empty() {
        return Ok(0);
    }

    let mut query = String::from(
        "INSERT INTO users (id, username, password_hash, role, is_active, created_at, updated_at, last_login) VALUES ",
    );

    for i in 0..users.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str("(?, ?, ?, ?, 1, ?, ?, ?)");
    }

    query.push_str(" ON CONFLICT (username) DO NOTHING");

    let now = Utc::now();
    let mut q = sqlx::query(&query);
    for user in users {
        q = q
            .bind(UserId::new())
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.role)
            .bind(now)
            .bind(now)
            .bind(user.last_login);
    }

    let result = q.execute(&mut **tx).await?;
    Ok(result.rows_affected() as usize)
}
