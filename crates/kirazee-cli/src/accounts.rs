//! Single-account administration: create, deactivate and describe roles.

use chrono::Utc;
use kirazee_core::{Role, hash_password};
use kirazee_models::UserId;
use kirazee_models::value_types::{Username, validate_password};
use sqlx::SqlitePool;

/// Creates an active user after applying the same rules as the API.
pub async fn create_user(
    db: &SqlitePool,
    username: &str,
    password: &str,
    role: &str,
) -> Result<UserId, Box<dyn std::error::Error>> {
    let username = Username::new(username)?;
    validate_password(password)?;
    let role: Role = role.parse()?;

    let password_hash =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;
    let now = Utc::now();

    let id = sqlx::query_scalar::<_, UserId>(
        "INSERT INTO users (id, username, password_hash, role, is_active, created_at, updated_at)
         VALUES (?, ?, ?, ?, 1, ?, ?)
         ON CONFLICT (username) DO NOTHING
         RETURNING id",
    )
    .bind(UserId::new())
    .bind(&username)
    .bind(&password_hash)
    .bind(role)
    .bind(now)
    .bind(now)
    .fetch_optional(db)
    .await?;

    id.ok_or_else(|| "Username already exists".into())
}

/// Soft-deletes a user so they can no longer log in.
pub async fn deactivate_user(
    db: &SqlitePool,
    username: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = sqlx::query(
        "UPDATE users SET is_active = 0, updated_at = ? WHERE username = ? AND is_active = 1",
    )
    .bind(Utc::now())
    .bind(username.trim())
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(format!("No active user named '{}'", username.trim()).into());
    }

    Ok(())
}

/// The role-permission map as an aligned plain-text table.
pub fn role_table() -> String {
    let width = Role::ALL
        .iter()
        .map(|r| r.as_str().len())
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    for role in Role::ALL {
        let permissions = role
            .permissions()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "{:width$}  {} ({})\n",
            role.as_str(),
            permissions,
            role.display_name(),
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        kirazee_db::run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_and_deactivate_user() {
        let pool = test_pool().await;

        create_user(&pool, "support9", "support999", "support")
            .await
            .unwrap();

        let err = create_user(&pool, "support9", "support999", "support")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Username already exists");

        deactivate_user(&pool, "support9").await.unwrap();
        assert!(deactivate_user(&pool, "support9").await.is_err());
    }

    #[tokio::test]
    async fn test_create_user_rejects_invalid_input() {
        let pool = test_pool().await;

        let err = create_user(&pool, "ab", "support999", "support")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("at least 3"));

        let err = create_user(&pool, "support9", "short", "support")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters");

        let err = create_user(&pool, "support9", "support999", "owner")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid role. Must be one of:"));
    }

    #[test]
    fn test_role_table_lists_every_role() {
        let table = role_table();
        assert_eq!(table.lines().count(), 6);
        assert!(table.contains("kyc_associate"));
        assert!(table.contains("view_kyc_queue, verify_kyc"));
    }
}
