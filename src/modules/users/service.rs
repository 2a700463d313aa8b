use anyhow::{Context, anyhow};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{info, instrument};

use kirazee_core::sanitize::sanitize_search_query;
use kirazee_core::{AppError, Role, hash_password};
use kirazee_models::ids::UserId;
use kirazee_models::users::{CreateUserDto, UpdateUserDto, User, UserFilterParams};
use kirazee_models::value_types::Username;
use kirazee_observability::{track_user_created, track_user_deactivated};

use crate::validator::validate_dto;

const USER_COLUMNS: &str = "id, username, role, is_active, created_at, updated_at, last_login";

fn duplicate_username() -> AppError {
    AppError::bad_request(anyhow!("Username already exists"))
}

fn user_not_found() -> AppError {
    AppError::not_found(anyhow!("User not found"))
}

fn parse_username(raw: &str) -> Result<Username, AppError> {
    Username::new(raw).map_err(AppError::bad_request)
}

fn parse_role(raw: &str) -> Result<Role, AppError> {
    raw.parse::<Role>().map_err(AppError::bad_request)
}

/// Maps a unique constraint violation on insert/update to the duplicate
/// username error. The pre-check covers the common case; this covers races.
fn map_write_error(err: sqlx::Error, context: &'static str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => duplicate_username(),
        _ => AppError::database(anyhow::Error::new(err).context(context)),
    }
}

/// Escapes `%`, `_` and `\` so user input is matched literally by `LIKE ... ESCAPE '\'`.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct UserService;

impl UserService {
    /// Active users, newest first, optionally filtered by role and username substring.
    #[instrument(skip(db))]
    pub async fn list_users(db: &SqlitePool, filters: UserFilterParams) -> Result<Vec<User>, AppError> {
        let role = filters.role.as_deref().map(parse_role).transpose()?;
        let search = match filters.search.as_deref() {
            Some(raw) => Some(sanitize_search_query(raw)?).filter(|s| !s.is_empty()),
            None => None,
        };

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        query.push(USER_COLUMNS);
        query.push(" FROM users WHERE is_active = 1");

        if let Some(role) = role {
            query.push(" AND role = ").push_bind(role);
        }

        if let Some(search) = search {
            // SQLite LIKE is case-insensitive for ASCII
            query
                .push(" AND username LIKE ")
                .push_bind(format!("%{}%", escape_like(&search)))
                .push(" ESCAPE '\\'");
        }

        query.push(" ORDER BY created_at DESC");

        let users = query
            .build_query_as::<User>()
            .fetch_all(db)
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)?;

        Ok(users)
    }

    pub async fn find_active_user(db: &SqlitePool, id: UserId) -> Result<User, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ? AND is_active = 1");
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch user by ID")
            .map_err(AppError::database)?
            .ok_or_else(user_not_found)
    }

    async fn username_taken(
        db: &SqlitePool,
        username: &Username,
        exclude: Option<UserId>,
    ) -> Result<bool, AppError> {
        let count: i64 = match exclude {
            Some(id) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ? AND id != ?")
                    .bind(username)
                    .bind(id)
                    .fetch_one(db)
                    .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?")
                    .bind(username)
                    .fetch_one(db)
                    .await
            }
        }
        .context("Failed to check username availability")
        .map_err(AppError::database)?;

        Ok(count > 0)
    }

    /// Creates a user. Usernames are unique across active and deactivated users.
    #[instrument(skip(db, dto), fields(username = %dto.username, role = %dto.role))]
    pub async fn create_user(db: &SqlitePool, dto: CreateUserDto) -> Result<User, AppError> {
        let username = parse_username(&dto.username)?;
        let role = parse_role(&dto.role)?;

        if Self::username_taken(db, &username, None).await? {
            return Err(duplicate_username());
        }

        let password_hash = hash_password(&dto.password)?;
        let now = Utc::now();

        let sql = format!(
            "INSERT INTO users (id, username, password_hash, role, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 1, ?, ?) RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(UserId::new())
            .bind(&username)
            .bind(password_hash)
            .bind(role)
            .bind(now)
            .bind(now)
            .fetch_one(db)
            .await
            .map_err(|e| map_write_error(e, "Failed to insert user"))?;

        track_user_created(role.as_str());
        info!(user_id = %user.id, "User created");

        Ok(user)
    }

    /// Applies the provided fields to an active user. Absent fields are left unchanged.
    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &SqlitePool,
        id: UserId,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        Self::find_active_user(db, id).await?;
        validate_dto(&dto)?;

        let username = dto.username.as_deref().map(parse_username).transpose()?;
        let role = dto.role.as_deref().map(parse_role).transpose()?;

        if let Some(username) = &username {
            if Self::username_taken(db, username, Some(id)).await? {
                return Err(duplicate_username());
            }
        }

        let password_hash = dto.password.as_deref().map(hash_password).transpose()?;

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET updated_at = ");
        query.push_bind(Utc::now());

        if let Some(username) = username {
            query.push(", username = ").push_bind(username);
        }
        if let Some(password_hash) = password_hash {
            query.push(", password_hash = ").push_bind(password_hash);
        }
        if let Some(role) = role {
            query.push(", role = ").push_bind(role);
        }

        query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" AND is_active = 1 RETURNING ")
            .push(USER_COLUMNS);

        let user = query
            .build_query_as::<User>()
            .fetch_optional(db)
            .await
            .map_err(|e| map_write_error(e, "Failed to update user"))?
            .ok_or_else(user_not_found)?;

        info!(user_id = %user.id, "User updated");

        Ok(user)
    }

    /// Soft delete: the row is kept with `is_active = 0` and can no longer log in.
    #[instrument(skip(db))]
    pub async fn deactivate_user(db: &SqlitePool, id: UserId) -> Result<User, AppError> {
        let sql = format!(
            "UPDATE users SET is_active = 0, updated_at = ? \
             WHERE id = ? AND is_active = 1 RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to deactivate user")
            .map_err(AppError::database)?
            .ok_or_else(user_not_found)?;

        track_user_deactivated(user.role.as_str());
        info!(user_id = %user.id, "User deactivated");

        Ok(user)
    }
}
