use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

use kirazee_auth::create_access_token;
use kirazee_config::JwtConfig;
use kirazee_core::{AppError, verify_password};
use kirazee_models::auth::{AuthUserInfo, LoginRequest, LoginResponse};
use kirazee_models::users::UserCredentials;
use kirazee_observability::{track_jwt_issued, track_user_login_failure, track_user_login_success};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub struct AuthService;

impl AuthService {
    /// Checks the credentials, records the login time and issues a token.
    ///
    /// Unknown users, deactivated users and wrong passwords all produce the
    /// same 401 so callers cannot probe which usernames exist.
    #[instrument(skip(db, dto, jwt_config), fields(username = %dto.username.trim()))]
    pub async fn login_user(
        db: &SqlitePool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let username = dto.username.trim();

        let user = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, username, password_hash, role, is_active FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user credentials")
        .map_err(AppError::database)?;

        let Some(user) = user else {
            warn!("Login failed: unknown user");
            track_user_login_failure("unknown_user");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !user.is_active {
            warn!("Login failed: user is deactivated");
            track_user_login_failure("inactive_user");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        if !verify_password(&dto.password, &user.password_hash)? {
            warn!("Login failed: wrong password");
            track_user_login_failure("invalid_password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        sqlx::query("UPDATE users SET last_login = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(user.id)
            .execute(db)
            .await
            .context("Failed to record last login")
            .map_err(AppError::database)?;

        let token = create_access_token(
            user.id.into_inner(),
            user.username.as_str(),
            user.role,
            jwt_config,
        )?;

        track_jwt_issued();
        track_user_login_success(user.role.as_str());
        info!(role = %user.role, "User logged in");

        Ok(LoginResponse {
            token,
            user: AuthUserInfo::new(user.id.to_string(), user.username.into_inner(), user.role),
        })
    }
}
