//! # Kirazee DB
//!
//! Database pool and migrations for the Kirazee dashboard API.
//!
//! The dashboard stores its users in SQLite through SQLx. Migrations live in
//! the workspace `migrations/` directory and are embedded into the binary.
//!
//! # Example
//!
//! ```ignore
//! use kirazee_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sqlx::Error> {
//!     let pool = init_db_pool().await?;
//!     // Use pool for database operations
//!     Ok(())
//! }
//! ```

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::str::FromStr;
use tracing::info;

// Re-export SqlitePool for convenience
pub use sqlx::SqlitePool;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://kirazee.db?mode=rwc";

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Opens a connection pool for `database_url`, creating the file if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Applies every pending migration.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))
}

/// Initializes the application pool from `DATABASE_URL` and migrates it.
///
/// Falls back to [`DEFAULT_DATABASE_URL`] when the variable is unset.
pub async fn init_db_pool() -> Result<SqlitePool, sqlx::Error> {
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = connect(&database_url).await?;
    run_migrations(&pool).await?;

    info!("Database ready");
    Ok(pool)
}
