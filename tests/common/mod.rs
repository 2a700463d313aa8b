use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use chrono::Utc;
use http_body_util::BodyExt;
use kirazee::kirazee_config::{CorsConfig, JwtConfig, RateLimitConfig};
use kirazee::kirazee_core::Role;
use kirazee::router::init_router;
use kirazee::state::AppState;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// A fresh, migrated in-memory database.
///
/// One connection only: every `sqlite::memory:` connection is its own database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    kirazee::kirazee_db::run_migrations(&pool).await.unwrap();
    pool
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_cors_config() -> CorsConfig {
    CorsConfig {
        allowed_origins: vec!["http://localhost:3000".to_string()],
        max_age_seconds: 86400,
    }
}

/// App without login rate limiting.
pub fn setup_test_app(pool: SqlitePool) -> Router {
    setup_test_app_with_rate_limit(pool, RateLimitConfig::disabled())
}

pub fn setup_test_app_with_rate_limit(pool: SqlitePool, rate_limit: RateLimitConfig) -> Router {
    let state = AppState::new(pool, test_jwt_config(), test_cors_config(), rate_limit);
    init_router(state)
}

/// Inserts an active user directly. Uses a low bcrypt cost to keep tests fast.
pub async fn create_test_user(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    role: Role,
) -> TestUser {
    let id = Uuid::new_v4();
    let hashed = bcrypt::hash(password, 4).unwrap();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO users (id, username, password_hash, role, is_active, created_at, updated_at)
         VALUES (?, ?, ?, ?, 1, ?, ?)",
    )
    .bind(id.to_string())
    .bind(username)
    .bind(hashed)
    .bind(role.as_str())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    TestUser {
        id,
        username: username.to_string(),
        password: password.to_string(),
        role,
    }
}

/// Signs a token for `user` without going through the login endpoint.
pub fn token_for(user: &TestUser) -> String {
    kirazee::kirazee_auth::create_access_token(
        user.id,
        &user.username,
        user.role,
        &test_jwt_config(),
    )
    .unwrap()
}

/// Creates a user with `role` and returns a token for it.
#[allow(dead_code)]
pub async fn token_for_role(pool: &SqlitePool, role: Role) -> String {
    let username = format!("{}_user", role.as_str().replace('_', ""));
    let user = create_test_user(pool, &username, "password123", role).await;
    token_for(&user)
}

#[allow(dead_code)]
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn login_request(username: &str, password: &str) -> Request<Body> {
    json_request(
        "POST",
        "/api/auth/login",
        None,
        json!({ "username": username, "password": password }),
    )
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Sends one request through a clone of `app`.
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}
