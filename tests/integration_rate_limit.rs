mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{
    body_json, create_test_user, get_request, send, setup_test_app,
    setup_test_app_with_rate_limit, test_pool, token_for,
};
use kirazee::kirazee_config::RateLimitConfig;
use kirazee::kirazee_core::Role;
use serde_json::json;
use std::time::{Duration, Instant};

fn login_from(ip: &str, username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_login_rate_limit_exceeded() {
    let pool = test_pool().await;
    let app = setup_test_app_with_rate_limit(pool, RateLimitConfig::default());

    // Five attempts are processed, even with bad credentials
    for _ in 0..5 {
        let response = send(&app, login_from("192.168.1.100", "admin1", "wrongpass1")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = send(&app, login_from("192.168.1.100", "admin1", "wrongpass1")).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let retry_header: u64 = response
        .headers()
        .get(header::RETRY_AFTER)
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!((1..=60).contains(&retry_header));

    let json = body_json(response).await;
    assert_eq!(json["error"], "Too many requests. Please try again later.");
    assert_eq!(json["retry_after"], retry_header);
}

#[tokio::test]
async fn test_spread_attempts_stay_within_window_budget() {
    let pool = test_pool().await;
    let config = RateLimitConfig {
        enabled: true,
        login_max_attempts: 3,
        login_window_seconds: 3,
    };
    let app = setup_test_app_with_rate_limit(pool, config);
    let started = Instant::now();

    for _ in 0..3 {
        let response = send(&app, login_from("172.16.0.9", "admin1", "wrongpass1")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Later attempts inside the same window are all rejected
    for _ in 0..4 {
        tokio::time::sleep(Duration::from_millis(400)).await;
        let response = send(&app, login_from("172.16.0.9", "admin1", "wrongpass1")).await;
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let json = body_json(response).await;
        let retry_after = json["retry_after"].as_u64().unwrap();
        assert!((1..=3).contains(&retry_after), "retry_after = {}", retry_after);
    }

    let reset = Duration::from_millis(3200);
    tokio::time::sleep(reset.saturating_sub(started.elapsed())).await;

    let response = send(&app, login_from("172.16.0.9", "admin1", "wrongpass1")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rate_limit_blocks_valid_credentials_too() {
    let pool = test_pool().await;
    create_test_user(&pool, "admin1", "admin123", Role::SuperAdmin).await;
    let config = RateLimitConfig {
        enabled: true,
        login_max_attempts: 1,
        login_window_seconds: 60,
    };
    let app = setup_test_app_with_rate_limit(pool, config);

    let response = send(&app, login_from("10.0.0.1", "admin1", "admin123")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, login_from("10.0.0.1", "admin1", "admin123")).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_is_per_ip() {
    let pool = test_pool().await;
    let config = RateLimitConfig {
        enabled: true,
        login_max_attempts: 1,
        login_window_seconds: 60,
    };
    let app = setup_test_app_with_rate_limit(pool, config);

    let response = send(&app, login_from("10.0.0.1", "admin1", "wrongpass1")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let response = send(&app, login_from("10.0.0.1", "admin1", "wrongpass1")).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = send(&app, login_from("10.0.0.2", "admin1", "wrongpass1")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rate_limit_only_applies_to_login() {
    let pool = test_pool().await;
    let user = create_test_user(&pool, "dev1", "dev12345", Role::Developer).await;
    let config = RateLimitConfig {
        enabled: true,
        login_max_attempts: 1,
        login_window_seconds: 60,
    };
    let app = setup_test_app_with_rate_limit(pool, config);
    let token = token_for(&user);

    for _ in 0..5 {
        let response = send(&app, get_request("/api/auth/verify", Some(&token))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_disabled_rate_limit() {
    let pool = test_pool().await;
    let app = setup_test_app(pool);

    for _ in 0..10 {
        let response = send(&app, login_from("192.168.1.50", "admin1", "wrongpass1")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
