mod common;

use axum::http::StatusCode;
use common::{body_json, get_request, send, setup_test_app, test_pool, token_for_role};
use kirazee::kirazee_core::Role;
use serde_json::json;

#[tokio::test]
async fn test_get_roles_for_any_authenticated_user() {
    let pool = test_pool().await;
    let token = token_for_role(&pool, Role::Support).await;
    let app = setup_test_app(pool);

    let response = send(&app, get_request("/api/roles", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let roles = json["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 6);
    assert_eq!(json["permissions"].as_array().unwrap().len(), 14);

    let kyc = roles.iter().find(|r| r["role"] == "kyc_associate").unwrap();
    assert_eq!(kyc["name"], "KYC Associate");
    assert_eq!(kyc["permissions"], json!(["view_kyc_queue", "verify_kyc"]));

    let admin = roles.iter().find(|r| r["role"] == "super_admin").unwrap();
    assert_eq!(admin["permissions"].as_array().unwrap().len(), 14);
}

#[tokio::test]
async fn test_get_roles_requires_token() {
    let pool = test_pool().await;
    let app = setup_test_app(pool);

    let response = send(&app, get_request("/api/roles", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_and_security_headers() {
    let pool = test_pool().await;
    let app = setup_test_app(pool);

    let response = send(&app, get_request("/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-xss-protection"], "1; mode=block");

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_error_responses_carry_security_headers() {
    let pool = test_pool().await;
    let app = setup_test_app(pool);

    let response = send(&app, get_request("/api/users", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let pool = test_pool().await;
    let app = setup_test_app(pool);

    let response = send(&app, get_request("/api-docs/openapi.json", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["info"]["title"], "Kirazee Dashboard API");
    assert!(json["paths"].get("/api/auth/login").is_some());
    assert!(json["paths"].get("/api/kyc/verify/{verification_id}").is_some());
}
