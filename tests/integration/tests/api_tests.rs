//! API Integration Tests
//!
//! Raw HTTP against a live server over the seeded store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/auth/login",
            &json!({ "email": MANAGER_EMAIL, "password": DEMO_PASSWORD }),
        )
        .await
        .unwrap();

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["id"], MANAGER_ID);
    assert_eq!(body["user"]["registrationNumber"], "EMP-0002");
}

#[tokio::test]
async fn test_logout_closes_session() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/auth/login",
            &json!({ "email": ADMIN_EMAIL, "password": DEMO_PASSWORD }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let token = body["token"].as_str().unwrap();

    let response = server.post_auth("/auth/logout", token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.post_auth("/auth/logout", token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_error_envelope() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/auth/login", &json!({ "email": "nobody", "password": "x" }))
        .await
        .unwrap();

    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_EMAIL_FORMAT");
    assert_eq!(body["error"]["message"], "Invalid email format: 'nobody'");
    assert_eq!(body["error"]["details"]["field"], "email");
}

#[tokio::test]
async fn test_malformed_body() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/auth/login", &json!({ "email": ADMIN_EMAIL }))
        .await
        .unwrap();

    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_REQUEST_BODY");
}

// ============================================================================
// Data Tests
// ============================================================================

#[tokio::test]
async fn test_pending_requests_for_manager() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!(
            "/vacation-requests?managerId={MANAGER_ID}&status=PENDING_APPROVAL"
        ))
        .await
        .unwrap();

    let body: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let mut ids: Vec<_> = body.iter().map(|r| r["id"].as_str().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![PENDING_REQUEST_ID, SECOND_PENDING_REQUEST_ID]);
}

#[tokio::test]
async fn test_put_then_get_round_trip() {
    let server = TestServer::start().await.unwrap();
    let path = format!("/vacation-requests/{PENDING_REQUEST_ID}");

    let response = server.get(&path).await.unwrap();
    let mut record: Value = assert_json(response, StatusCode::OK).await.unwrap();
    record["observation"] = json!("Updated plan");

    let response = server.put(&path, &record).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let stored: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored["observation"], "Updated plan");
    assert_eq!(stored["startDate"], "2026-12-21");
}

#[tokio::test]
async fn test_unknown_department_is_404() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/departments/dept-none").await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
