//! Integration tests for the HTTP surface
//!
//! Drives the real router in-process: login, admin user listing and contract
//! lookups, including every token and validation failure path.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use contracts_api::auth::models::{User, UserRole};
use contracts_api::auth::JwtHandler;
use contracts_api::{create_router, AppState};

const SECRET: &str = "integration-test-secret";

fn app() -> Router {
    create_router(AppState::seeded(SECRET).unwrap())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn login_raw(body: &str) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method(Method::POST)
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn login(username: &str, password: &str) -> (StatusCode, Value) {
    login_raw(&json!({ "username": username, "password": password }).to_string()).await
}

async fn token_for(username: &str) -> String {
    let (status, body) = login(username, "123").await;
    assert_eq!(status, StatusCode::OK);
    body["sessionid"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_login_token_authenticates_as_user() {
    let verifier = JwtHandler::new(SECRET);

    for (username, id, role) in [("user1", 1, UserRole::Admin), ("user2", 2, UserRole::Common)] {
        let token = token_for(username).await;
        let claims = verifier.validate_token(&token).unwrap();
        assert_eq!(claims.user_id, id);
        assert_eq!(claims.role, role);
    }
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    for (username, password) in [("user1", "wrong"), ("nobody", "123"), ("USER1", "123"), ("", "")] {
        let (status, body) = login(username, password).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "message": "invalid credentials" }));
    }

    // Missing fields behave like wrong credentials
    let (status, body) = login_raw(r#"{"username":"user1"}"#).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.get("sessionid").is_none());
}

#[tokio::test]
async fn test_login_non_object_bodies_fail_authentication() {
    for body in [r#"["user1","123"]"#, r#""user1""#, "null", r#"{"username":1,"password":"123"}"#] {
        let (status, body) = login_raw(body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "message": "invalid credentials" }));
    }
}

#[tokio::test]
async fn test_login_without_json_content_type_fails_authentication() {
    let (status, body) = send(
        Request::builder()
            .method(Method::POST)
            .uri("/api/auth/login")
            .body(Body::from(r#"{"username":"user1","password":"123"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "invalid credentials" }));
}

#[tokio::test]
async fn test_login_malformed_body() {
    let (status, body) = login_raw("{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "invalid request body" }));
}

#[tokio::test]
async fn test_list_users_as_admin() {
    let token = token_for("user1").await;

    let (status, body) = get(&format!("/api/users/{}", token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [
                { "id": 1, "username": "user1", "password": "123", "role": "admin" },
                { "id": 2, "username": "user2", "password": "123", "role": "common" }
            ]
        })
    );
}

#[tokio::test]
async fn test_list_users_as_common_is_denied() {
    let token = token_for("user2").await;

    let (status, body) = get(&format!("/api/users/{}", token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "message": "access denied" }));
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (status, body) = get("/api/users/").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "token missing" }));

    let (status, _) = get("/api/contracts/empresa1/2023-01-01/").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_forged_token_is_forbidden() {
    let (status, body) = get("/api/users/garbage").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "message": "token invalid" }));

    // Correctly shaped but signed with another secret
    let forged = JwtHandler::new("someone-elses-secret")
        .generate_token(&User::new(1, "user1", "123", UserRole::Admin))
        .unwrap();
    let (status, _) = get(&format!("/api/users/{}", forged)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = get(&format!("/api/contracts/empresa1/2023-01-01/{}", forged)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let admin = User::new(1, "user1", "123", UserRole::Admin);
    let expired = JwtHandler::new(SECRET)
        .generate_token_at(&admin, Utc::now() - Duration::minutes(61))
        .unwrap();

    let (status, _) = get(&format!("/api/users/{}", expired)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = get(&format!("/api/contracts/empresa1/2023-01-01/{}", expired)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_contract_lookup_match() {
    for username in ["user1", "user2"] {
        let token = token_for(username).await;

        let (status, body) = get(&format!("/api/contracts/empresa1/2023-01-01/{}", token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "data": [ { "id": 1, "company": "empresa1", "start_date": "2023-01-01" } ] })
        );
    }
}

#[tokio::test]
async fn test_contract_lookup_no_match() {
    let token = token_for("user2").await;

    let (status, body) = get(&format!("/api/contracts/empresa1/2099-01-01/{}", token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "not found" }));

    // Right shape, impossible date
    let (status, _) = get(&format!("/api/contracts/empresa1/2023-13-45/{}", token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contract_lookup_invalid_parameters() {
    let token = token_for("user2").await;

    // "empresa1; DROP"
    let (status, body) = get(&format!("/api/contracts/empresa1%3B%20DROP/2023-01-01/{}", token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "invalid parameters" }));

    // "2023/01/01"
    let (status, _) = get(&format!("/api/contracts/empresa1/2023%2F01%2F01/{}", token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contract_lookup_undecodable_segment() {
    let token = token_for("user1").await;

    let (status, body) = get(&format!("/api/contracts/%FF/2023-01-01/{}", token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "invalid parameters" }));

    let (status, _) = get(&format!("/api/contracts/empresa1/%C3%28/{}", token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Still a token error when the token itself is bad
    let (status, _) = get("/api/contracts/%FF/2023-01-01/garbage").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_token_checked_before_parameters() {
    let (status, _) = get("/api/contracts/empresa1%3B%20DROP/2023-01-01/garbage").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let token = token_for("user1").await;

    let contracts_uri = format!("/api/contracts/empresa2/2023-02-01/{}", token);
    let first = get(&contracts_uri).await;
    let second = get(&contracts_uri).await;
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(first, second);

    let users_uri = format!("/api/users/{}", token);
    assert_eq!(get(&users_uri).await, get(&users_uri).await);
}
