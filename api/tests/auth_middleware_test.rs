//! Integration tests for bearer token authentication on the API scope

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test::TestRequest};
use common::{Caller, SECRET};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;
use tp_api::middleware::auth::Claims;
use uuid::Uuid;

#[actix_web::test]
async fn test_health_does_not_require_token() {
    let app = test_app!();

    let (status, body) = send!(app, TestRequest::get().uri("/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_missing_token_is_rejected_with_error_envelope() {
    let app = test_app!();

    let (status, body) = send!(app, TestRequest::get().uri("/api/v1/jobs"));

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_malformed_and_foreign_tokens_are_rejected() {
    let app = test_app!();

    let garbage = TestRequest::get()
        .uri("/api/v1/jobs")
        .insert_header(("Authorization", "Bearer not-a-token"));
    let (status, _) = send!(app, garbage);
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "mallory@example.com".to_string(),
        name: "Mallory".to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        iss: None,
    };
    let forged = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();
    let request = TestRequest::get()
        .uri("/api/v1/jobs")
        .insert_header(("Authorization", format!("Bearer {}", forged)));
    let (status, _) = send!(app, request);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let app = test_app!();

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "ana@example.com".to_string(),
        name: "Ana".to_string(),
        exp: (chrono::Utc::now().timestamp() - 3600) as usize,
        iss: None,
    };
    let expired = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();
    let request = TestRequest::get()
        .uri("/api/v1/jobs")
        .insert_header(("Authorization", format!("Bearer {}", expired)));

    let (status, _) = send!(app, request);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_first_call_creates_member_from_token_claims() {
    let app = test_app!();
    let ana = Caller::new("Ana");

    let (status, _) = send!(app, ana.get("/api/v1/members/me"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send!(app, ana.post("/api/v1/members/me", json!({})));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], ana.id.to_string());
    assert_eq!(body["data"]["name"], "Ana");
    assert_eq!(body["data"]["notifications_enabled"], true);
    assert_eq!(body["data"]["has_unread_notifications"], false);

    // Second call returns the same record
    let (status, again) = send!(app, ana.post("/api/v1/members/me", json!({})));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["data"]["created_at"], body["data"]["created_at"]);
}

#[actix_web::test]
async fn test_unknown_route_returns_not_found_envelope() {
    let app = test_app!();

    let (status, body) = send!(app, TestRequest::get().uri("/nowhere"));

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}
