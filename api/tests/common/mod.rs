//! Shared helpers for HTTP integration tests against in-memory storage.

#![allow(dead_code)]

use actix_web::test::TestRequest;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::Value;
use uuid::Uuid;

use tp_api::middleware::auth::Claims;
use tp_shared::{AppConfig, AuthConfig};

pub const SECRET: &str = "integration-test-secret";

pub fn config() -> AppConfig {
    AppConfig {
        auth: AuthConfig::new(SECRET),
        ..AppConfig::default()
    }
}

/// A signed identity-provider token for `member_id`
pub fn token_for(member_id: Uuid, name: &str) -> String {
    let claims = Claims {
        sub: member_id.to_string(),
        email: format!("{}-{}@example.com", name.to_lowercase(), member_id.simple()),
        name: name.to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        iss: None,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

/// A caller holding a valid token
pub struct Caller {
    pub id: Uuid,
    pub token: String,
}

impl Caller {
    pub fn new(name: &str) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            token: token_for(id, name),
        }
    }

    fn authorized(&self, request: TestRequest) -> TestRequest {
        request.insert_header(("Authorization", format!("Bearer {}", self.token)))
    }

    pub fn get(&self, path: &str) -> TestRequest {
        self.authorized(TestRequest::get().uri(path))
    }

    pub fn delete(&self, path: &str) -> TestRequest {
        self.authorized(TestRequest::delete().uri(path))
    }

    pub fn post(&self, path: &str, body: Value) -> TestRequest {
        self.authorized(TestRequest::post().uri(path).set_json(body))
    }

    pub fn put(&self, path: &str, body: Value) -> TestRequest {
        self.authorized(TestRequest::put().uri(path).set_json(body))
    }
}

/// Sends a request and returns the status with the decoded JSON body
/// (`Value::Null` for empty bodies)
macro_rules! send {
    ($app:expr, $request:expr) => {{
        let response = actix_web::test::call_service(&$app, $request.to_request()).await;
        let status = response.status();
        let body = actix_web::test::read_body(response).await;
        let json: serde_json::Value = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }};
}

/// Builds the application over fresh in-memory repositories
macro_rules! test_app {
    () => {
        actix_web::test::init_service(tp_api::create_app(
            actix_web::web::Data::new(tp_api::AppState::in_memory()),
            &common::config(),
        ))
        .await
    };
}
