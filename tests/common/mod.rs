#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use campus_api::auth::JwtKeys;
use campus_api::config::{AppConfig, StorageBackend};
use campus_api::types::Role;
use campus_api::{app, AppState, Storage};

pub const ADMIN_EMAIL: &str = "admin@ucsb.edu";
pub const USER_EMAIL: &str = "user@ucsb.edu";

/// In-process application over the memory backend
pub struct TestApp {
    router: Router,
    jwt: JwtKeys,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        let mut config = AppConfig::development();
        config.storage = StorageBackend::Memory;
        config.api.enable_request_logging = false;

        let jwt = JwtKeys::new("integration-test-secret", "campus-api", 1).expect("test keys");
        let router = app(AppState::new(config, Storage::Memory, jwt.clone()));
        Self { router, jwt }
    }

    pub fn admin_token(&self) -> String {
        self.jwt
            .issue(ADMIN_EMAIL, vec![Role::User, Role::Admin])
            .expect("admin token")
    }

    pub fn user_token(&self) -> String {
        self.jwt.issue(USER_EMAIL, vec![Role::User]).expect("user token")
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        Ok(TestResponse { status, body })
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Result<TestResponse> {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>) -> Result<TestResponse> {
        self.request(Method::POST, uri, token, None).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> Result<TestResponse> {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Result<TestResponse> {
        self.request(Method::DELETE, uri, token, None).await
    }
}

/// URL-encoded query string from field/value pairs
pub fn query(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

pub fn not_found_body(entity: &str, id: impl std::fmt::Display) -> Value {
    serde_json::json!({
        "type": "EntityNotFoundException",
        "message": format!("{} with id {} not found", entity, id),
    })
}
