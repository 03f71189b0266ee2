//! Shared fakes and helpers for codex-axum integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use codex_axum::bootstrap::{AxumContext, CorsConfig};
use codex_axum::routes::create_router;
use codex_core::{CompletionError, CompletionParams, CompletionPort, CompletionResult};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// CORS origin allowed by the default configuration.
pub const TEST_CORS_ORIGIN: &str = "http://localhost:5173";

/// Echoes the prompt back and counts invocations.
#[derive(Debug, Default)]
pub struct EchoPort {
    pub calls: AtomicUsize,
    pub delay: Option<Duration>,
}

impl EchoPort {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay: Some(delay),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionPort for EchoPort {
    async fn complete(
        &self,
        prompt: &str,
        _params: &CompletionParams,
    ) -> Result<CompletionResult, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(CompletionResult::new(format!("echo: {prompt}")))
    }
}

/// Fails every call with a fixed error produced by `make_error`.
#[derive(Debug)]
pub struct FailingPort {
    pub make_error: fn() -> CompletionError,
}

#[async_trait]
impl CompletionPort for FailingPort {
    async fn complete(
        &self,
        _prompt: &str,
        _params: &CompletionParams,
    ) -> Result<CompletionResult, CompletionError> {
        Err((self.make_error)())
    }
}

pub fn router_with(port: Arc<dyn CompletionPort>) -> Router {
    create_router(AxumContext::new(port), &CorsConfig::default())
}

pub fn json_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and decode the JSON response body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
