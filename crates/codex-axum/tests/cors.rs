//! Integration tests for the two CORS policies.
//!
//! - Preflight requests are answered by the primary (fixed origin) policy
//! - Every other response carries the wildcard headers

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use tower::ServiceExt;

use codex_axum::bootstrap::{AxumContext, CorsConfig};
use codex_axum::routes::create_router;

use common::{EchoPort, TEST_CORS_ORIGIN, json_post, router_with};

#[tokio::test]
async fn preflight_uses_primary_policy() {
    let app = router_with(Arc::new(EchoPort::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/")
                .header(header::ORIGIN, TEST_CORS_ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        TEST_CORS_ORIGIN
    );

    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    let allowed_headers = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("content-type"));
    assert!(allowed_headers.contains("authorization"));
}

#[tokio::test]
async fn preflight_from_other_origin_gets_no_allow_origin() {
    let app = router_with(Arc::new(EchoPort::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/")
                .header(header::ORIGIN, "https://evil.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn simple_responses_carry_wildcard_headers() {
    let app = router_with(Arc::new(EchoPort::default()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, TEST_CORS_ORIGIN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .unwrap(),
        "Origin, X-Requested-With, Content-Type, Accept"
    );
}

#[tokio::test]
async fn error_responses_carry_wildcard_headers() {
    let app = router_with(Arc::new(EchoPort::default()));

    let response = app.oneshot(json_post("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn wildcard_origin_entry_allows_any_preflight() {
    for cors in [
        CorsConfig::AllowAll,
        CorsConfig::AllowOrigins(vec!["*".to_string()]),
    ] {
        let app = create_router(AxumContext::new(Arc::new(EchoPort::default())), &cors);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/")
                    .header(header::ORIGIN, "https://anywhere.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success(), "{cors:?}");
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
