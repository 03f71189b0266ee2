//! Route definitions and router construction.
//!
//! Two CORS policies apply. The primary `CorsLayer` answers preflight
//! requests for the configured origin. A second middleware stamps wildcard
//! headers onto every other response, overriding the primary policy.

use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// `Access-Control-Allow-Headers` value set by the wildcard policy.
pub const WILDCARD_ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Build the primary CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match config {
        CorsConfig::AllowAll => layer.allow_origin(Any),
        // `AllowOrigin::list` panics on `*`
        CorsConfig::AllowOrigins(origins) if origins.iter().any(|o| o.trim() == "*") => {
            layer.allow_origin(Any)
        }
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(v) => Some(v),
                    Err(e) => {
                        warn!(origin = %o, error = %e, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(allowed)
        }
    }
}

fn is_preflight(req: &Request) -> bool {
    req.method() == Method::OPTIONS
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// Wildcard CORS headers for every non-preflight response.
async fn apply_wildcard_cors(req: Request, next: Next) -> Response {
    let preflight = is_preflight(&req);
    let mut response = next.run(req).await;

    if !preflight {
        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(WILDCARD_ALLOW_HEADERS),
        );
    }

    response
}

/// Create the relay router.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    // Layers added later wrap earlier ones: the wildcard middleware sees the
    // response after the primary CORS layer has written its headers.
    Router::new()
        .route(
            "/",
            get(handlers::relay::greet).post(handlers::relay::complete),
        )
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(middleware::from_fn(apply_wildcard_cors))
        .layer(TraceLayer::new_for_http())
}
