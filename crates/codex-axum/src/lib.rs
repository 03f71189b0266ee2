//! Axum HTTP adapter for codex-relay.
//!
//! Exposes `GET /` (liveness greeting) and `POST /` (prompt relay) and wires
//! the configured [`codex_core::CompletionPort`] into the handlers.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings (used by tests/)
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use reqwest as _;
#[cfg(test)]
use tower as _;
#[cfg(test)]
use tracing_subscriber as _;
#[cfg(test)]
use wiremock as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, serve, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
