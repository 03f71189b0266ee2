//! Core domain types and ports for codex-relay.
//!
//! This crate knows nothing about HTTP servers or the concrete completion
//! provider. Adapters (`codex-openai`, `codex-axum`) depend on it, never the
//! other way around.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;

pub use config::{
    API_KEY_ENV, ConfigError, DEFAULT_ALLOWED_ORIGIN, DEFAULT_LOG_FILE, DEFAULT_PORT, RelayConfig,
};
pub use domain::{CompletionParams, CompletionResult, PromptRequest};
pub use ports::{CompletionError, CompletionPort};

// Used by async port tests only
#[cfg(test)]
use tokio as _;
