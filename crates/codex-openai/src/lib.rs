//! OpenAI chat-completions adapter implementing [`codex_core::CompletionPort`].
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod models;

// ============================================================================
// Public API
// ============================================================================

pub use client::OpenAiClient;
pub use config::{DEFAULT_BASE_URL, OpenAiClientConfig};

// Silence unused dev-dependency warnings (used by tests/)
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use wiremock as _;
