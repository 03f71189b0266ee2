//! Argument parsing and logging setup for the `codex-relay` binary.
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;
use tokio as _;
use tracing as _;

#[cfg(test)]
use tempfile as _;

pub mod logging;

use std::path::PathBuf;

use clap::Parser;
use codex_axum::{CorsConfig, ServerConfig};
use codex_core::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_LOG_FILE, DEFAULT_PORT};
use codex_openai::OpenAiClientConfig;

/// Relay prompts to the OpenAI chat-completions API over HTTP.
///
/// The API key is read from `OPENAI_API_KEY` (a `.env` file in the working
/// directory is loaded first).
#[derive(Debug, Parser)]
#[command(name = "codex-relay", version, about)]
pub struct Cli {
    /// Port to listen on.
    #[arg(long, env = "CODEX_RELAY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Origin allowed by the primary CORS policy. Repeat for several.
    #[arg(
        long = "allowed-origin",
        env = "CODEX_RELAY_ALLOWED_ORIGIN",
        default_value = DEFAULT_ALLOWED_ORIGIN,
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,

    /// Append-only log file.
    #[arg(long, env = "CODEX_RELAY_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Override the completion API root (e.g. a local mock).
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            port: self.port,
            cors: CorsConfig::from_origins(self.allowed_origins.clone()),
        }
    }

    pub fn openai_config(&self) -> OpenAiClientConfig {
        OpenAiClientConfig::new().with_optional_base_url(self.base_url.clone())
    }
}
