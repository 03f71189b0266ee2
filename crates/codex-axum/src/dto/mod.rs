//! Response bodies for the relay routes.

use serde::{Deserialize, Serialize};

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Hello from Codex";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self {
            message: GREETING.to_string(),
        }
    }
}

/// Successful body of `POST /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotResponse {
    /// Generated text.
    pub bot: String,
}
