//! Wire types for the OpenAI chat-completions API.
//!
//! Domain types live in `codex-core`; this module handles the API layer mapping.

use codex_core::{CompletionError, CompletionParams, CompletionResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Request
// =============================================================================

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl ChatCompletionRequest {
    /// A request carrying `prompt` as the only (user) message.
    pub fn single_user_message(prompt: &str, params: &CompletionParams) -> Self {
        Self {
            model: params.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            frequency_penalty: params.frequency_penalty,
            presence_penalty: params.presence_penalty,
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", "assistant", or "tool".
    pub role: String,
    /// Message content (null on some assistant messages).
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.to_string()),
        }
    }
}

// =============================================================================
// Response
// =============================================================================

/// Successful response from `POST /chat/completions`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: Option<ChatMessage>,
    /// Legacy completion-style payloads put the text here.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatCompletionResponse {
    /// Text of the first choice.
    pub fn into_result(self) -> Result<CompletionResult, CompletionError> {
        let first = self
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyCompletion)?;

        first
            .message
            .and_then(|m| m.content)
            .or(first.text)
            .map(CompletionResult::new)
            .ok_or(CompletionError::EmptyCompletion)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

/// Statuses the API uses for a bad key, missing permissions, invalid
/// parameters or an unknown model.
const CREDENTIAL_STATUSES: [u16; 4] = [400, 401, 403, 404];

/// Map a non-success status and its body to a [`CompletionError`].
pub fn classify_error_status(status: u16, body: &str) -> CompletionError {
    let envelope = serde_json::from_str::<ApiErrorEnvelope>(body).ok();
    if let Some(envelope) = &envelope {
        debug!(
            status,
            error_type = ?envelope.error.error_type,
            code = ?envelope.error.code,
            "Completion API returned error envelope"
        );
    }

    let message = envelope
        .map(|envelope| envelope.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("{status}: {}", body.trim()));

    if CREDENTIAL_STATUSES.contains(&status) {
        CompletionError::Credential { status, message }
    } else {
        CompletionError::Api { status, message }
    }
}
