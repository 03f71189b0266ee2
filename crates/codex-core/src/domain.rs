//! Transient request/response entities.
//!
//! Nothing here is persisted: a `PromptRequest` lives for one HTTP request
//! and a `CompletionResult` until it has been serialized into the response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated prompt, ready to be forwarded upstream.
///
/// Construction is the validation step: there is no way to obtain a
/// `PromptRequest` holding an empty prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    prompt: String,
}

impl PromptRequest {
    /// Build a request from text, rejecting the empty string.
    ///
    /// Whitespace-only prompts are accepted and forwarded unchanged.
    pub fn new(prompt: impl Into<String>) -> Option<Self> {
        let prompt = prompt.into();
        if prompt.is_empty() {
            None
        } else {
            Some(Self { prompt })
        }
    }

    /// Build a request from the `prompt` field of a decoded body.
    ///
    /// Falsy values (`null`, `""`, `0`, `false`) are rejected. Other scalars
    /// are stringified in their JSON form (`1.0` stays `"1.0"`); arrays and
    /// objects become compact JSON text.
    #[allow(clippy::float_cmp)]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::Bool(true) => Self::new("true"),
            Value::String(s) => Self::new(s.as_str()),
            Value::Number(n) => {
                // Only an exact zero (either sign) is falsy
                if n.as_f64() == Some(0.0) {
                    None
                } else {
                    Self::new(n.to_string())
                }
            }
            Value::Array(_) | Value::Object(_) => Self::new(value.to_string()),
        }
    }

    /// The prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn into_prompt(self) -> String {
        self.prompt
    }
}

/// Text generated for a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub text: String,
}

impl CompletionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Sampling configuration sent with every completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionParams {
    /// Model identifier.
    pub model: String,
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl CompletionParams {
    /// Model used by the relay.
    pub const MODEL: &'static str = "gpt-3.5-turbo";

    /// The fixed parameters the relay sends for every prompt.
    #[must_use]
    pub fn relay_defaults() -> Self {
        Self {
            model: Self::MODEL.to_string(),
            temperature: 1.0,
            max_tokens: 256,
            top_p: 1.0,
            frequency_penalty: 0.5,
            presence_penalty: 0.0,
        }
    }
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self::relay_defaults()
    }
}
