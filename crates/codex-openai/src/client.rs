//! reqwest-backed [`CompletionPort`] implementation.

use std::fmt;

use async_trait::async_trait;
use codex_core::{CompletionError, CompletionParams, CompletionPort, CompletionResult};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::OpenAiClientConfig;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, classify_error_status};

/// Client for the OpenAI chat-completions endpoint.
///
/// Built once at startup and shared read-only between request handlers;
/// the inner `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    config: OpenAiClientConfig,
    api_key: String,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a client authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn new(
        config: OpenAiClientConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Chat-completions URL this client posts to.
    pub fn completions_url(&self) -> String {
        self.config.completions_url()
    }
}

#[async_trait]
impl CompletionPort for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<CompletionResult, CompletionError> {
        let url = self.completions_url();
        let body = ChatCompletionRequest::single_user_message(prompt, params);

        debug!(
            model = %params.model,
            prompt_chars = prompt.chars().count(),
            "Calling completion API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            warn!(status = %status, "Completion API returned an error status");
            return Err(classify_error_status(status.as_u16(), &error_text));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let completion: ChatCompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        debug!(
            id = %completion.id,
            model = %completion.model,
            choices = completion.choices.len(),
            finish_reason = completion
                .choices
                .first()
                .and_then(|c| c.finish_reason.as_deref())
                .unwrap_or("?"),
            first_index = completion.choices.first().map_or(0, |c| c.index),
            total_tokens = completion.usage.map_or(0, |u| u.total_tokens),
            prompt_tokens = completion.usage.map_or(0, |u| u.prompt_tokens),
            completion_tokens = completion.usage.map_or(0, |u| u.completion_tokens),
            "Completion received"
        );

        completion.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_leak_key() {
        let client = OpenAiClient::new(OpenAiClientConfig::new(), "sk-very-secret").unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("api.openai.com"));
        assert!(!debug.contains("sk-very-secret"));
    }

    #[test]
    fn test_completions_url() {
        let client = OpenAiClient::new(
            OpenAiClientConfig::new().with_base_url("http://127.0.0.1:1/v1"),
            "sk-test",
        )
        .unwrap();
        assert_eq!(
            client.completions_url(),
            "http://127.0.0.1:1/v1/chat/completions"
        );
    }
}
