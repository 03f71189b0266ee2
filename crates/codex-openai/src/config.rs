//! Public configuration for the OpenAI client.

use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for [`crate::OpenAiClient`].
///
/// # Example
///
/// ```
/// use codex_openai::OpenAiClientConfig;
/// use std::time::Duration;
///
/// let config = OpenAiClientConfig::new()
///     .with_base_url("http://127.0.0.1:8080/v1")
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    /// API root; `/chat/completions` is appended.
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    /// Whole-request timeout. Bounds worst-case handler latency.
    pub(crate) timeout: Duration,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("codex-relay/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl OpenAiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root.
    ///
    /// Defaults to `https://api.openai.com/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the base URL only when one is given.
    #[must_use]
    pub fn with_optional_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.base_url = url;
        }
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 120 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the chat-completions endpoint.
    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
