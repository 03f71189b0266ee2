//! Process configuration read from the environment.
//!
//! The `.env` file itself is loaded by the binary before anything here runs;
//! this module only looks variables up.

use std::fmt;
use thiserror::Error;

/// Environment variable holding the completion API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Origin allowed by the primary CORS policy (Vite dev server).
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Append-only error log, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "server.log";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not defined in environment variables")]
    MissingApiKey { var: &'static str },
}

/// Startup configuration required by the relay.
#[derive(Clone)]
pub struct RelayConfig {
    api_key: String,
}

impl RelayConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    ///
    /// An empty or whitespace-only key counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey { var: API_KEY_ENV })?;

        Ok(Self { api_key })
    }

    /// The completion API credential.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
