//! Completion port for the upstream text-generation provider.
//!
//! The HTTP adapter only ever talks to this trait, so handlers can be
//! exercised with an in-process fake instead of the real API.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::domain::{CompletionParams, CompletionResult};

/// Errors returned by a completion provider.
///
/// `Display` output is what callers see for every variant except
/// [`CompletionError::Credential`], whose text must not leave the process.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The provider rejected the credential or the request parameters.
    #[error("{message}")]
    Credential {
        /// HTTP status returned by the provider.
        status: u16,
        /// Raw provider message (log only).
        message: String,
    },

    /// The provider answered with any other error status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("{0}")]
    Transport(String),

    /// The provider answered 2xx with a body that could not be decoded.
    #[error("Failed to parse completion response: {0}")]
    MalformedResponse(String),

    /// The response decoded but held no generated text.
    #[error("Completion response contained no text")]
    EmptyCompletion,
}

impl CompletionError {
    /// Returns true for credential/parameter rejections.
    ///
    /// Callers replace the message of these errors with a generic one.
    #[must_use]
    pub const fn is_credential_error(&self) -> bool {
        matches!(self, Self::Credential { .. })
    }

    /// Upstream HTTP status, when the provider produced one.
    #[must_use]
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Credential { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Transport(_) | Self::MalformedResponse(_) | Self::EmptyCompletion => None,
        }
    }
}

/// Port for generating a completion from a single user prompt.
///
/// Implementations must be safe to share across concurrently running
/// request handlers; they hold no per-request state.
#[async_trait]
pub trait CompletionPort: Send + Sync + fmt::Debug {
    /// Generate text for `prompt` using `params`.
    ///
    /// Exactly one upstream call is made. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError` if the provider call fails or yields no text.
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<CompletionResult, CompletionError>;
}
