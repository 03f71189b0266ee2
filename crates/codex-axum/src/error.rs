//! Axum-specific error types and mappings.
//!
//! Maps validation failures and [`CompletionError`] to HTTP status codes and
//! `{"error": "..."}` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use codex_core::CompletionError;
use serde::Serialize;
use thiserror::Error;

/// Body text for a request without a usable prompt.
pub const PROMPT_REQUIRED_MESSAGE: &str = "Prompt is required";

/// Body text replacing credential/parameter errors from the provider.
pub const UPSTREAM_CREDENTIAL_MESSAGE: &str = "An error occurred while processing your request. Please check your API key and the request parameters.";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Missing or empty prompt.
    #[error("Prompt is required")]
    PromptRequired,

    /// The completion provider call failed.
    #[error(transparent)]
    Upstream(#[from] CompletionError),
}

impl HttpError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::PromptRequired => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client.
    ///
    /// Credential errors never expose the provider's text.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::PromptRequired => PROMPT_REQUIRED_MESSAGE.to_string(),
            Self::Upstream(e) if e.is_credential_error() => {
                UPSTREAM_CREDENTIAL_MESSAGE.to_string()
            }
            Self::Upstream(e) => e.to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.client_message(),
        };

        (self.status(), axum::Json(body)).into_response()
    }
}
