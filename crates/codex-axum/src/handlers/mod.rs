//! HTTP handlers.
//!
//! Each handler extracts its inputs, delegates to the shared
//! `CompletionPort`, and maps the outcome to a response.

pub mod relay;
