//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Read-only after startup; cloning only bumps the reference count.
pub type AppState = Arc<AxumContext>;
