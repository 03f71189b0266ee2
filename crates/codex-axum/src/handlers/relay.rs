//! Relay handlers mounted on `/`.

use axum::Json;
use axum::extract::State;
use tracing::{debug, error};

use crate::dto::{BotResponse, GreetingResponse};
use crate::error::HttpError;
use crate::extract::PromptBody;
use crate::state::AppState;

/// Liveness greeting.
///
/// GET /
pub async fn greet() -> Json<GreetingResponse> {
    Json(GreetingResponse::default())
}

/// Forward a prompt to the completion provider.
///
/// POST /
///
/// Exactly one upstream call is made per valid request. Upstream failures are
/// logged before the error response is built.
pub async fn complete(
    State(state): State<AppState>,
    PromptBody(prompt): PromptBody,
) -> Result<Json<BotResponse>, HttpError> {
    let Some(request) = prompt else {
        debug!("Rejecting POST / without a prompt");
        return Err(HttpError::PromptRequired);
    };

    match state
        .completions
        .complete(request.prompt(), &state.params)
        .await
    {
        Ok(result) => Ok(Json(BotResponse { bot: result.text })),
        Err(e) => {
            error!(
                error = %e,
                upstream_status = ?e.upstream_status(),
                credential_error = e.is_credential_error(),
                "Error in / route"
            );
            Err(HttpError::Upstream(e))
        }
    }
}
