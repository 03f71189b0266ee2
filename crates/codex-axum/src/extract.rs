//! Prompt extraction from JSON or urlencoded request bodies.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use codex_core::PromptRequest;
use serde_json::Value;
use tracing::debug;

/// The `prompt` field of a `POST /` body, if one was usable.
///
/// Never rejects: an unparseable body or an unsupported content type simply
/// yields `None`, and the handler answers 400.
#[derive(Debug)]
pub struct PromptBody(pub Option<PromptRequest>);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let Some(mime) = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase())
    else {
        return BodyKind::Other;
    };

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for PromptBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );

        let body: Option<Value> = match kind {
            BodyKind::Json => match Json::<Value>::from_request(req, state).await {
                Ok(Json(value)) => Some(value),
                Err(e) => {
                    debug!(error = %e, "Ignoring unparseable JSON body");
                    None
                }
            },
            BodyKind::Form => match Form::<HashMap<String, String>>::from_request(req, state).await
            {
                Ok(Form(fields)) => Some(Value::Object(
                    fields
                        .into_iter()
                        .map(|(k, v)| (k, Value::String(v)))
                        .collect(),
                )),
                Err(e) => {
                    debug!(error = %e, "Ignoring unparseable form body");
                    None
                }
            },
            BodyKind::Other => None,
        };

        let prompt = body
            .as_ref()
            .and_then(|b| b.get("prompt"))
            .and_then(PromptRequest::from_json);

        Ok(Self(prompt))
    }
}
