//! Webhook API module.
//!
//! A single endpoint receives every Umbraco webhook and dispatches on the event header.

mod publish;
mod unpublish;

pub use publish::*;
pub use unpublish::*;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode},
};

use crate::errors::AppError;
use crate::models::{WebhookEvent, WebhookPayload, EVENT_HEADER};
use crate::AppState;

/// Response type for webhook handlers. Success is an empty body.
pub type WebhookResult = Result<StatusCode, AppError>;

/// ANY / - Receive an Umbraco webhook.
pub async fn handle_webhook(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> WebhookResult {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed(
            "Expected a POST request".to_string(),
        ));
    }

    let event_name = headers
        .get(EVENT_HEADER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    let Some(event) = WebhookEvent::from_header(&event_name) else {
        return Err(AppError::BadRequest(format!(
            "Unable to handle event: {}",
            event_name
        )));
    };

    let payload: WebhookPayload = serde_json::from_slice(&body)?;
    tracing::info!("Received {} for content {}", event.as_str(), payload.id);

    match event {
        WebhookEvent::ContentPublish => handle_publish(&state, &payload).await,
        WebhookEvent::ContentUnpublish => handle_unpublish(&state, &payload).await,
    }
}
