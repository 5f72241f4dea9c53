//! Content unpublish handling.

use axum::http::StatusCode;

use super::WebhookResult;
use crate::catalog::build_disable_action;
use crate::models::WebhookPayload;
use crate::AppState;

/// Disable the catalog product created from the unpublished content.
pub async fn handle_unpublish(state: &AppState, payload: &WebhookPayload) -> WebhookResult {
    let action = build_disable_action(&payload.id);

    state.indexer.execute_administrative_action(&action).await?;

    tracing::info!("Disabled products for content {}", payload.id);
    Ok(StatusCode::OK)
}
