//! Content publish handling.

use axum::http::StatusCode;

use super::WebhookResult;
use crate::catalog::build_product_update;
use crate::errors::AppError;
use crate::models::{WebhookPayload, PRODUCT_CONTENT_TYPE};
use crate::AppState;

/// Fetch the published content with its variants and replace the product in the catalog.
pub async fn handle_publish(state: &AppState, payload: &WebhookPayload) -> WebhookResult {
    // The webhook payload does not carry variant data
    let item = state.content.fetch_content(&payload.id).await?;

    let content_type = item.content_type.clone().unwrap_or_default();
    if content_type != PRODUCT_CONTENT_TYPE {
        return Err(AppError::BadRequest(format!(
            "Unable to handle content type: {}",
            content_type
        )));
    }

    let properties = item.product_properties().map_err(|e| {
        AppError::MalformedContent(format!("Invalid product {}: {}", payload.id, e))
    })?;

    let update = build_product_update(
        &payload.id,
        &item,
        &properties,
        &state.config.umbraco_host,
        &state.config.locale,
    )?;

    state.indexer.update_product(&update).await?;

    tracing::info!(
        "Updated product {} ({} variants) for content {}",
        update.product.id,
        update.variants.as_ref().map_or(0, Vec::len),
        payload.id
    );

    Ok(StatusCode::OK)
}
