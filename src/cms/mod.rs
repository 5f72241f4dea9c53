//! Umbraco Delivery API client.

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::AppError;
use crate::models::ContentItem;

/// Source of full content records for webhook events.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch a single content item with its variants expanded.
    async fn fetch_content(&self, id: &str) -> Result<ContentItem, AppError>;
}

/// Reads content from the public Delivery API of an Umbraco site.
pub struct DeliveryApiClient {
    http: Client,
    host: String,
}

impl DeliveryApiClient {
    pub fn new(http: Client, host: impl Into<String>) -> Self {
        Self {
            http,
            host: host.into(),
        }
    }

    pub fn item_url(&self, id: &str) -> String {
        format!(
            "{}/umbraco/delivery/api/v2/content/item/{}?expand=properties[variants]",
            self.host, id
        )
    }
}

#[async_trait]
impl ContentSource for DeliveryApiClient {
    async fn fetch_content(&self, id: &str) -> Result<ContentItem, AppError> {
        let url = self.item_url(id);
        tracing::debug!("Fetching content {} from {}", id, url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to reach delivery API: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Delivery API returned {} for {}: {}",
                status, id, body
            )));
        }

        resp.json::<ContentItem>().await.map_err(|e| {
            AppError::MalformedContent(format!("Unreadable content item {}: {}", id, e))
        })
    }
}
