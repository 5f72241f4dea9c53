//! Relewise tracking API client.
//!
//! Submits product updates and administrative actions to a dataset, one attempt per call.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::IndexingConfig;
use crate::errors::AppError;
use crate::models::{ProductAdministrativeAction, ProductUpdate};

/// Destination for catalog changes.
#[async_trait]
pub trait CatalogIndexer: Send + Sync {
    /// Upsert a product (and its variants) with the update's replace semantics.
    async fn update_product(&self, update: &ProductUpdate) -> Result<(), AppError>;

    /// Apply an administrative action to all products matching its filters.
    async fn execute_administrative_action(
        &self,
        action: &ProductAdministrativeAction,
    ) -> Result<(), AppError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrackProductUpdateRequest<'a> {
    product_update: &'a ProductUpdate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrackProductAdministrativeActionRequest<'a> {
    administrative_action: &'a ProductAdministrativeAction,
}

/// HTTP client for a single Relewise dataset.
pub struct RelewiseClient {
    http: Client,
    config: IndexingConfig,
}

impl RelewiseClient {
    pub fn new(http: Client, config: IndexingConfig) -> Self {
        Self { http, config }
    }

    pub fn request_url(&self, request_type: &str) -> String {
        format!(
            "{}/{}/v1/{}",
            self.config.server_url, self.config.dataset_id, request_type
        )
    }

    async fn post<T: Serialize + ?Sized>(&self, request_type: &str, body: &T) -> Result<(), AppError> {
        let resp = self
            .http
            .post(self.request_url(request_type))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("APIKey {}", self.config.api_key),
            )
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Indexing(format!("Failed to reach indexing service: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Indexing(format!(
                "{} rejected with {}: {}",
                request_type, status, body
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl CatalogIndexer for RelewiseClient {
    async fn update_product(&self, update: &ProductUpdate) -> Result<(), AppError> {
        self.post(
            "TrackProductUpdateRequest",
            &TrackProductUpdateRequest {
                product_update: update,
            },
        )
        .await
    }

    async fn execute_administrative_action(
        &self,
        action: &ProductAdministrativeAction,
    ) -> Result<(), AppError> {
        self.post(
            "TrackProductAdministrativeActionRequest",
            &TrackProductAdministrativeActionRequest {
                administrative_action: action,
            },
        )
        .await
    }
}
