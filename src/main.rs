//! Umbraco Catalog Webhook
//!
//! Receives Umbraco content webhooks and keeps a Relewise product catalog in sync.

mod api;
mod catalog;
mod cms;
mod config;
mod errors;
mod indexing;
mod models;

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cms::{ContentSource, DeliveryApiClient};
use config::Config;
use indexing::{CatalogIndexer, RelewiseClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    pub indexer: Arc<dyn CatalogIndexer>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Umbraco catalog webhook");
    tracing::info!("Umbraco host: {}", config.umbraco_host);
    tracing::info!(
        "Indexing dataset: {} at {}",
        config.indexing.dataset_id,
        config.indexing.server_url
    );
    tracing::info!(
        "Catalog locale: {}/{}",
        config.locale.language,
        config.locale.currency
    );
    tracing::info!("Bind address: {}", config.bind_addr);

    // Outbound clients share one connection pool
    let http = reqwest::Client::new();
    let state = AppState {
        content: Arc::new(DeliveryApiClient::new(
            http.clone(),
            config.umbraco_host.clone(),
        )),
        indexer: Arc::new(RelewiseClient::new(http, config.indexing.clone())),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(api::handle_webhook))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
