//! Configuration module for the webhook adapter.
//!
//! All configuration is loaded once from environment variables and is immutable afterwards.

use std::env;
use std::net::SocketAddr;

use crate::errors::AppError;

/// Language and currency applied to every localized value and price sent to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLocale {
    pub language: String,
    pub currency: String,
}

impl Default for CatalogLocale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            currency: "eur".to_string(),
        }
    }
}

/// Credentials for the indexing service dataset.
#[derive(Debug, Clone)]
pub struct IndexingConfig {
    pub dataset_id: String,
    pub api_key: String,
    pub server_url: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Umbraco site (delivery API and media)
    pub umbraco_host: String,
    /// Indexing service dataset and credentials
    pub indexing: IndexingConfig,
    /// Language/currency used for the catalog
    pub locale: CatalogLocale,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_process_env()
    }

    /// Load configuration from the process environment only.
    fn from_process_env() -> Result<Self, AppError> {
        let umbraco_host = trim_base_url(required("UMBRACO_HOST")?);

        let indexing = IndexingConfig {
            dataset_id: required("RELEWISE_DATASET_ID")?,
            api_key: required("RELEWISE_API_KEY")?,
            server_url: trim_base_url(
                env::var("RELEWISE_SERVER_URL")
                    .unwrap_or_else(|_| "https://api.relewise.com".to_string()),
            ),
        };

        let defaults = CatalogLocale::default();
        let locale = CatalogLocale {
            language: env::var("CATALOG_LANGUAGE").unwrap_or(defaults.language),
            currency: env::var("CATALOG_CURRENCY").unwrap_or(defaults.currency),
        };

        let bind_addr = env::var("WEBHOOK_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Configuration(format!("Invalid WEBHOOK_BIND_ADDR: {}", e)))?;

        let log_level = env::var("WEBHOOK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            umbraco_host,
            indexing,
            locale,
            bind_addr,
            log_level,
        })
    }
}

fn required(key: &str) -> Result<String, AppError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Configuration(format!("{} must be set", key))),
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_base_url() {
        assert_eq!(
            trim_base_url("https://cms.example.com/".to_string()),
            "https://cms.example.com"
        );
        assert_eq!(
            trim_base_url("https://cms.example.com".to_string()),
            "https://cms.example.com"
        );
    }

    #[test]
    fn test_config_from_env() {
        env::remove_var("UMBRACO_HOST");
        env::remove_var("RELEWISE_DATASET_ID");
        env::remove_var("RELEWISE_API_KEY");
        env::remove_var("RELEWISE_SERVER_URL");
        env::remove_var("CATALOG_LANGUAGE");
        env::remove_var("CATALOG_CURRENCY");
        env::remove_var("WEBHOOK_BIND_ADDR");
        env::remove_var("WEBHOOK_LOG_LEVEL");

        // Required values missing
        let err = Config::from_process_env().unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));

        env::set_var("UMBRACO_HOST", "https://cms.example.com/");
        env::set_var("RELEWISE_DATASET_ID", "dataset");
        env::set_var("RELEWISE_API_KEY", "key");

        let config = Config::from_process_env().unwrap();

        assert_eq!(config.umbraco_host, "https://cms.example.com");
        assert_eq!(config.indexing.dataset_id, "dataset");
        assert_eq!(config.indexing.api_key, "key");
        assert_eq!(config.indexing.server_url, "https://api.relewise.com");
        assert_eq!(config.locale, CatalogLocale::default());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");

        env::set_var("WEBHOOK_BIND_ADDR", "not-an-address");
        assert!(Config::from_process_env().is_err());
        env::remove_var("WEBHOOK_BIND_ADDR");
    }
}
