//! Error handling module for the webhook adapter.
//!
//! Provides a centralized error type with mapping to HTTP status codes and plain-text responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INVALID_PAYLOAD: &str = "INVALID_PAYLOAD";
    pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
    pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
    pub const MALFORMED_CONTENT: &str = "MALFORMED_CONTENT";
    pub const INDEXING_ERROR: &str = "INDEXING_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request used a method other than POST
    MethodNotAllowed(String),
    /// Unknown event or unexpected content type
    BadRequest(String),
    /// Webhook body could not be decoded
    InvalidPayload(String),
    /// Invalid or missing configuration
    Configuration(String),
    /// CMS delivery API unreachable or returned an error
    Upstream(String),
    /// CMS record is missing fields required to build a catalog update
    MalformedContent(String),
    /// Indexing service unreachable or rejected the request
    Indexing(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidPayload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedContent(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Indexing(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed(_) => codes::METHOD_NOT_ALLOWED,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
            AppError::InvalidPayload(_) => codes::INVALID_PAYLOAD,
            AppError::Configuration(_) => codes::CONFIGURATION_ERROR,
            AppError::Upstream(_) => codes::UPSTREAM_ERROR,
            AppError::MalformedContent(_) => codes::MALFORMED_CONTENT,
            AppError::Indexing(_) => codes::INDEXING_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::MethodNotAllowed(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::InvalidPayload(msg) => msg.clone(),
            AppError::Configuration(msg) => msg.clone(),
            AppError::Upstream(msg) => msg.clone(),
            AppError::MalformedContent(msg) => msg.clone(),
            AppError::Indexing(msg) => msg.clone(),
        }
    }

    /// Body sent back to the webhook caller. Server-side failures stay generic.
    pub fn response_body(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.message()
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::InvalidPayload(format!("JSON error: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Webhook failed: {}", self);
        } else {
            tracing::warn!("Webhook rejected: {}", self);
        }
        (status, self.response_body()).into_response()
    }
}
