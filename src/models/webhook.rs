//! Inbound webhook payload and event types sent by Umbraco.

use serde::Deserialize;

/// Header carrying the webhook event alias.
pub const EVENT_HEADER: &str = "umb-webhook-event";

/// Body of a content webhook. Only the content key is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "Id")]
    pub id: String,
}

/// Webhook events this adapter reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookEvent {
    ContentPublish,
    ContentUnpublish,
}

impl WebhookEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookEvent::ContentPublish => "Umbraco.ContentPublish",
            WebhookEvent::ContentUnpublish => "Umbraco.ContentUnpublish",
        }
    }

    /// Exact, case-sensitive match against the event header value.
    pub fn from_header(value: &str) -> Option<Self> {
        match value {
            "Umbraco.ContentPublish" => Some(WebhookEvent::ContentPublish),
            "Umbraco.ContentUnpublish" => Some(WebhookEvent::ContentUnpublish),
            _ => None,
        }
    }
}
