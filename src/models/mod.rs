//! Data models for the webhook adapter.
//!
//! Inbound Umbraco payloads and content records, and the outbound catalog representation.

mod catalog;
mod content;
mod webhook;

pub use catalog::*;
pub use content::*;
pub use webhook::*;
