//! Notification delivery with pluggable providers.
//!
//! The core trait `NotificationProvider` abstracts over how a payload
//! leaves the process; `WebhookProvider` posts it as JSON.

mod provider;
mod webhook_provider;

pub use provider::{NotificationProvider, NotificationResult};
pub use webhook_provider::{
    WEBHOOK_TIMEOUT_SECS, WebhookConfig, WebhookProvider, validate_webhook_url,
};
