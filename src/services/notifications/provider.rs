//! Core notification provider trait and types.

use crate::models::NotificationPayload;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of a notification send attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Whether the receiver acknowledged the notification
    pub success: bool,
    /// HTTP status code, `None` when no response was received
    pub status_code: Option<u16>,
    /// Transport error description, `None` when a response was received
    pub response: Option<String>,
    /// Time taken for the operation in milliseconds
    pub duration_ms: u64,
}

/// Trait for notification providers
///
/// All providers must be Send + Sync for use in async contexts.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Sends one notification payload
    ///
    /// Transport failures are reported through `NotificationResult`.
    async fn send(&self, payload: &NotificationPayload) -> NotificationResult;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}
