//! Webhook notification provider implementation.
//!
//! Posts the payload as JSON to the configured URL using the global HTTP_CLIENT.

use super::provider::{NotificationProvider, NotificationResult};
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use crate::models::NotificationPayload;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::{Duration, Instant};

/// Fixed request timeout for webhook delivery
pub const WEBHOOK_TIMEOUT_SECS: u64 = 10;

/// Target of a webhook provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout_seconds: u64,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_seconds: WEBHOOK_TIMEOUT_SECS,
        }
    }
}

/// Webhook notification provider
///
/// Sends exactly one `POST` per payload with `Content-Type: application/json`
/// and no authentication headers. Only `200 OK` counts as delivered.
///
/// # Example
/// ```ignore
/// let provider = WebhookProvider::new(WebhookConfig::new("http://your-server/webhook"));
/// let result = provider.send(&payload).await;
/// ```
pub struct WebhookProvider {
    config: WebhookConfig,
}

impl WebhookProvider {
    pub fn new(config: WebhookConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    fn describe_error(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!(
                "request timed out after {}s: {}",
                self.config.timeout_seconds, error
            )
        } else {
            error.to_string()
        }
    }
}

#[async_trait]
impl NotificationProvider for WebhookProvider {
    async fn send(&self, payload: &NotificationPayload) -> NotificationResult {
        let start = Instant::now();

        let response = HTTP_CLIENT
            .post(&self.config.url)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .json(payload)
            .send()
            .await;
        let duration_ms = start.elapsed().as_millis() as u64;

        // The response body is never read; the status decides the outcome
        match response {
            Ok(resp) => {
                let status = resp.status();
                NotificationResult {
                    success: status == StatusCode::OK,
                    status_code: Some(status.as_u16()),
                    response: None,
                    duration_ms,
                }
            }
            Err(e) => NotificationResult {
                success: false,
                status_code: None,
                response: Some(self.describe_error(&e)),
                duration_ms,
            },
        }
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}

/// Validates a webhook URL: parseable, http or https scheme.
pub fn validate_webhook_url(url: &str) -> AppResult<()> {
    let parsed = Url::parse(url)
        .map_err(|e| AppError::validation("webhook_url", format!("Invalid URL '{url}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::validation(
            "webhook_url",
            format!("Unsupported URL scheme '{other}'"),
        )),
    }
}
