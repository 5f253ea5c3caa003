//! Media notification plugin.
//!
//! Forwards a fixed-shape JSON payload to a webhook whenever media has been
//! imported into the library. Delivery is fire-and-forget: every failure ends
//! in a log line and nothing is reported back to the event emitter.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};

use super::form::{self, FormNode};
use super::plugin::{Plugin, PluginMeta};
use crate::events::{Event, EventHandler, EventManager, EventType};
use crate::models::{
    MediaInfo, MediaNotificationConfig, MediaTypeLabels, NotificationPayload, NotifyType,
};
use crate::services::notifications::{NotificationProvider, WebhookConfig, WebhookProvider};

static META: PluginMeta = PluginMeta {
    id: "MediaNotification",
    name: "媒体入库通知",
    description: "媒体入库后向其他服务器发送通知。",
    icon: "refresh2.png",
    version: "0.1",
    author: "pattonbina",
    author_url: "https://github.com/pattonbina",
    config_prefix: "medianotification_",
    order: 15,
    auth_level: 1,
};

/// Why an event did not produce a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Plugin disabled or no webhook URL configured
    Disabled,
    /// Event carried no payload map or no media-info object
    MissingData,
    /// Media type does not match the configured notify type
    FilteredOut,
}

/// What happened to one transfer-complete event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Skipped(SkipReason),
    /// Webhook answered `200 OK`
    Delivered,
    /// Webhook answered with any other status
    Rejected { status: u16 },
    /// No response: timeout, DNS, connection refused, ...
    Failed { reason: String },
}

impl NotifyOutcome {
    /// Whether a request was sent
    pub fn attempted(&self) -> bool {
        !matches!(self, NotifyOutcome::Skipped(_))
    }
}

pub struct MediaNotification {
    config: RwLock<MediaNotificationConfig>,
    labels: MediaTypeLabels,
}

impl MediaNotification {
    pub fn new() -> Self {
        Self::with_labels(MediaTypeLabels::default())
    }

    /// Uses the host's own category labels for movies and TV series
    pub fn with_labels(labels: MediaTypeLabels) -> Self {
        Self {
            config: RwLock::new(MediaNotificationConfig::default()),
            labels,
        }
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> MediaNotificationConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Subscribes this plugin to transfer-complete events
    pub fn register(self: &Arc<Self>, events: &mut EventManager) {
        events.subscribe(EventType::TransferComplete, Arc::clone(self) as Arc<dyn EventHandler>);
    }

    /// Filters the event and, when it passes, posts the payload to the webhook.
    pub async fn handle_transfer_complete(&self, event: &Event) -> NotifyOutcome {
        let config = self.config();
        if !config.is_active() {
            return NotifyOutcome::Skipped(SkipReason::Disabled);
        }

        let Some(mediainfo) = event.event_data.as_ref().and_then(MediaInfo::from_event_data) else {
            tracing::debug!("Transfer event without media info, skipping");
            return NotifyOutcome::Skipped(SkipReason::MissingData);
        };

        if !config
            .notify_type
            .accepts(mediainfo.media_type_label(), &self.labels)
        {
            tracing::debug!(
                notify_type = %config.notify_type,
                media_type = %mediainfo.media_type,
                "Media type filtered out"
            );
            return NotifyOutcome::Skipped(SkipReason::FilteredOut);
        }

        let payload = NotificationPayload::from(&mediainfo);
        let provider = WebhookProvider::new(WebhookConfig::new(config.webhook_url));

        let result = provider.send(&payload).await;
        match result.status_code {
            _ if result.success => {
                tracing::info!(
                    provider = provider.name(),
                    duration_ms = result.duration_ms,
                    "Media notification sent: {}",
                    mediainfo.display_title()
                );
                NotifyOutcome::Delivered
            }
            Some(status) => {
                tracing::error!("Media notification failed with status {}", status);
                NotifyOutcome::Rejected { status }
            }
            None => {
                let reason = result.response.unwrap_or_default();
                tracing::error!("Media notification error: {}", reason);
                NotifyOutcome::Failed { reason }
            }
        }
    }

    fn apply(config: &mut MediaNotificationConfig, values: &Map<String, JsonValue>) {
        match values.get("enabled") {
            None => {}
            Some(JsonValue::Bool(enabled)) => config.enabled = *enabled,
            Some(JsonValue::Null) => config.enabled = false,
            Some(other) => tracing::warn!(value = %other, "Ignoring non-boolean 'enabled'"),
        }

        match values.get("webhook_url") {
            None => {}
            Some(JsonValue::String(url)) => config.webhook_url = url.clone(),
            Some(JsonValue::Null) => config.webhook_url.clear(),
            Some(other) => tracing::warn!(value = %other, "Ignoring non-string 'webhook_url'"),
        }

        match values.get("notify_type") {
            None => {}
            Some(JsonValue::String(value)) => {
                config.notify_type = NotifyType::parse(value).unwrap_or_else(|| {
                    tracing::warn!(value = %value, "Unknown notify_type, notifying for all media");
                    NotifyType::All
                });
            }
            Some(JsonValue::Null) => config.notify_type = NotifyType::All,
            Some(other) => tracing::warn!(value = %other, "Ignoring non-string 'notify_type'"),
        }
    }
}

impl Default for MediaNotification {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for MediaNotification {
    fn meta(&self) -> &PluginMeta {
        &META
    }

    fn init_plugin(&self, config: Option<&Map<String, JsonValue>>) {
        let Some(values) = config else {
            return;
        };

        let mut current = self.config.write().unwrap_or_else(PoisonError::into_inner);
        Self::apply(&mut current, values);
        tracing::debug!(
            enabled = current.enabled,
            notify_type = %current.notify_type,
            "Media notification configured"
        );
    }

    fn get_state(&self) -> bool {
        self.config().enabled
    }

    fn get_form(&self) -> (Vec<FormNode>, Map<String, JsonValue>) {
        (
            form::media_notification_form(),
            form::media_notification_defaults(),
        )
    }

    fn stop_service(&self) {}
}

#[async_trait]
impl EventHandler for MediaNotification {
    async fn handle(&self, event: &Event) {
        if event.event_type == EventType::TransferComplete {
            self.handle_transfer_complete(event).await;
        }
    }

    fn name(&self) -> &str {
        META.id
    }
}
