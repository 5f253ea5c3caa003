//! Notify command handler
//!
//! Reads one event, configures the plugin from settings and delivers it.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::events::{Event, EventManager, EventType};
use crate::plugins::{MediaNotification, NotifyOutcome, Plugin};

/// Handler for the notify command
pub struct NotifyCommandHandler {
    plugin: Arc<MediaNotification>,
    events: EventManager,
}

impl NotifyCommandHandler {
    /// Builds and configures the plugin the way the host would
    pub fn new(config: &Settings) -> Self {
        let plugin = Arc::new(MediaNotification::with_labels(config.labels.clone()));
        plugin.init_plugin(Some(&config.plugin.to_config_map()));

        let mut events = EventManager::new();
        plugin.register(&mut events);

        Self { plugin, events }
    }

    /// Reads an event from `source`; `-` means stdin
    pub fn read_event(source: &Path) -> AppResult<Event> {
        let raw = if source == Path::new("-") {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| AppError::Io {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
            buffer
        } else {
            std::fs::read_to_string(source).map_err(|e| AppError::Io {
                path: source.to_path_buf(),
                source: e,
            })?
        };

        Ok(serde_json::from_str(&raw)?)
    }

    /// Delivers one event and returns what happened to it
    pub async fn deliver(&self, event: &Event) -> AppResult<NotifyOutcome> {
        if self.events.subscriber_count(event.event_type) == 0 {
            return Err(AppError::validation(
                "event_type",
                format!(
                    "no handler for '{}', expected '{}'",
                    event.event_type,
                    EventType::TransferComplete
                ),
            ));
        }

        Ok(self.plugin.handle_transfer_complete(event).await)
    }

    pub async fn execute(&self, source: &Path) -> AppResult<NotifyOutcome> {
        let event = Self::read_event(source)?;
        let outcome = self.deliver(&event).await?;
        println!("{}", describe(&outcome));
        Ok(outcome)
    }
}

fn describe(outcome: &NotifyOutcome) -> String {
    match outcome {
        NotifyOutcome::Skipped(reason) => format!("skipped: {:?}", reason),
        NotifyOutcome::Delivered => "delivered".to_string(),
        NotifyOutcome::Rejected { status } => format!("rejected with status {}", status),
        NotifyOutcome::Failed { reason } => format!("failed: {}", reason),
    }
}
