use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Event kinds emitted by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Media was imported and organised into the library
    #[serde(rename = "transfer.complete")]
    TransferComplete,
    #[serde(rename = "download.added")]
    DownloadAdded,
    #[serde(rename = "subscribe.complete")]
    SubscribeComplete,
    #[serde(rename = "plugin.reload")]
    PluginReload,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::TransferComplete => "transfer.complete",
            EventType::DownloadAdded => "download.added",
            EventType::SubscribeComplete => "subscribe.complete",
            EventType::PluginReload => "plugin.reload",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event as emitted by the host, with its opaque payload map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: EventType,
    #[serde(default)]
    pub event_data: Option<Map<String, JsonValue>>,
}

impl Event {
    pub fn new(event_type: EventType, event_data: Option<Map<String, JsonValue>>) -> Self {
        Self {
            event_type,
            event_data,
        }
    }

    /// Builds a transfer-complete event carrying the given media-info object.
    pub fn transfer_complete(mediainfo: JsonValue) -> Self {
        let mut data = Map::new();
        data.insert("mediainfo".to_string(), mediainfo);
        Self::new(EventType::TransferComplete, Some(data))
    }
}
