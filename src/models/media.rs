//! Media-info records as produced by the host's metadata layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Descriptive record for a single movie or TV series.
///
/// Values are kept exactly as the host sent them; a key the host omitted is
/// `Null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub title: JsonValue,
    pub year: JsonValue,
    /// Category label of the media kind, e.g. "电影" or "电视剧"
    #[serde(rename = "type")]
    pub media_type: JsonValue,
    pub category: JsonValue,
    pub overview: JsonValue,
    pub poster: JsonValue,
}

impl MediaInfo {
    /// Extracts the `mediainfo` entry from an event payload map.
    ///
    /// Returns `None` when the key is absent, null, or not an object.
    pub fn from_event_data(data: &Map<String, JsonValue>) -> Option<Self> {
        let JsonValue::Object(info) = data.get("mediainfo")? else {
            return None;
        };
        let field = |key: &str| info.get(key).cloned().unwrap_or(JsonValue::Null);

        Some(Self {
            title: field("title"),
            year: field("year"),
            media_type: field("type"),
            category: field("category"),
            overview: field("overview"),
            poster: field("poster"),
        })
    }

    /// The category label, when the host sent it as a string
    pub fn media_type_label(&self) -> Option<&str> {
        self.media_type.as_str()
    }

    /// Title used in log lines; empty when the host sent no string title.
    pub fn display_title(&self) -> &str {
        self.title.as_str().unwrap_or_default()
    }
}

fn default_movie_label() -> String {
    "电影".to_string()
}

fn default_tv_label() -> String {
    "电视剧".to_string()
}

/// Category labels the host's media-info model uses for each media kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTypeLabels {
    #[serde(default = "default_movie_label")]
    pub movie: String,
    #[serde(default = "default_tv_label")]
    pub tv: String,
}

impl Default for MediaTypeLabels {
    fn default() -> Self {
        Self {
            movie: default_movie_label(),
            tv: default_tv_label(),
        }
    }
}
