//! Plugin configuration and the outbound notification payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::media::{MediaInfo, MediaTypeLabels};

/// Which media kinds trigger a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotifyType {
    #[default]
    All,
    Movie,
    Tv,
}

impl NotifyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyType::All => "ALL",
            NotifyType::Movie => "MOVIE",
            NotifyType::Tv => "TV",
        }
    }

    /// Parses the configuration value, `None` for anything unrecognised.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ALL" => Some(NotifyType::All),
            "MOVIE" => Some(NotifyType::Movie),
            "TV" => Some(NotifyType::Tv),
            _ => None,
        }
    }

    /// Whether a media item with the given category label passes the filter.
    pub fn accepts(&self, media_type: Option<&str>, labels: &MediaTypeLabels) -> bool {
        match self {
            NotifyType::All => true,
            NotifyType::Movie => media_type == Some(labels.movie.as_str()),
            NotifyType::Tv => media_type == Some(labels.tv.as_str()),
        }
    }
}

impl fmt::Display for NotifyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime configuration of the media notification plugin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaNotificationConfig {
    pub enabled: bool,
    pub webhook_url: String,
    pub notify_type: NotifyType,
}

impl MediaNotificationConfig {
    /// Enabled and pointing at a webhook
    pub fn is_active(&self) -> bool {
        self.enabled && !self.webhook_url.is_empty()
    }
}

/// JSON body posted to the webhook: the six media-info values as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: JsonValue,
    pub year: JsonValue,
    #[serde(rename = "type")]
    pub media_type: JsonValue,
    pub category: JsonValue,
    pub overview: JsonValue,
    pub poster: JsonValue,
}

impl From<&MediaInfo> for NotificationPayload {
    fn from(info: &MediaInfo) -> Self {
        Self {
            title: info.title.clone(),
            year: info.year.clone(),
            media_type: info.media_type.clone(),
            category: info.category.clone(),
            overview: info.overview.clone(),
            poster: info.poster.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inception() -> MediaInfo {
        MediaInfo {
            title: json!("Inception"),
            year: json!("2010"),
            media_type: json!("电影"),
            category: json!("Sci-Fi"),
            overview: json!("..."),
            poster: json!("http://p"),
        }
    }

    #[test]
    fn test_payload_has_exactly_six_keys() {
        let payload = NotificationPayload::from(&inception());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Inception",
                "year": "2010",
                "type": "电影",
                "category": "Sci-Fi",
                "overview": "...",
                "poster": "http://p"
            })
        );
        assert_eq!(value.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_payload_keeps_missing_fields_as_null() {
        let info = MediaInfo {
            title: json!("Untitled"),
            ..Default::default()
        };
        let value = serde_json::to_value(NotificationPayload::from(&info)).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 6);
        assert!(value["poster"].is_null());
    }

    #[test]
    fn test_payload_keeps_non_string_values() {
        let info = MediaInfo {
            year: json!(2010),
            overview: json!(true),
            ..inception()
        };
        let value = serde_json::to_value(NotificationPayload::from(&info)).unwrap();
        assert_eq!(value["year"], json!(2010));
        assert_eq!(value["overview"], json!(true));
    }

    #[test]
    fn test_notify_type_parse() {
        assert_eq!(NotifyType::parse("ALL"), Some(NotifyType::All));
        assert_eq!(NotifyType::parse("MOVIE"), Some(NotifyType::Movie));
        assert_eq!(NotifyType::parse("TV"), Some(NotifyType::Tv));
        assert_eq!(NotifyType::parse("tv"), None);
        assert_eq!(NotifyType::parse("ANIME"), None);
    }

    #[test]
    fn test_notify_type_filter() {
        let labels = MediaTypeLabels::default();

        assert!(NotifyType::All.accepts(Some("电影"), &labels));
        assert!(NotifyType::All.accepts(Some("电视剧"), &labels));
        assert!(NotifyType::All.accepts(None, &labels));

        assert!(NotifyType::Movie.accepts(Some("电影"), &labels));
        assert!(!NotifyType::Movie.accepts(Some("电视剧"), &labels));
        assert!(!NotifyType::Movie.accepts(None, &labels));

        assert!(NotifyType::Tv.accepts(Some("电视剧"), &labels));
        assert!(!NotifyType::Tv.accepts(Some("电影"), &labels));
    }

    #[test]
    fn test_filter_uses_custom_labels() {
        let labels = MediaTypeLabels {
            movie: "movie".to_string(),
            tv: "tv".to_string(),
        };
        assert!(NotifyType::Movie.accepts(Some("movie"), &labels));
        assert!(!NotifyType::Movie.accepts(Some("电影"), &labels));
    }

    #[test]
    fn test_config_is_active() {
        let mut config = MediaNotificationConfig::default();
        assert!(!config.is_active());

        config.enabled = true;
        assert!(!config.is_active());

        config.webhook_url = "http://x/y".to_string();
        assert!(config.is_active());
    }
}
