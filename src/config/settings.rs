//! Configuration settings structures
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};
use crate::models::MediaTypeLabels;
use crate::services::notifications::validate_webhook_url;

// ============================================================================
// Default value functions
// ============================================================================

fn default_notify_type() -> String {
    "ALL".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/media-notification.log".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// Plugin Configuration
// ============================================================================

/// Values the host would persist for the media notification plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub webhook_url: String,

    /// "ALL", "MOVIE" or "TV"
    #[serde(default = "default_notify_type")]
    pub notify_type: String,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            webhook_url: String::new(),
            notify_type: default_notify_type(),
        }
    }
}

impl PluginSettings {
    /// The configuration map handed to `Plugin::init_plugin`
    pub fn to_config_map(&self) -> Map<String, JsonValue> {
        let mut map = Map::new();
        map.insert("enabled".to_string(), JsonValue::Bool(self.enabled));
        map.insert(
            "webhook_url".to_string(),
            JsonValue::String(self.webhook_url.clone()),
        );
        map.insert(
            "notify_type".to_string(),
            JsonValue::String(self.notify_type.clone()),
        );
        map
    }

    /// An empty URL is valid: the plugin then stays inactive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook_url.is_empty() {
            return Ok(());
        }

        validate_webhook_url(&self.webhook_url).map_err(|e| ConfigError::ValidationError {
            field: "plugin.webhook_url".to_string(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,

    #[serde(default = "default_true")]
    pub append: bool,

    /// "full", "compact" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: true,
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .file
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })?;

        let console = ConsoleConfig {
            enabled: self.console.enabled,
            colored: self.console.colored,
        };
        let file = FileConfig {
            enabled: self.file.enabled,
            path: PathBuf::from(self.file.path),
            append: self.file.append,
            format,
        };

        LoggerConfig::new(console, file, self.level).map_err(|e| ConfigError::ValidationError {
            field: "logger".to_string(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Media notification plugin values
    #[serde(default)]
    pub plugin: PluginSettings,

    /// Category labels of the host's media-info model
    #[serde(default)]
    pub labels: MediaTypeLabels,

    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validate all settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.plugin.validate()?;

        if self.labels.movie.is_empty() || self.labels.tv.is_empty() {
            return Err(ConfigError::validation(
                "labels",
                "Media type labels must not be empty",
            ));
        }

        self.logger.clone().into_logger_config()?;
        Ok(())
    }
}
