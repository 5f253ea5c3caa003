//! Configuration management module
//!
//! Layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - Base configuration
//! 2. `local.toml` - Local overrides (not committed to version control)
//! 3. `MEDIA_NOTIFICATION_*` environment variables

pub mod error;
pub mod loader;
pub mod settings;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ConsoleSettings, FileSettings, LoggerSettings, PluginSettings, Settings};
