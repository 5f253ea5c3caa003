//! Configuration loader
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "MEDIA_NOTIFICATION_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "MEDIA_NOTIFICATION_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "MEDIA_NOTIFICATION";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources in order of priority:
/// 1. `default.toml` (optional)
/// 2. `local.toml` (optional)
/// 3. `MEDIA_NOTIFICATION_*` environment variables (highest priority)
///
/// In single-file mode only that file (required) and the environment are read.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader from `MEDIA_NOTIFICATION_CONFIG_DIR` / `MEDIA_NOTIFICATION_CONFIG_FILE`
    pub fn new() -> Self {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        Self {
            config_dir,
            config_file,
        }
    }

    /// Create a loader for a single configuration file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
        }
    }

    /// Get the configuration directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load and validate configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the single configuration file is not found
    /// - configuration parsing fails
    /// - configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            Self::add_file_source(builder, config_file, true)?
        } else {
            let builder =
                Self::add_file_source(builder, &self.config_dir.join("default.toml"), false)?;
            Self::add_file_source(builder, &self.config_dir.join("local.toml"), false)?
        };

        // MEDIA_NOTIFICATION_PLUGIN__WEBHOOK_URL -> plugin.webhook_url
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests touching process environment run one at a time
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Sets environment variables for one test and restores them on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    const DEFAULT_TOML: &str = r#"
[plugin]
enabled = true
webhook_url = "http://default/hook"
notify_type = "MOVIE"

[logger]
level = "warn"
"#;

    #[test]
    fn test_loader_new_default_dir() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);

        let loader = ConfigLoader::new();
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file.is_none());
    }

    #[test]
    fn test_load_without_any_files_uses_defaults() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.remove(CONFIG_FILE_ENV);

        let settings = ConfigLoader::new().load().expect("Should load settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_default_toml() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.remove(CONFIG_FILE_ENV);

        let settings = ConfigLoader::new().load().expect("Should load settings");
        assert!(settings.plugin.enabled);
        assert_eq!(settings.plugin.webhook_url, "http://default/hook");
        assert_eq!(settings.plugin.notify_type, "MOVIE");
        assert_eq!(settings.logger.level, "warn");
        assert_eq!(settings.labels.tv, "电视剧");
    }

    #[test]
    fn test_local_overrides_default() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let local = r#"
[plugin]
notify_type = "TV"

[labels]
tv = "tv"
"#;
        let temp_dir =
            setup_config_dir(&[("default.toml", DEFAULT_TOML), ("local.toml", local)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.remove(CONFIG_FILE_ENV);

        let settings = ConfigLoader::new().load().expect("Should load settings");
        assert_eq!(settings.plugin.notify_type, "TV");
        assert_eq!(settings.labels.tv, "tv");
        assert_eq!(settings.plugin.webhook_url, "http://default/hook");
    }

    #[test]
    fn test_env_var_overrides_file() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.remove(CONFIG_FILE_ENV);
        env.set("MEDIA_NOTIFICATION_PLUGIN__WEBHOOK_URL", "https://env/hook");
        env.set("MEDIA_NOTIFICATION_PLUGIN__ENABLED", "false");

        let settings = ConfigLoader::new().load().expect("Should load settings");
        assert_eq!(settings.plugin.webhook_url, "https://env/hook");
        assert!(!settings.plugin.enabled);
        assert_eq!(settings.plugin.notify_type, "MOVIE");
    }

    #[test]
    fn test_single_file_mode() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("single.toml", DEFAULT_TOML)]);
        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);

        let loader = ConfigLoader::with_file(temp_dir.path().join("single.toml"));
        let settings = loader.load().expect("Should load settings");
        assert_eq!(settings.plugin.webhook_url, "http://default/hook");
    }

    #[test]
    fn test_single_file_mode_requires_file() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let temp_dir = setup_config_dir(&[]);

        let result = ConfigLoader::with_file(temp_dir.path().join("missing.toml")).load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(ref msg)) if msg.contains("missing.toml")));
    }

    #[test]
    fn test_invalid_webhook_url_fails_validation() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[(
            "bad.toml",
            "[plugin]\nwebhook_url = \"not a url\"\n",
        )]);
        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);

        let result = ConfigLoader::with_file(temp_dir.path().join("bad.toml")).load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
