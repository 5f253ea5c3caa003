//! Check command handler
//!
//! Validates configuration and reports what the plugin would do.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::models::NotifyType;

/// Handler for the check command
pub struct CheckCommandHandler {
    config: Settings,
}

impl CheckCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Human readable summary lines for a valid configuration
    pub fn summary(&self) -> AppResult<Vec<String>> {
        self.config.validate()?;

        let plugin = &self.config.plugin;
        let mut lines = vec!["✓ Configuration is valid".to_string()];

        if !plugin.enabled {
            lines.push("! Plugin is disabled, no notifications will be sent".to_string());
        } else if plugin.webhook_url.is_empty() {
            lines.push("! Plugin is enabled but no webhook URL is set".to_string());
        } else {
            lines.push(format!("✓ Notifications go to: {}", plugin.webhook_url));
        }

        let notify_type = match NotifyType::parse(&plugin.notify_type) {
            Some(notify_type) => notify_type.to_string(),
            None => format!("{} (unknown, treated as ALL)", plugin.notify_type),
        };
        lines.push(format!("✓ Notify type: {}", notify_type));
        lines.push(format!(
            "✓ Media type labels: movie={}, tv={}",
            self.config.labels.movie, self.config.labels.tv
        ));

        Ok(lines)
    }

    pub fn execute(&self) -> AppResult<()> {
        for line in self.summary()? {
            println!("{}", line);
        }
        Ok(())
    }
}
