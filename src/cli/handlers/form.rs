//! Form command handler

use serde_json::json;

use crate::error::AppResult;
use crate::plugins::{MediaNotification, Plugin};

/// Prints the settings form the host renders for the plugin
pub struct FormCommandHandler {
    plugin: MediaNotification,
}

impl FormCommandHandler {
    pub fn new() -> Self {
        Self {
            plugin: MediaNotification::new(),
        }
    }

    /// JSON document with plugin metadata, form tree and defaults
    pub fn render(&self) -> AppResult<String> {
        let (form, defaults) = self.plugin.get_form();
        let document = json!({
            "plugin": self.plugin.meta(),
            "form": form,
            "defaults": defaults,
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn execute(&self) -> AppResult<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}

impl Default for FormCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
