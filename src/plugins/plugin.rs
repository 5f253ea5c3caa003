use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use super::form::FormNode;

/// Static descriptive data the host shows for a plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub author_url: &'static str,
    /// Prefix under which the host stores this plugin's configuration
    pub config_prefix: &'static str,
    /// Position in the host's plugin list
    pub order: u32,
    /// Minimum user level allowed to use the plugin
    pub auth_level: u8,
}

/// Lifecycle hooks the host invokes on every plugin.
pub trait Plugin: Send + Sync {
    fn meta(&self) -> &PluginMeta;

    /// Applies configuration from the host.
    ///
    /// Keys that are absent leave the current value untouched; `None` is a no-op.
    fn init_plugin(&self, config: Option<&Map<String, JsonValue>>);

    /// Whether the plugin is currently enabled
    fn get_state(&self) -> bool;

    /// Settings form description and its default values
    fn get_form(&self) -> (Vec<FormNode>, Map<String, JsonValue>);

    /// Called by the host when the plugin is unloaded
    fn stop_service(&self);
}
