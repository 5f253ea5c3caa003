//! Host plugin surface and the media notification plugin.

pub mod form;
mod media_notification;
mod plugin;


pub use form::FormNode;
pub use media_notification::{MediaNotification, NotifyOutcome, SkipReason};
pub use plugin::{Plugin, PluginMeta};
