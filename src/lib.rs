//! Media notification plugin
//!
//! Posts a JSON notification to a webhook when the host reports that media
//! has been imported into the library.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod external;
pub mod logger;
pub mod models;
pub mod plugins;
pub mod services;

pub use plugins::{MediaNotification, NotifyOutcome, Plugin};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
