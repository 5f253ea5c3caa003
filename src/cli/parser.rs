//! CLI argument parsing with clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Forward media-imported events to a webhook
#[derive(Parser, Debug)]
#[command(name = "media-notification")]
#[command(about = "Forward media-imported events to a webhook")]
#[command(long_about = "
Media-notification posts a small JSON payload to a webhook whenever the host
reports that a movie or TV series was imported into the library.

EXAMPLES:
    # Print the settings form the host renders
    media-notification form

    # Validate configuration
    media-notification --config /etc/media-notification.toml check

    # Deliver one transfer-complete event read from a file
    media-notification notify --event event.json

    # Or from stdin
    cat event.json | media-notification notify --event -
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load only this TOML file (plus environment overrides) instead of
    /// the layered `config/default.toml` and `config/local.toml`.
    #[arg(short, long, global = true, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the plugin's settings form and default values as JSON
    Form,

    /// Validate the loaded configuration and print a summary
    Check,

    /// Deliver one transfer-complete event
    ///
    /// The event is a JSON document of the form
    /// `{"event_type": "transfer.complete", "event_data": {"mediainfo": {...}}}`.
    Notify {
        /// Event file, or `-` to read from stdin
        #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_event_source)]
        event: PathBuf,
    },
}

impl Cli {
    /// Log level forced by `--verbose` / `--quiet`, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}
