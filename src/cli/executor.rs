//! Command executor for dispatching CLI commands

use super::handlers::{CheckCommandHandler, FormCommandHandler, NotifyCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::plugins::NotifyOutcome;

/// Execute a CLI command with the given settings
///
/// Returns the delivery outcome for `notify`, `None` for the other commands.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<Option<NotifyOutcome>> {
    match &cli.command {
        Commands::Form => {
            FormCommandHandler::new().execute()?;
            Ok(None)
        }
        Commands::Check => {
            CheckCommandHandler::new(settings).execute()?;
            Ok(None)
        }
        Commands::Notify { event } => {
            let outcome = NotifyCommandHandler::new(&settings).execute(event).await?;
            Ok(Some(outcome))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[tokio::test]
    async fn test_execute_form() {
        let cli = Cli::try_parse_from(["media-notification", "form"]).unwrap();
        let result = execute_command(&cli, Settings::default()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_execute_check_invalid_settings() {
        let cli = Cli::try_parse_from(["media-notification", "check"]).unwrap();
        let mut settings = Settings::default();
        settings.plugin.webhook_url = "nope".to_string();

        assert!(execute_command(&cli, settings).await.is_err());
    }

    #[tokio::test]
    async fn test_execute_notify_disabled() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("event.json");
        std::fs::write(
            &path,
            r#"{"event_type": "transfer.complete", "event_data": {"mediainfo": {"title": "Inception"}}}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "media-notification",
            "notify",
            "--event",
            path.to_str().unwrap(),
        ])
        .unwrap();

        let outcome = execute_command(&cli, Settings::default()).await.unwrap();
        assert!(matches!(outcome, Some(NotifyOutcome::Skipped(_))));
    }
}
