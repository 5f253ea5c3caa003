use std::process::ExitCode;

use clap::Parser;
use media_notification::NotifyOutcome;
use media_notification::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match cli::load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = cli::init_logger_from_settings(&settings) {
        eprintln!("Logger initialization error: {:#}", e);
        return ExitCode::FAILURE;
    }

    tracing::debug!(version = media_notification::pkg_version(), "Starting");

    match cli::execute_command(&cli, settings).await {
        Ok(Some(NotifyOutcome::Rejected { .. } | NotifyOutcome::Failed { .. })) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
