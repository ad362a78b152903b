//! EventLens CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use eventlens::{EventLensConfig, ListingError, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ListingError> {
    let config = load_config()?;
    config.validate()?;

    if let Some(log_file) = config.log_file.as_deref() {
        cli::logging::init(log_file)?;
    }
    tracing::info!(base_url = %config.base_url, mode = ?config.operation_mode(), "starting");

    match config.operation_mode() {
        OperationMode::EventDetail => cli::event_detail::run(&config).await,
        OperationMode::Listing => cli::listing::run(&config).await,
        OperationMode::Tui => cli::events_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ListingError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<EventLensConfig, ListingError> {
    EventLensConfig::load().map_err(|error| ListingError::Configuration {
        message: error.to_string(),
    })
}
