//! TUI mode for browsing the events listing.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that lets users filter and page through events.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use eventlens::telemetry::TracingTelemetrySink;
use eventlens::tui::{EventsApp, set_listing_context, set_telemetry_sink};
use eventlens::{EventLensConfig, ListingError};

/// Runs the TUI mode.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the TUI fails to
/// initialise. Request failures are shown inside the TUI instead.
pub async fn run(config: &EventLensConfig) -> Result<(), ListingError> {
    let gateway = super::build_gateway(config)?;
    let initial_filters = config.initial_filter_state()?;

    // Store the context in global state for Model::init() to retrieve.
    // If already set, this is a no-op and the existing context remains.
    let _ = set_listing_context(gateway, initial_filters);
    let _ = set_telemetry_sink(Arc::new(TracingTelemetrySink));

    run_tui().await.map_err(|error| ListingError::Terminal {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `EventsApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // EventsApp::init() will retrieve its context from module-level storage.
    let program = Program::<EventsApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
