//! Listing mode: print one page of events and exit.

use std::io;

use eventlens::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use eventlens::{EventLensConfig, EventsGateway, ListingError};

use super::output::write_listing_page_to;

/// Fetches the page described by the configured filters and prints it.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the request fails, or
/// stdout cannot be written.
pub async fn run(config: &EventLensConfig) -> Result<(), ListingError> {
    let gateway = super::build_gateway(config)?;
    let mut stdout = io::stdout().lock();
    run_with(config, gateway.as_ref(), &StderrJsonlTelemetrySink, &mut stdout).await
}

/// Runs the listing mode against an explicit gateway, sink, and writer.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the request fails, or
/// the writer fails.
pub async fn run_with<W: io::Write>(
    config: &EventLensConfig,
    gateway: &dyn EventsGateway,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), ListingError> {
    let query = config.initial_filter_state()?.to_query();
    tracing::debug!(query = %query.to_query_string(), "listing events");

    let start = std::time::Instant::now();
    let response = gateway.list_events(&query).await?;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Latency over u64::MAX milliseconds is unrealistic"
    )]
    let latency_ms = start.elapsed().as_millis() as u64;
    telemetry.record(TelemetryEvent::ListingFetched {
        latency_ms,
        item_count: response.items.len(),
        total: response.total,
    });

    write_listing_page_to(writer, &response)
}
