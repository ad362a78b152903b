//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`event_detail`]: Print a single event
//! - [`events_tui`]: Interactive TUI for browsing the listing
//! - [`listing`]: Print one page of the listing
//!
//! Output formatting utilities are in [`output`], and file logging set-up is
//! in [`logging`].

use std::sync::Arc;

use eventlens::{EventLensConfig, EventsGateway, ListingError, ReqwestEventsGateway};

pub mod event_detail;
pub mod events_tui;
pub mod listing;
pub mod logging;
pub mod output;

/// Builds the HTTP gateway described by the configuration.
///
/// # Errors
///
/// Returns [`ListingError::InvalidUrl`] or [`ListingError::Configuration`]
/// when the base URL or HTTP client cannot be set up.
pub fn build_gateway(config: &EventLensConfig) -> Result<Arc<dyn EventsGateway>, ListingError> {
    let gateway = ReqwestEventsGateway::new(&config.gateway_settings())?;
    Ok(Arc::new(gateway))
}
