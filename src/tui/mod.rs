//! Terminal User Interface for browsing the events listing.
//!
//! This module provides an interactive TUI for filtering and paging through
//! calendar events using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::EventsApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Filter state and the latest-request guard
//! - [`components`]: Stateless UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and starting filters are stored at module level.
//! Call [`set_listing_context`] before starting the program, and
//! `EventsApp::init()` will pick them up.

use std::sync::{Arc, OnceLock};

use crate::api::gateway::EventsGateway;
use crate::telemetry::TelemetrySink;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::EventsApp;

use state::FilterState;

/// Global storage for the listing context.
///
/// This is set before the TUI program starts and read by `EventsApp::init()`.
static LISTING_CONTEXT: OnceLock<ListingContext> = OnceLock::new();

/// Global storage for the TUI telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Backend and starting filters for the TUI.
pub(crate) struct ListingContext {
    pub(crate) gateway: Arc<dyn EventsGateway>,
    pub(crate) initial_filters: FilterState,
}

/// Sets the gateway and starting filters for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without it
/// the application starts with default filters and every fetch fails with a
/// configuration error.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_listing_context(gateway: Arc<dyn EventsGateway>, initial_filters: FilterState) -> bool {
    LISTING_CONTEXT
        .set(ListingContext {
            gateway,
            initial_filters,
        })
        .is_ok()
}

/// Sets the telemetry sink used by the TUI application.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

pub(crate) fn listing_context() -> Option<&'static ListingContext> {
    LISTING_CONTEXT.get()
}

pub(crate) fn telemetry_sink() -> Option<Arc<dyn TelemetrySink>> {
    TELEMETRY_SINK.get().cloned()
}
