//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! events listing TUI. It owns the filter state, tags every listing fetch
//! with a [`RequestId`](crate::tui::state::RequestId), and applies results
//! only when they belong to the most recent request.
//!
//! # Module Structure
//!
//! - `fetch_handlers`: Issuing listing requests and applying their results
//! - `filter_handlers`: Form focus and filter edits
//! - `navigation`: Cursor movement and page changes
//! - `rendering`: View rendering methods for terminal output
//! - `routing`: Category-based message dispatch

use std::fmt;
use std::sync::Arc;

use crate::api::gateway::EventsGateway;
use crate::api::models::{EventItem, ListingResponse};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::components::{EventListComponent, ResultStatus};
use super::input::InputContext;
use super::state::{FilterField, FilterState, RequestGuard};

mod fetch_handlers;
mod filter_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod routing;

/// Main application model for the events listing TUI.
pub struct EventsApp {
    /// Filter criteria and page cursor.
    pub(crate) filter_state: FilterState,
    /// Latest-request register for listing fetches.
    guard: RequestGuard,
    /// Form field receiving keystrokes, if any.
    pub(crate) focus: Option<FilterField>,
    /// Last page applied from a current request.
    pub(crate) response: Option<ListingResponse>,
    /// Whether the current request is in flight.
    pub(crate) loading: bool,
    /// Failure message for the current request, if any.
    pub(crate) error: Option<String>,
    /// Highlighted item on the current page.
    cursor_position: usize,
    /// First item drawn in the list.
    scroll_offset: usize,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Event list component.
    event_list: EventListComponent,
    /// Backend used for listing fetches.
    gateway: Option<Arc<dyn EventsGateway>>,
    /// Destination for listing telemetry.
    telemetry: Arc<dyn TelemetrySink>,
}

impl fmt::Debug for EventsApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventsApp")
            .field("filter_state", &self.filter_state)
            .field("guard", &self.guard)
            .field("focus", &self.focus)
            .field("response", &self.response)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("cursor_position", &self.cursor_position)
            .field("has_gateway", &self.gateway.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for EventsApp {
    fn default() -> Self {
        Self::new(FilterState::new())
    }
}

impl EventsApp {
    /// Creates an application starting from the given filter state.
    ///
    /// Without a gateway every fetch fails with a configuration error; use
    /// [`EventsApp::with_gateway`] to connect it to a backend.
    #[must_use]
    pub fn new(filter_state: FilterState) -> Self {
        Self {
            filter_state,
            guard: RequestGuard::new(),
            focus: None,
            response: None,
            loading: false,
            error: None,
            cursor_position: 0,
            scroll_offset: 0,
            width: 80,
            height: 24,
            show_help: false,
            event_list: EventListComponent::new(),
            gateway: None,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Attaches the gateway used for listing fetches.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn EventsGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Attaches the telemetry sink for fetch and stale-result events.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the current filter state.
    #[must_use]
    pub const fn filter_state(&self) -> &FilterState {
        &self.filter_state
    }

    /// Returns the last applied response, if any.
    #[must_use]
    pub const fn response(&self) -> Option<&ListingResponse> {
        self.response.as_ref()
    }

    /// Returns the events on the last applied page.
    #[must_use]
    pub fn items(&self) -> &[EventItem] {
        self.response
            .as_ref()
            .map_or(&[], |response| response.items.as_slice())
    }

    /// Returns true while the current request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the failure message for the current request, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the form field receiving keystrokes, if any.
    #[must_use]
    pub const fn focus(&self) -> Option<FilterField> {
        self.focus
    }

    /// Returns the highlighted item index.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Returns the highlighted event, if any.
    #[must_use]
    pub fn selected_event(&self) -> Option<&EventItem> {
        self.items().get(self.cursor_position)
    }

    /// Returns the total page count for the last applied response.
    ///
    /// Before any response arrives there is exactly one page.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.response
            .as_ref()
            .map_or(1, ListingResponse::total_pages)
    }

    /// Classifies what the result area shows.
    #[must_use]
    pub fn result_status(&self) -> ResultStatus<'_> {
        ResultStatus::classify(self.response.as_ref(), self.loading, self.error.as_deref())
    }

    /// Returns the current input context for key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        match self.focus {
            Some(field) => InputContext::Editing(field),
            None => InputContext::Browsing,
        }
    }
}
