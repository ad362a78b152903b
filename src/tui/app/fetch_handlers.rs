//! Listing fetch handlers for the events TUI.
//!
//! Every fetch is tagged with a fresh request id before it starts. Results
//! carry that id back; only the result for the most recently issued request
//! is applied, everything else is discarded.

use std::any::Any;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::EventsApp;
use crate::api::error::ListingError;
use crate::api::models::ListingResponse;
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::RequestId;

impl EventsApp {
    /// Starts a listing fetch for the current filter state.
    ///
    /// Marks the app as loading and clears any previous error. The previous
    /// page stays visible until the new result arrives.
    pub(super) fn issue_fetch(&mut self) -> Cmd {
        let request_id = self.guard.issue();
        let query = self.filter_state.to_query();
        self.loading = true;
        self.error = None;

        tracing::debug!(
            request = %request_id,
            query = %query.to_query_string(),
            "issuing listing request"
        );

        let configured = self.gateway.clone();
        Box::pin(async move {
            let start = Instant::now();
            let Some(gateway) = configured else {
                let error = ListingError::Configuration {
                    message: "events gateway not configured".to_owned(),
                };
                return Some(
                    Box::new(AppMsg::ListingFailed { request_id, error }) as Box<dyn Any + Send>
                );
            };
            let msg = match gateway.list_events(&query).await {
                Ok(response) => {
                    #[expect(
                        clippy::cast_possible_truncation,
                        reason = "Latency over u64::MAX milliseconds is unrealistic"
                    )]
                    let latency_ms = start.elapsed().as_millis() as u64;
                    AppMsg::ListingLoaded {
                        request_id,
                        response,
                        latency_ms,
                    }
                }
                Err(error) => AppMsg::ListingFailed { request_id, error },
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Applies a successful listing result if it is still current.
    pub(super) fn handle_listing_loaded(
        &mut self,
        request_id: RequestId,
        response: &ListingResponse,
        latency_ms: u64,
    ) -> Option<Cmd> {
        if !self.guard.is_current(request_id) {
            self.discard_stale(request_id);
            return None;
        }

        tracing::debug!(
            request = %request_id,
            items = response.items.len(),
            total = response.total,
            latency_ms,
            "listing request completed"
        );
        self.telemetry.record(TelemetryEvent::ListingFetched {
            latency_ms,
            item_count: response.items.len(),
            total: response.total,
        });

        self.loading = false;
        self.error = None;
        self.response = Some(response.clone());
        self.clamp_cursor();
        None
    }

    /// Records a failed listing result if it is still current.
    ///
    /// The previously applied page is kept so the list does not blank out on
    /// a transient failure.
    pub(super) fn handle_listing_failed(
        &mut self,
        request_id: RequestId,
        error: &ListingError,
    ) -> Option<Cmd> {
        if !self.guard.is_current(request_id) {
            self.discard_stale(request_id);
            return None;
        }

        tracing::warn!(request = %request_id, %error, "listing request failed");
        self.loading = false;
        self.error = Some(error.to_string());
        None
    }

    /// Supersedes any in-flight request so its result is never applied.
    pub(super) const fn invalidate_pending(&mut self) {
        self.guard.invalidate();
    }

    fn discard_stale(&self, request_id: RequestId) {
        tracing::debug!(request = %request_id, "discarding stale listing result");
        self.telemetry.record(TelemetryEvent::StaleResultDiscarded {
            request_id: request_id.get(),
        });
    }
}
