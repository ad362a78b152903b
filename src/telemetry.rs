//! Application telemetry events and sinks.
//!
//! EventLens is a local tool, but it still benefits from lightweight
//! telemetry to support debugging: how long listing requests take and how
//! often a slow response loses the race against a newer one.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by EventLens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A listing request completed and its page was applied.
    ListingFetched {
        /// Wall-clock request duration in milliseconds.
        latency_ms: u64,
        /// Number of items on the returned page.
        item_count: usize,
        /// Total matches reported by the server.
        total: u64,
    },
    /// A listing result arrived after a newer request was issued and was
    /// dropped.
    StaleResultDiscarded {
        /// Identifier of the superseded request.
        request_id: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Forwards telemetry events to `tracing` as JSON payloads.
///
/// Used by the TUI so that telemetry lands in the log file instead of the
/// terminal the UI is drawing on.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => tracing::info!(target: "eventlens::telemetry", %payload),
            Err(error) => tracing::warn!(%error, "failed to serialise telemetry event"),
        }
    }
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Only suitable for the non-interactive modes; the TUI owns the terminal.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Helpers for asserting on recorded telemetry in tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the events recorded so far.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
