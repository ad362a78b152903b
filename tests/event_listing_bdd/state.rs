//! Scenario state and runtime/server initialisation for the event listing
//! BDD tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use eventlens::api::models::test_support::{CARDIOLOGY_TITLE, NEUROLOGY_TITLE, ONCOLOGY_TITLE};
use eventlens::telemetry::test_support::RecordingTelemetrySink;
use eventlens::tui::EventsApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Shared runtime wrapper that can be stored in rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub(crate) fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct BrowserState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) keyword_delay_ms: Slot<u64>,
    pub(crate) telemetry: Slot<Arc<RecordingTelemetrySink>>,
    pub(crate) app: Slot<EventsApp>,
    pub(crate) pending: Slot<Vec<Cmd>>,
}

/// Ensures the runtime and server are initialised in `BrowserState`.
pub(crate) fn ensure_runtime_and_server(state: &BrowserState) -> SharedRuntime {
    if state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if state.server.with_ref(|_| ()).is_none() {
        state.server.set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Maps the short event names used in feature files to seeded titles.
pub(crate) fn event_title(name: &str) -> &'static str {
    match name.trim() {
        "neurology" => NEUROLOGY_TITLE,
        "cardiology" => CARDIOLOGY_TITLE,
        "oncology" => ONCOLOGY_TITLE,
        other => panic!("unknown seeded event: {other}"),
    }
}
