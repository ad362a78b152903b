//! Support modules for the event listing BDD tests.

pub(crate) mod backend;
pub(crate) mod state;

pub(crate) use backend::SeededBackend;
pub(crate) use state::{BrowserState, ensure_runtime_and_server, event_title};
