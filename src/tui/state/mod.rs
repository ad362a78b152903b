//! State management for the events listing TUI.
//!
//! This module provides the filter criteria with their page cursor, and the
//! register that decides which in-flight listing result may be applied.

mod filter_state;
mod request_guard;

pub use filter_state::{FilterField, FilterState};
pub use request_guard::{RequestGuard, RequestId};
