//! EventLens library crate for browsing a medical events calendar.
//!
//! The library builds listing queries from filter state, loads pages from the
//! events API over HTTP, and drives an interactive terminal UI in which only
//! the result of the most recent request is ever shown.

pub mod api;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use api::{
    EventItem, EventQuery, EventsGateway, Flag, GatewaySettings, ListingError, ListingResponse,
    PageSize, ReqwestEventsGateway,
};
pub use config::{EventLensConfig, OperationMode};
