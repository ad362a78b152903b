//! Gateways for loading events from the listing API.
//!
//! The trait-based design lets the TUI and CLI be exercised against mocks in
//! tests while [`ReqwestEventsGateway`] performs real HTTP requests.

mod client;
mod error_mapping;
mod events;

pub(crate) use client::parse_base_url;
pub use client::GatewaySettings;
pub use events::ReqwestEventsGateway;

use async_trait::async_trait;

use crate::api::error::ListingError;
use crate::api::models::{EventItem, ListingResponse};
use crate::api::query::EventQuery;

/// Gateway that can load events from the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsGateway: Send + Sync {
    /// Fetch one page of events matching the query.
    async fn list_events(&self, query: &EventQuery) -> Result<ListingResponse, ListingError>;

    /// Fetch a single event by identifier.
    async fn get_event(&self, id: u64) -> Result<EventItem, ListingError>;
}
