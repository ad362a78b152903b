//! Client for the read-only events listing API.
//!
//! This module builds canonical listing queries, performs them over HTTP,
//! and maps transport and status failures into [`ListingError`] variants that
//! can be shown to the user verbatim.

pub mod error;
pub mod gateway;
pub mod models;
pub mod pagination;
pub mod query;

pub use error::ListingError;
pub use gateway::{EventsGateway, GatewaySettings, ReqwestEventsGateway};
pub use models::{EventItem, Flag, ListingResponse};
pub use pagination::PageSize;
pub use query::EventQuery;

#[cfg(test)]
pub use gateway::MockEventsGateway;
