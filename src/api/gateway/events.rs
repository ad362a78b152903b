//! Reqwest-backed implementation of [`EventsGateway`].

use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use url::Url;

use crate::api::error::ListingError;
use crate::api::models::{EventItem, ListingResponse};
use crate::api::query::EventQuery;

use super::EventsGateway;
use super::client::{GatewaySettings, build_http_client, parse_base_url};
use super::error_mapping::{map_http_error, map_reqwest_error};

const EVENTS_PATH: &str = "api/events";

/// Gateway that talks to the listing API over HTTP.
#[derive(Debug, Clone)]
pub struct ReqwestEventsGateway {
    client: Client,
    base_url: Url,
}

impl ReqwestEventsGateway {
    /// Creates a gateway from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidUrl`] when the base URL is unusable or
    /// [`ListingError::Configuration`] when the HTTP client cannot be built.
    pub fn new(settings: &GatewaySettings) -> Result<Self, ListingError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let client = build_http_client(settings)?;
        Ok(Self { client, base_url })
    }

    /// Returns the full listing URL for a query, including the canonical
    /// query string.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidUrl`] if the path cannot be joined.
    pub fn listing_url(&self, query: &EventQuery) -> Result<Url, ListingError> {
        let mut url = self.join(EVENTS_PATH)?;
        url.set_query(Some(&query.to_query_string()));
        Ok(url)
    }

    fn join(&self, path: &str) -> Result<Url, ListingError> {
        self.base_url
            .join(path)
            .map_err(|error| ListingError::InvalidUrl(error.to_string()))
    }

    async fn get(&self, operation: &str, url: Url) -> Result<reqwest::Response, ListingError> {
        tracing::debug!(%url, "{operation}");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|error| map_reqwest_error(operation, &error))
    }
}

#[async_trait]
impl EventsGateway for ReqwestEventsGateway {
    async fn list_events(&self, query: &EventQuery) -> Result<ListingResponse, ListingError> {
        let url = self.listing_url(query)?;
        let response = self.get("list events", url).await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            return Err(map_http_error(status, &body));
        }

        response
            .json::<ListingResponse>()
            .await
            .map_err(|error| map_reqwest_error("decode events page", &error))
    }

    async fn get_event(&self, id: u64) -> Result<EventItem, ListingError> {
        let url = self.join(&format!("{EVENTS_PATH}/{id}"))?;
        let response = self.get("get event", url).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ListingError::NotFound { id });
        }
        if !status.is_success() {
            let body = error_body(response).await;
            return Err(map_http_error(status, &body));
        }

        response
            .json::<EventItem>()
            .await
            .map_err(|error| map_reqwest_error("decode event", &error))
    }
}

/// Reads an error response body, falling back to an empty string.
///
/// The status alone still produces a usable error when the body is lost.
async fn error_body(response: reqwest::Response) -> String {
    let status = response.status();
    response.text().await.unwrap_or_else(|error| {
        tracing::debug!(%status, %error, "failed to read error response body");
        String::new()
    })
}
