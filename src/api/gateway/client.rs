//! HTTP client construction for gateway implementations.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::api::error::ListingError;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`super::ReqwestEventsGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    /// Origin (and optional path prefix) the `api/events` path is joined to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl GatewaySettings {
    /// Creates settings for the given base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Parses the base URL and ensures it ends with `/` so relative joins keep
/// any path prefix.
///
/// # Errors
///
/// Returns [`ListingError::InvalidUrl`] when the value is blank, cannot be
/// parsed, or is not an HTTP(S) URL.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ListingError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ListingError::InvalidUrl("base URL is empty".to_owned()));
    }

    let mut url = Url::parse(trimmed).map_err(|error| ListingError::InvalidUrl(error.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ListingError::InvalidUrl(format!(
            "unsupported scheme `{}`",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Builds a reqwest client with the configured timeout.
///
/// # Errors
///
/// Returns [`ListingError::Configuration`] when the TLS backend or client
/// cannot be initialised.
pub(super) fn build_http_client(settings: &GatewaySettings) -> Result<Client, ListingError> {
    Client::builder()
        .timeout(settings.timeout)
        .build()
        .map_err(|error| ListingError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })
}
