//! Error types exposed by the events listing client.

use thiserror::Error;

/// Errors surfaced while building requests or talking to the listing API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingError {
    /// The configured base URL could not be parsed or joined.
    #[error("listing API URL is invalid: {0}")]
    InvalidUrl(String),

    /// A value supplied by the user cannot be used in a query.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected value.
        message: String,
    },

    /// Networking failed while calling the listing API.
    #[error("network error talking to the events API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The listing API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Detail extracted from the response body, if any.
        message: String,
    },

    /// The requested event does not exist.
    #[error("event {id} not found")]
    NotFound {
        /// Identifier that was requested.
        id: u64,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode events response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal UI failed to start or exited abnormally.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Error detail from the TUI runtime.
        message: String,
    },
}
