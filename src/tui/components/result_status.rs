//! Classification of the result area into a single display state.

use crate::api::models::ListingResponse;

/// What the result area is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultStatus<'a> {
    /// Nothing has been requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request failed.
    Failed(&'a str),
    /// The latest response matched nothing.
    Empty,
    /// The latest response has items to list.
    Items,
}

impl<'a> ResultStatus<'a> {
    /// Picks exactly one status from the last response, loading flag, and
    /// error.
    ///
    /// Loading wins over an error, and both win over the response contents.
    /// `Empty` therefore only appears when a response with zero items exists
    /// and nothing is loading or failed.
    #[must_use]
    pub fn classify(
        response: Option<&ListingResponse>,
        loading: bool,
        error: Option<&'a str>,
    ) -> Self {
        if loading {
            return Self::Loading;
        }
        if let Some(message) = error {
            return Self::Failed(message);
        }
        match response {
            None => Self::Idle,
            Some(page) if page.items.is_empty() => Self::Empty,
            Some(_) => Self::Items,
        }
    }

    /// Returns the status line shown above the list, if any.
    #[must_use]
    pub fn status_line(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Loading...".to_owned()),
            Self::Failed(message) => Some(format!("Error: {message}")),
            Self::Empty => Some("No results.".to_owned()),
            Self::Idle | Self::Items => None,
        }
    }
}
