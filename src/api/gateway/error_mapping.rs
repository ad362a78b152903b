//! Error mapping helpers for the reqwest gateway.

use http::StatusCode;

use crate::api::error::ListingError;

/// Maps a reqwest error into a [`ListingError`].
pub(super) fn map_reqwest_error(operation: &str, error: &reqwest::Error) -> ListingError {
    if error.is_decode() {
        return ListingError::Decode {
            message: format!("{operation}: {error}"),
        };
    }

    ListingError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a non-success status and its body into a [`ListingError::Status`].
pub(super) fn map_http_error(status: StatusCode, body: &str) -> ListingError {
    let message = extract_detail(body)
        .or_else(|| status.canonical_reason().map(ToOwned::to_owned))
        .unwrap_or_else(|| "request failed".to_owned());

    ListingError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Pulls a human-readable message out of an error body.
///
/// The backend reports errors as `{"detail": "..."}`; a `message` field is
/// accepted as well.
pub(super) fn extract_detail(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["detail", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::fastapi_detail(r#"{"detail":"page_size must be 1..100"}"#, Some("page_size must be 1..100"))]
    #[case::message_field(r#"{"message":"boom"}"#, Some("boom"))]
    #[case::non_string_detail(r#"{"detail":[{"loc":["query","page"]}]}"#, None)]
    #[case::not_json("<html>502</html>", None)]
    fn extract_detail_reads_known_fields(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_detail(body).as_deref(), expected);
    }

    #[test]
    fn map_http_error_falls_back_to_reason_phrase() {
        let error = map_http_error(StatusCode::BAD_GATEWAY, "");
        assert_eq!(
            error,
            ListingError::Status {
                status: 502,
                message: "Bad Gateway".to_owned(),
            }
        );
        assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
    }
}
