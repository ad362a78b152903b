//! Data models returned by the events listing API.
//!
//! Items are read-only: the client renders them as received and re-fetches a
//! whole page whenever the filter state changes.

use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Boolean stored by the backend as an integer column (`0` or `1`).
///
/// Deserialisation also accepts JSON booleans so that a backend emitting
/// `true`/`false` is still understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawFlag", into = "u8")]
pub enum Flag {
    /// Stored as `0`.
    #[default]
    No,
    /// Stored as `1`.
    Yes,
}

impl Flag {
    /// Returns true for [`Flag::Yes`].
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl From<Flag> for u8 {
    fn from(value: Flag) -> Self {
        match value {
            Flag::No => 0,
            Flag::Yes => 1,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Int(i64),
    Bool(bool),
}

impl TryFrom<RawFlag> for Flag {
    type Error = String;

    fn try_from(value: RawFlag) -> Result<Self, Self::Error> {
        match value {
            RawFlag::Int(0) => Ok(Self::No),
            RawFlag::Int(1) => Ok(Self::Yes),
            RawFlag::Int(other) => Err(format!("flag must be 0 or 1, got {other}")),
            RawFlag::Bool(flag) => Ok(Self::from(flag)),
        }
    }
}

/// A single calendar event as returned by `GET /api/events`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventItem {
    /// Server-assigned identifier.
    pub id: u64,
    /// Name of the feed the event was ingested from.
    pub source: String,
    /// Event title.
    pub title: String,
    /// Free-form event type (e.g. "Grand Rounds").
    #[serde(default)]
    pub event_type: Option<String>,
    /// Departments as an opaque display string.
    ///
    /// The backend currently stores a JSON-encoded list here; the client shows
    /// it verbatim and never parses it.
    #[serde(default)]
    pub departments: Option<String>,
    /// Venue, if the event has a physical location.
    #[serde(default)]
    pub location: Option<String>,
    /// Whether the event can be attended remotely.
    #[serde(default)]
    pub is_virtual: Flag,
    /// Whether attendance earns CME credit.
    #[serde(default)]
    pub cme_eligible: Flag,
    /// Number of CME credits, when known.
    #[serde(default)]
    pub cme_credits: Option<f64>,
    /// ISO-8601 start timestamp.
    pub start_at: String,
    /// ISO-8601 end timestamp.
    #[serde(default)]
    pub end_at: Option<String>,
    /// Stable identifier from the upstream feed.
    #[serde(default)]
    pub uid: Option<String>,
    /// Link to the event page on the publishing site.
    #[serde(default)]
    pub external_url: Option<String>,
    /// IANA timezone name for the timestamps.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Lifecycle status (e.g. `active`).
    #[serde(default)]
    pub status: Option<String>,
}

/// One page of events plus the total match count across all pages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingResponse {
    /// Events on this page, ordered by start time.
    pub items: Vec<EventItem>,
    /// 1-based page number the server answered for.
    pub page: u32,
    /// Page size the server applied.
    pub page_size: u32,
    /// Number of matching events across all pages.
    pub total: u64,
}

impl ListingResponse {
    /// Returns the number of pages needed to show `total` events.
    ///
    /// Always at least 1, so an empty result still has a first page.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        crate::api::pagination::total_pages(self.total, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::zero(json!(0), Flag::No)]
    #[case::one(json!(1), Flag::Yes)]
    #[case::json_true(json!(true), Flag::Yes)]
    #[case::json_false(json!(false), Flag::No)]
    fn flag_accepts_integer_and_boolean_encodings(
        #[case] raw: serde_json::Value,
        #[case] expected: Flag,
    ) {
        let flag: Flag = serde_json::from_value(raw).expect("flag should deserialise");
        assert_eq!(flag, expected);
    }

    #[test]
    fn flag_rejects_out_of_range_integers() {
        let result = serde_json::from_value::<Flag>(json!(2));
        assert!(result.is_err());
    }

    #[test]
    fn flag_serialises_as_integer() {
        let value = serde_json::to_value(Flag::Yes).expect("flag should serialise");
        assert_eq!(value, json!(1));
    }

    #[test]
    fn event_item_tolerates_missing_optional_fields() {
        let item: EventItem = serde_json::from_value(json!({
            "id": 7,
            "source": "seed",
            "title": "Cardiology Lecture: Heart Failure Updates",
            "is_virtual": 0,
            "cme_eligible": 0,
            "start_at": "2026-02-03T12:00:00"
        }))
        .expect("item should deserialise");

        assert_eq!(item.id, 7);
        assert!(item.departments.is_none());
        assert!(!item.cme_eligible.is_set());
        assert!(item.cme_credits.is_none());
    }

    #[test]
    fn departments_are_kept_verbatim() {
        let item: EventItem = serde_json::from_value(json!({
            "id": 1,
            "source": "seed",
            "title": "Neurology Grand Rounds",
            "departments": "[\"Medicine\",\"Neurology\"]",
            "is_virtual": 1,
            "cme_eligible": 1,
            "cme_credits": 1.5,
            "start_at": "2026-01-15T08:00:00",
            "first_seen_at": "2026-01-01T00:00:00"
        }))
        .expect("item should deserialise");

        assert_eq!(
            item.departments.as_deref(),
            Some("[\"Medicine\",\"Neurology\"]")
        );
        assert_eq!(item.cme_credits, Some(1.5));
    }

    #[test]
    fn listing_response_reports_total_pages() {
        let response = ListingResponse {
            items: Vec::new(),
            page: 1,
            page_size: 20,
            total: 41,
        };
        assert_eq!(response.total_pages(), 3);
    }
}
