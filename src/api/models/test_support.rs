//! Test helpers for constructing `EventItem` fixtures.
//!
//! # Examples
//!
//! ```
//! use eventlens::api::models::test_support::{minimal_event, seeded_events};
//!
//! let event = minimal_event(1, "Journal Club", "2026-03-01T09:00:00");
//! assert_eq!(event.title, "Journal Club");
//! assert_eq!(seeded_events().len(), 3);
//! ```

use super::{EventItem, Flag, ListingResponse};

/// Title of the seeded CME-eligible event with the earliest start.
pub const NEUROLOGY_TITLE: &str = "Neurology Grand Rounds: Advances in Stroke Care";
/// Title of the seeded cardiology event.
pub const CARDIOLOGY_TITLE: &str = "Cardiology Lecture: Heart Failure Updates";
/// Title of the seeded oncology event.
pub const ONCOLOGY_TITLE: &str = "Oncology Research Seminar: Immunotherapy Pipeline";

/// Constructs an `EventItem` with only id, title, and start time set.
#[must_use]
pub fn minimal_event(id: u64, title: &str, start_at: &str) -> EventItem {
    EventItem {
        id,
        source: "seed".to_owned(),
        title: title.to_owned(),
        start_at: start_at.to_owned(),
        ..Default::default()
    }
}

/// Returns the three seed events in ascending start order.
#[must_use]
pub fn seeded_events() -> Vec<EventItem> {
    vec![
        EventItem {
            event_type: Some("Grand Rounds".to_owned()),
            departments: Some("[\"Medicine\",\"Neurology\"]".to_owned()),
            location: Some("Auditorium A".to_owned()),
            cme_eligible: Flag::Yes,
            cme_credits: Some(1.0),
            ..minimal_event(1, NEUROLOGY_TITLE, "2026-01-15T08:00:00")
        },
        EventItem {
            event_type: Some("Lecture".to_owned()),
            departments: Some("[\"Cardiology\"]".to_owned()),
            is_virtual: Flag::Yes,
            ..minimal_event(2, CARDIOLOGY_TITLE, "2026-02-03T12:00:00")
        },
        EventItem {
            event_type: Some("Seminar".to_owned()),
            departments: Some("[\"Oncology\"]".to_owned()),
            location: Some("Research Building 2".to_owned()),
            ..minimal_event(3, ONCOLOGY_TITLE, "2026-02-20T16:00:00")
        },
    ]
}

/// Wraps items in a single-page `ListingResponse`.
#[must_use]
pub fn page_of(items: Vec<EventItem>, page: u32, page_size: u32, total: u64) -> ListingResponse {
    ListingResponse {
        items,
        page,
        page_size,
        total,
    }
}
