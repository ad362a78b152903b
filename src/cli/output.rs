//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use eventlens::tui::components::describe_event;
use eventlens::{EventItem, ListingError, ListingResponse};

/// Writes one page of events followed by the pager line.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when writing fails.
pub fn write_listing_page_to<W: Write>(
    writer: &mut W,
    response: &ListingResponse,
) -> Result<(), ListingError> {
    if response.items.is_empty() {
        writeln!(writer, "No results.").map_err(|e| io_error(&e))?;
    }

    for item in &response.items {
        for line in describe_event(item) {
            writeln!(writer, "{line}").map_err(|e| io_error(&e))?;
        }
    }

    writeln!(
        writer,
        "Page {} / {} (total: {})",
        response.page,
        response.total_pages(),
        response.total
    )
    .map_err(|e| io_error(&e))
}

/// Writes every field of a single event.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when writing fails.
pub fn write_event_detail_to<W: Write>(
    writer: &mut W,
    item: &EventItem,
) -> Result<(), ListingError> {
    for line in describe_event(item) {
        writeln!(writer, "{line}").map_err(|e| io_error(&e))?;
    }

    let optional_fields = [
        ("Ends", item.end_at.as_deref()),
        ("Timezone", item.timezone.as_deref()),
        ("Status", item.status.as_deref()),
        ("URL", item.external_url.as_deref()),
        ("UID", item.uid.as_deref()),
    ];
    writeln!(writer, "  Source: {} (#{})", item.source, item.id).map_err(|e| io_error(&e))?;
    for (label, value) in optional_fields {
        if let Some(text) = value.filter(|text| !text.is_empty()) {
            writeln!(writer, "  {label}: {text}").map_err(|e| io_error(&e))?;
        }
    }
    Ok(())
}

/// Converts an I/O error into a [`ListingError`].
pub fn io_error(error: &io::Error) -> ListingError {
    ListingError::Io {
        message: error.to_string(),
    }
}
