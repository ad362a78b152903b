//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::api::error::ListingError;
use crate::api::models::ListingResponse;
use crate::api::pagination::PageSize;

use super::state::{FilterField, RequestId};

/// Messages for the events listing TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation within the current page
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // Pagination
    /// Go to the previous page, if allowed.
    PrevPage,
    /// Go to the next page, if allowed.
    NextPage,

    // Filter form focus
    /// Focus a text field for editing.
    FocusField(FilterField),
    /// Move focus to the next text field.
    FocusNext,
    /// Move focus to the previous text field.
    FocusPrevious,
    /// Leave the form and return focus to the list.
    Unfocus,

    // Filter changes
    /// Type a character into the focused field.
    InsertChar(char),
    /// Delete the last character of the focused field.
    DeleteChar,
    /// Toggle the CME-only checkbox.
    ToggleCme,
    /// Toggle the virtual-only checkbox.
    ToggleVirtual,
    /// Advance to the next page size choice.
    CyclePageSize,
    /// Set a specific page size.
    SetPageSize(PageSize),
    /// Clear all filters.
    ClearFilters,

    // Data loading
    /// Re-issue the current query.
    RefreshRequested,
    /// A listing request completed successfully.
    ListingLoaded {
        /// Request the response belongs to.
        request_id: RequestId,
        /// Page returned by the server.
        response: ListingResponse,
        /// Request duration in milliseconds.
        latency_ms: u64,
    },
    /// A listing request failed.
    ListingFailed {
        /// Request the failure belongs to.
        request_id: RequestId,
        /// Failure reason.
        error: ListingError,
    },

    // Application lifecycle
    /// Startup event that triggers the first fetch.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor and page navigation messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::Home
                | Self::End
                | Self::PrevPage
                | Self::NextPage
        )
    }

    /// Returns true for messages that move form focus.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(
            self,
            Self::FocusField(_) | Self::FocusNext | Self::FocusPrevious | Self::Unfocus
        )
    }

    /// Returns true for messages that change filter criteria.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::DeleteChar
                | Self::ToggleCme
                | Self::ToggleVirtual
                | Self::CyclePageSize
                | Self::SetPageSize(_)
                | Self::ClearFilters
        )
    }

    /// Returns true for data loading messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested | Self::ListingLoaded { .. } | Self::ListingFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::next_page(AppMsg::NextPage, true, false, false)]
    #[case::insert(AppMsg::InsertChar('a'), false, true, false)]
    #[case::toggle_cme(AppMsg::ToggleCme, false, true, false)]
    #[case::refresh(AppMsg::RefreshRequested, false, false, true)]
    #[case::quit(AppMsg::Quit, false, false, false)]
    fn messages_belong_to_one_category(
        #[case] msg: AppMsg,
        #[case] navigation: bool,
        #[case] filter: bool,
        #[case] data: bool,
    ) {
        assert_eq!(msg.is_navigation(), navigation);
        assert_eq!(msg.is_filter(), filter);
        assert_eq!(msg.is_data(), data);
        assert!(!msg.is_focus());
    }
}
