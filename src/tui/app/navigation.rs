//! Navigation handlers and cursor management.
//!
//! Cursor movement stays within the current page. Page changes go through
//! the pagination rules, so they are ignored while a request is in flight
//! or at either end of the result set.

use bubbletea_rs::Cmd;

use super::EventsApp;
use crate::api::pagination::{can_go_next, can_go_prev, clamp_page};

/// Lines an event may take in the list (title, details, departments).
const MAX_LINES_PER_EVENT: usize = 3;

impl EventsApp {
    /// Number of events guaranteed to fit in the list viewport.
    fn visible_items(&self) -> usize {
        self.event_list
            .visible_height()
            .checked_div(MAX_LINES_PER_EVENT)
            .unwrap_or(0)
            .max(1)
    }

    /// Adjusts the scroll offset so the cursor remains within the viewport.
    pub(super) fn ensure_cursor_visible(&mut self) {
        let visible_items = self.visible_items();

        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_items);
        if self.cursor_position >= viewport_end {
            self.scroll_offset = self
                .cursor_position
                .saturating_sub(visible_items.saturating_sub(1));
        }
    }

    /// Keeps the cursor on an existing item after the page changed.
    pub(super) fn clamp_cursor(&mut self) {
        let max_index = self.items().len().saturating_sub(1);
        self.cursor_position = self.cursor_position.min(max_index);
        self.scroll_offset = self.scroll_offset.min(self.cursor_position);
        self.ensure_cursor_visible();
    }

    const fn reset_cursor(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    pub(super) fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.cursor_position = self.cursor_position.saturating_sub(1);
        self.ensure_cursor_visible();
        None
    }

    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        let max_index = self.items().len().saturating_sub(1);
        self.cursor_position = self.cursor_position.saturating_add(1).min(max_index);
        self.ensure_cursor_visible();
        None
    }

    pub(super) const fn handle_home(&mut self) -> Option<Cmd> {
        self.reset_cursor();
        None
    }

    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        self.cursor_position = self.items().len().saturating_sub(1);
        self.ensure_cursor_visible();
        None
    }

    /// Moves to the previous page when allowed.
    pub(super) fn handle_prev_page(&mut self) -> Option<Cmd> {
        let page = self.filter_state.page();
        if !can_go_prev(page, self.loading) {
            return None;
        }
        self.filter_state.set_page(page.saturating_sub(1));
        self.reset_cursor();
        None
    }

    /// Moves to the next page when allowed.
    pub(super) fn handle_next_page(&mut self) -> Option<Cmd> {
        let page = self.filter_state.page();
        let total_pages = self.total_pages();
        if !can_go_next(page, total_pages, self.loading) {
            return None;
        }
        self.filter_state
            .set_page(clamp_page(page.saturating_add(1), total_pages));
        self.reset_cursor();
        None
    }
}
