//! Filter form handlers for the events TUI.
//!
//! Edits go through [`FilterState`](crate::tui::state::FilterState), which
//! moves back to page 1 on every change. The resulting fetch is issued by
//! the router, not here.

use bubbletea_rs::Cmd;

use super::EventsApp;
use crate::api::pagination::PageSize;
use crate::tui::state::FilterField;

impl EventsApp {
    pub(super) const fn handle_focus_field(&mut self, field: FilterField) -> Option<Cmd> {
        self.focus = Some(field);
        None
    }

    /// Moves focus forward, wrapping from the last field to the first.
    pub(super) fn handle_focus_next(&mut self) -> Option<Cmd> {
        let next = self
            .focus
            .map_or(FilterField::Keyword, |field| {
                field.next().unwrap_or(FilterField::Keyword)
            });
        self.focus = Some(next);
        None
    }

    /// Moves focus backward, wrapping from the first field to the last.
    pub(super) fn handle_focus_previous(&mut self) -> Option<Cmd> {
        let previous = self.focus.map_or(FilterField::DateTo, |field| {
            field.previous().unwrap_or(FilterField::DateTo)
        });
        self.focus = Some(previous);
        None
    }

    pub(super) const fn handle_unfocus(&mut self) -> Option<Cmd> {
        self.focus = None;
        None
    }

    /// Appends a character to the focused field; ignored without focus.
    pub(super) fn handle_insert_char(&mut self, ch: char) -> Option<Cmd> {
        if let Some(field) = self.focus {
            self.filter_state.push_char(field, ch);
        }
        None
    }

    /// Removes the last character of the focused field; ignored without focus.
    pub(super) fn handle_delete_char(&mut self) -> Option<Cmd> {
        if let Some(field) = self.focus {
            self.filter_state.pop_char(field);
        }
        None
    }

    pub(super) const fn handle_toggle_cme(&mut self) -> Option<Cmd> {
        let value = !self.filter_state.cme_only();
        self.filter_state.set_cme_only(value);
        None
    }

    pub(super) const fn handle_toggle_virtual(&mut self) -> Option<Cmd> {
        let value = !self.filter_state.virtual_only();
        self.filter_state.set_virtual_only(value);
        None
    }

    pub(super) const fn handle_cycle_page_size(&mut self) -> Option<Cmd> {
        self.filter_state.cycle_page_size();
        None
    }

    pub(super) const fn handle_set_page_size(&mut self, size: PageSize) -> Option<Cmd> {
        self.filter_state.set_page_size(size);
        None
    }

    /// Resets every filter and returns to page 1, keeping the page size.
    pub(super) fn handle_clear_filters(&mut self) -> Option<Cmd> {
        self.filter_state.clear();
        None
    }
}
