//! Rendering logic for the events TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::EventsApp;
use crate::tui::components::{
    EventListViewContext, FilterFormComponent, FilterFormViewContext, PagerComponent,
    PagerViewContext,
};

/// Rows used by everything except the event list: header, three form rows,
/// a blank separator, pager, result status, and the key hints.
const CHROME_HEIGHT: u16 = 8;

impl EventsApp {
    /// Returns the number of list rows available at the given terminal height.
    pub(super) fn list_height_for(height: u16) -> usize {
        usize::from(height.saturating_sub(CHROME_HEIGHT)).max(1)
    }

    /// Renders the form, pager, result status, and list.
    pub(super) fn render_main_view(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&FilterFormComponent::view(&FilterFormViewContext {
            state: &self.filter_state,
            focus: self.focus,
        }));
        output.push('\n');
        output.push_str(&self.render_pager());

        let status = self.result_status();
        output.push_str(&status.status_line().unwrap_or_default());
        output.push('\n');

        let list_ctx = EventListViewContext {
            items: self.items(),
            cursor_position: self.cursor_position,
            scroll_offset: self.scroll_offset,
            visible_height: Self::list_height_for(self.height),
            max_width: usize::from(self.width.max(1)),
        };
        output.push_str(&self.event_list.view(&list_ctx));
        output.push_str(&self.render_status_bar());

        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "EventLens Calendar PoC";
        let query = self.filter_state.query_string();
        format!("{title}  ?{query}\n")
    }

    fn render_pager(&self) -> String {
        PagerComponent::view(&PagerViewContext {
            page: self.filter_state.page(),
            total_pages: self.total_pages(),
            total: self.response.as_ref().map(|response| response.total),
            loading: self.loading,
        })
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = if self.focus.is_some() {
            "type to edit  Tab:next field  Backspace:delete  Ctrl-U:clear all  Esc:done"
        } else if self.width <= 80 {
            "q:quit  ?:help  /:search  n/p:page  c:CME  v:virtual"
        } else {
            "j/k:move  /:search  d:department  n/p:page  c:CME  v:virtual  s:page size  x:clear  r:refresh  ?:help  q:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  Home, g    Go to first event
  End, G     Go to last event
  n, Right   Next page
  p, Left    Previous page

Filters:
  /, Tab     Edit keyword
  d          Edit department
  Tab        Next field (while editing)
  Shift-Tab  Previous field
  Esc, Enter Stop editing
  c          Toggle CME only
  v          Toggle virtual only
  s          Cycle page size (20/10/5/1)
  x          Clear all filters
  Ctrl-U     Clear all filters (while editing)

Other:
  r          Reload the current page
  ?          Toggle this help
  q          Quit

Dates use YYYY-MM-DD.

Press any key to close this help.
";
        help_text.to_owned()
    }
}
