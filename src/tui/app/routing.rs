//! Message routing and dispatch logic.
//!
//! Messages are dispatched by category. After each message the query derived
//! from the filter state is compared with the one before it; any difference
//! issues a new listing fetch.

use bubbletea_rs::Cmd;

use super::EventsApp;
use crate::tui::messages::AppMsg;

impl EventsApp {
    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. Handlers that change the
    /// query return `None`; the follow-up fetch is issued here.
    #[doc(hidden)]
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let before = self.filter_state.to_query();
        let cmd = self.dispatch_by_message_category(msg);
        if cmd.is_none() && self.filter_state.to_query() != before {
            return Some(self.issue_fetch());
        }
        cmd
    }

    /// Dispatches messages based on their category.
    fn dispatch_by_message_category(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_focus() {
            return self.handle_focus_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            AppMsg::PrevPage => self.handle_prev_page(),
            AppMsg::NextPage => self.handle_next_page(),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    /// Dispatches form focus messages to their handlers.
    fn handle_focus_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusField(field) => self.handle_focus_field(*field),
            AppMsg::FocusNext => self.handle_focus_next(),
            AppMsg::FocusPrevious => self.handle_focus_previous(),
            AppMsg::Unfocus => self.handle_unfocus(),
            _ => {
                // Unreachable: caller filters to focus messages.
                None
            }
        }
    }

    /// Dispatches filter messages to their handlers.
    fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InsertChar(ch) => self.handle_insert_char(*ch),
            AppMsg::DeleteChar => self.handle_delete_char(),
            AppMsg::ToggleCme => self.handle_toggle_cme(),
            AppMsg::ToggleVirtual => self.handle_toggle_virtual(),
            AppMsg::CyclePageSize => self.handle_cycle_page_size(),
            AppMsg::SetPageSize(size) => self.handle_set_page_size(*size),
            AppMsg::ClearFilters => self.handle_clear_filters(),
            _ => {
                // Unreachable: caller filters to filter messages.
                None
            }
        }
    }

    /// Dispatches data loading messages to their handlers.
    fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => Some(self.issue_fetch()),
            AppMsg::ListingLoaded {
                request_id,
                response,
                latency_ms,
            } => self.handle_listing_loaded(*request_id, response, *latency_ms),
            AppMsg::ListingFailed { request_id, error } => {
                self.handle_listing_failed(*request_id, error)
            }
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => Some(self.issue_fetch()),
            AppMsg::Quit => self.handle_quit(),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_quit(&mut self) -> Option<Cmd> {
        self.invalidate_pending();
        Some(bubbletea_rs::quit())
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.event_list
            .set_visible_height(Self::list_height_for(height));
        self.ensure_cursor_visible();
        None
    }
}
