//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Mapping depends on whether a filter
//! field is being edited: while editing, printable keys are text input.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::FilterField;

/// Input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Focus is on the result list.
    Browsing,
    /// A text field in the filter form has focus.
    Editing(FilterField),
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            KeyCode::Char('u') if matches!(context, InputContext::Editing(_)) => {
                Some(AppMsg::ClearFilters)
            }
            _ => None,
        };
    }

    match context {
        InputContext::Browsing => map_browsing_key(key.key),
        InputContext::Editing(_) => map_editing_key(key.key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_browsing_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => Some(AppMsg::NextPage),
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => Some(AppMsg::PrevPage),
        KeyCode::Char('/') | KeyCode::Tab => Some(AppMsg::FocusField(FilterField::Keyword)),
        KeyCode::BackTab => Some(AppMsg::FocusField(FilterField::DateTo)),
        KeyCode::Char('d') => Some(AppMsg::FocusField(FilterField::Department)),
        KeyCode::Char('c') => Some(AppMsg::ToggleCme),
        KeyCode::Char('v') => Some(AppMsg::ToggleVirtual),
        KeyCode::Char('s') => Some(AppMsg::CyclePageSize),
        KeyCode::Char('x') => Some(AppMsg::ClearFilters),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_editing_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Esc | KeyCode::Enter => Some(AppMsg::Unfocus),
        KeyCode::Tab | KeyCode::Down => Some(AppMsg::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(AppMsg::FocusPrevious),
        KeyCode::Backspace => Some(AppMsg::DeleteChar),
        KeyCode::Char(ch) => Some(AppMsg::InsertChar(ch)),
        _ => None,
    }
}
