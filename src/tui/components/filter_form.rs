//! Filter form component.
//!
//! Renders the four text filters, the two checkboxes, and the page size
//! selector. The focused field is marked and shows a cursor.

use chrono::NaiveDate;

use crate::tui::state::{FilterField, FilterState};

/// Expected input format for the date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Context for rendering the filter form.
#[derive(Debug, Clone, Copy)]
pub struct FilterFormViewContext<'a> {
    /// Current filter values.
    pub state: &'a FilterState,
    /// Field receiving keystrokes, if any.
    pub focus: Option<FilterField>,
}

/// Stateless renderer for the filter form.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterFormComponent;

impl FilterFormComponent {
    /// Renders the form as three lines.
    #[must_use]
    pub fn view(ctx: &FilterFormViewContext<'_>) -> String {
        let state = ctx.state;
        let mut output = String::new();

        output.push_str(&Self::render_field_pair(
            ctx,
            FilterField::Keyword,
            FilterField::Department,
        ));
        output.push('\n');
        output.push_str(&Self::render_field_pair(
            ctx,
            FilterField::DateFrom,
            FilterField::DateTo,
        ));
        output.push('\n');
        output.push_str(&format!(
            "{} CME only  {} Virtual only  Page size: {}\n",
            checkbox(state.cme_only()),
            checkbox(state.virtual_only()),
            state.page_size()
        ));
        output
    }

    fn render_field_pair(
        ctx: &FilterFormViewContext<'_>,
        left: FilterField,
        right: FilterField,
    ) -> String {
        format!(
            "{}   {}",
            Self::render_field(ctx, left),
            Self::render_field(ctx, right)
        )
    }

    fn render_field(ctx: &FilterFormViewContext<'_>, field: FilterField) -> String {
        let focused = ctx.focus == Some(field);
        let marker = if focused { '>' } else { ' ' };
        let cursor = if focused { "_" } else { "" };
        let value = ctx.state.field(field);
        let hint = if field.is_date() && !is_valid_date(value) {
            " (YYYY-MM-DD)"
        } else {
            ""
        };
        format!("{marker}{}: [{value}{cursor}]{hint}", field.label())
    }
}

/// Returns true when `value` is empty or a valid calendar date.
///
/// Empty means "no bound". Anything else that fails to parse is still sent
/// to the server as typed; this only drives the form hint.
#[must_use]
pub fn is_valid_date(value: &str) -> bool {
    value.is_empty() || NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

const fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn render(state: &FilterState, focus: Option<FilterField>) -> String {
        FilterFormComponent::view(&FilterFormViewContext { state, focus })
    }

    #[test]
    fn default_form_shows_empty_fields_and_default_page_size() {
        let output = render(&FilterState::new(), None);

        assert!(output.contains(" Keyword (q): []"));
        assert!(output.contains("[ ] CME only"));
        assert!(output.contains("[ ] Virtual only"));
        assert!(output.contains("Page size: 20"));
    }

    #[test]
    fn focused_field_has_marker_and_cursor() {
        let mut state = FilterState::new();
        state.set_department("Cardiology");

        let output = render(&state, Some(FilterField::Department));

        assert!(output.contains(">Department: [Cardiology_]"));
        assert!(output.contains(" Keyword (q): []"));
    }

    #[test]
    fn checked_boxes_render_with_x() {
        let mut state = FilterState::new();
        state.set_cme_only(true);
        state.set_virtual_only(true);

        let output = render(&state, None);

        assert!(output.contains("[x] CME only"));
        assert!(output.contains("[x] Virtual only"));
    }

    #[test]
    fn malformed_date_shows_format_hint() {
        let mut state = FilterState::new();
        state.set_date_from("2026-13");

        let output = render(&state, None);

        assert!(output.contains("From: [2026-13] (YYYY-MM-DD)"));
        assert!(!output.contains("To: [] (YYYY-MM-DD)"));
    }

    #[rstest]
    #[case::empty("", true)]
    #[case::valid("2026-01-15", true)]
    #[case::bad_month("2026-13-01", false)]
    #[case::partial("2026-01", false)]
    #[case::words("next week", false)]
    fn date_validation(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_date(value), expected);
    }
}
