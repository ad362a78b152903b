//! Event list component for displaying one page of events.
//!
//! This component renders the events on the current page with cursor
//! highlighting. Each event takes two lines, plus one for departments when
//! the server supplied them.

use unicode_width::UnicodeWidthStr;

use crate::api::models::EventItem;

/// Default visible height for the event list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Context for rendering the event list view.
#[derive(Debug, Clone)]
pub struct EventListViewContext<'a> {
    /// Events on the current page.
    pub items: &'a [EventItem],
    /// Index of the highlighted event.
    pub cursor_position: usize,
    /// Index of the first event drawn.
    pub scroll_offset: usize,
    /// Maximum number of lines available.
    pub visible_height: usize,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Component for displaying a page of events.
#[derive(Debug, Clone)]
pub struct EventListComponent {
    /// Visible height in lines (for scrolling calculations).
    visible_height: usize,
}

impl Default for EventListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EventListComponent {
    /// Creates a new event list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the events that fit in the visible height.
    #[must_use]
    pub fn view(&self, ctx: &EventListViewContext<'_>) -> String {
        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        let mut used_lines = 0_usize;

        for (index, item) in ctx.items.iter().enumerate().skip(ctx.scroll_offset) {
            let lines = describe_event(item);
            if used_lines > 0 && used_lines.saturating_add(lines.len()) > visible_height {
                break;
            }

            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            for (line_index, line) in lines.iter().enumerate() {
                let marker = if line_index == 0 { prefix } else { " " };
                let rendered = format!("{marker} {line}");
                output.push_str(&fit_to_width(&rendered, ctx.max_width));
                output.push('\n');
            }
            used_lines = used_lines.saturating_add(lines.len());
        }

        output
    }
}

/// Formats an event into display lines.
///
/// The first line carries the title and type, the second the start time,
/// location, and virtual/CME markers, and an optional third line the raw
/// departments string.
#[must_use]
pub fn describe_event(item: &EventItem) -> Vec<String> {
    let mut headline = item.title.clone();
    if let Some(event_type) = item.event_type.as_deref().filter(|t| !t.is_empty()) {
        headline.push_str("  ");
        headline.push_str(event_type);
    }

    let mut details = vec![item.start_at.clone()];
    if let Some(location) = item.location.as_deref().filter(|l| !l.is_empty()) {
        details.push(location.to_owned());
    }
    if item.is_virtual.is_set() {
        details.push("Virtual".to_owned());
    }
    if item.cme_eligible.is_set() {
        details.push(cme_marker(item.cme_credits));
    }

    let mut lines = vec![headline, format!("  {}", details.join(" · "))];
    if let Some(departments) = item.departments.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("  Departments: {departments}"));
    }
    lines
}

fn cme_marker(credits: Option<f64>) -> String {
    match credits {
        Some(value) if value > 0.0 => format!("CME ({value})"),
        _ => "CME".to_owned(),
    }
}

/// Truncates a line to `max_width` columns, adding an ellipsis when cut.
fn fit_to_width(line: &str, max_width: usize) -> String {
    if max_width == 0 || line.width() <= max_width {
        return line.to_owned();
    }

    let mut output = String::new();
    let mut width = 0_usize;
    let budget = max_width.saturating_sub(3);
    for ch in line.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width.saturating_add(char_width) > budget {
            break;
        }
        output.push(ch);
        width = width.saturating_add(char_width);
    }
    output.push_str("...");
    output
}
