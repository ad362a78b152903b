//! Pager line with previous/next controls and page position.

use crate::api::pagination::{can_go_next, can_go_prev};

/// Context for rendering the pager.
#[derive(Debug, Clone, Copy)]
pub struct PagerViewContext {
    /// Current 1-based page.
    pub page: u32,
    /// Total pages for the last response.
    pub total_pages: u32,
    /// Total matching events, once a response has arrived.
    pub total: Option<u64>,
    /// Whether a request is in flight.
    pub loading: bool,
}

/// Stateless renderer for the pager line.
#[derive(Debug, Default, Clone, Copy)]
pub struct PagerComponent;

impl PagerComponent {
    /// Renders the pager as a single line.
    ///
    /// Enabled controls are bracketed with their key; disabled controls are
    /// shown without brackets.
    #[must_use]
    pub fn view(ctx: &PagerViewContext) -> String {
        let prev = control("p", "Prev", can_go_prev(ctx.page, ctx.loading));
        let next = control(
            "n",
            "Next",
            can_go_next(ctx.page, ctx.total_pages, ctx.loading),
        );
        let total = ctx
            .total
            .map(|count| format!(" (total: {count})"))
            .unwrap_or_default();
        format!(
            "{prev} {next}  Page {} / {}{total}\n",
            ctx.page, ctx.total_pages
        )
    }
}

fn control(key: &str, label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{key}:{label}]")
    } else {
        format!(" {}{label} ", " ".repeat(key.len() + 1))
    }
}
