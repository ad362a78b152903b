//! Wires `EventsApp` into the bubbletea-rs runtime.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::EventsApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for EventsApp {
    fn init() -> (Self, Option<Cmd>) {
        let app = crate::tui::listing_context().map_or_else(Self::default, |context| {
            Self::new(context.initial_filters.clone()).with_gateway(Arc::clone(&context.gateway))
        });
        let configured = match crate::tui::telemetry_sink() {
            Some(sink) => app.with_telemetry(sink),
            None => app,
        };

        (configured, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        let translated = self.translate_runtime_message(msg.as_ref())?;
        self.handle_message(&translated)
    }

    fn view(&self) -> String {
        let frame = if self.show_help {
            self.render_help_overlay()
        } else {
            self.render_main_view()
        };
        self.fit_frame(&frame)
    }
}

impl EventsApp {
    /// Returns a command that delivers `AppMsg::Initialized` on the next tick.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }

    /// Converts runtime events into application messages.
    ///
    /// Any key dismisses the help overlay while it is open.
    fn translate_runtime_message(&self, msg: &(dyn Any + Send)) -> Option<AppMsg> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return Some(app_msg.clone());
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if self.show_help {
                return Some(AppMsg::ToggleHelp);
            }
            return map_key_to_message(key, self.input_context());
        }
        msg.downcast_ref::<WindowSizeMsg>()
            .map(|size| AppMsg::WindowResized {
                width: size.width,
                height: size.height,
            })
    }

    /// Pads or clips every row so the frame covers exactly the terminal.
    ///
    /// The last column stays empty so terminals never autowrap.
    fn fit_frame(&self, frame: &str) -> String {
        let columns = usize::from(self.width).saturating_sub(1).max(1);
        let rows = usize::from(self.height.max(1));

        let mut fitted = String::new();
        let mut body = frame.lines().take(rows);
        for _ in 0..rows {
            fitted.push_str(&fill_row(body.next().unwrap_or(""), columns));
            fitted.push('\n');
        }
        fitted
    }
}

fn fill_row(row: &str, columns: usize) -> String {
    let mut filled = String::with_capacity(columns);
    let mut used = 0_usize;

    for ch in row.chars() {
        let cell = ch.width().unwrap_or(0);
        if used.saturating_add(cell) > columns {
            break;
        }
        filled.push(ch);
        used = used.saturating_add(cell);
    }

    filled.extend(std::iter::repeat_n(' ', columns.saturating_sub(used)));
    filled
}
