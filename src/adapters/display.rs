//! Console presentation adapter.
//!
//! Implements [`DisplayPort`] by rendering each [`View`] as a text frame
//! on the serial log.  A panel driver would implement the same trait and
//! map the view onto its widgets.  Identical consecutive views are
//! skipped, so repeated renders are harmless.

use core::fmt::Write;

use log::info;

use crate::app::ports::DisplayPort;
use crate::view::{View, ViewBody};

#[derive(Default)]
pub struct ConsoleDisplay {
    last: Option<View>,
    frames: u32,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames actually drawn (duplicates excluded).
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn last_view(&self) -> Option<&View> {
        self.last.as_ref()
    }
}

/// One-line text rendering of a view.
pub fn format_view(view: &View) -> String {
    let mut out = String::new();
    let _ = write!(out, "[{:?}] {}", view.screen, view.title);

    match &view.body {
        ViewBody::Splash => {}
        ViewBody::Main {
            fan_caption,
            fan_percent,
        } => {
            let _ = write!(out, " | {} {}%", fan_caption, fan_percent);
        }
        ViewBody::Settings { entries, selected } => {
            for (i, entry) in entries.iter().enumerate() {
                let mark = if i == *selected { '>' } else { ' ' };
                let _ = write!(out, " | {}{}", mark, entry);
            }
        }
        ViewBody::Language { selected } => {
            let _ = write!(out, " | < {} >", selected.native_name());
        }
        ViewBody::Owner {
            name,
            selected,
            hint,
        } => {
            let _ = write!(out, " | \"{}\" < {} > ({})", name, selected, hint);
        }
    }

    if let Some(overlay) = view.overlay {
        let _ = write!(out, " [{}]", overlay);
    }
    out
}

impl DisplayPort for ConsoleDisplay {
    fn render(&mut self, view: &View) {
        if self.last.as_ref() == Some(view) {
            return;
        }
        info!("UI | {}", format_view(view));
        self.frames += 1;
        self.last = Some(view.clone());
    }
}
