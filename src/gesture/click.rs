//! Click disambiguator.
//!
//! Counts press-ups inside a settle window and classifies the burst when
//! the window timer fires:
//!
//! | Press-ups in window | Gesture        |
//! |---------------------|----------------|
//! | 1                   | `SingleClick`  |
//! | 3                   | `TripleClick`  |
//! | 0, 2, 4+            | none (dropped) |
//!
//! The window is a [`TimerPort`] one-shot.  By default every press-up
//! restarts it, so N clicks spaced closer than the window read as N.

use log::debug;

use super::Gesture;
use crate::app::ports::{TimerId, TimerPort, TimerToken};

/// Map a closed burst to its gesture.
pub fn classify(count: u8) -> Option<Gesture> {
    match count {
        1 => Some(Gesture::SingleClick),
        3 => Some(Gesture::TripleClick),
        _ => None,
    }
}

pub struct ClickDisambiguator {
    count: u8,
    window_ms: u32,
    restart_each_press: bool,
    /// Generation of the window currently armed.
    generation: u16,
}

impl ClickDisambiguator {
    pub fn new(window_ms: u32, restart_each_press: bool) -> Self {
        Self {
            count: 0,
            window_ms,
            restart_each_press,
            generation: 0,
        }
    }

    /// Count one completed press.  Arms the window on the first press of
    /// a burst, and re-arms it on later presses when restarting is on.
    pub fn on_press_up(&mut self, timers: &mut impl TimerPort) {
        if self.count == 0 || self.restart_each_press {
            self.generation = self.generation.wrapping_add(1);
            timers.schedule_once(
                TimerToken::new(TimerId::ClickWindow, self.generation),
                self.window_ms,
            );
        }
        self.count = self.count.saturating_add(1);
    }

    /// Close the window.  Returns the classified gesture, or `None` for
    /// a stale token or a burst with no meaning.
    pub fn on_window_expired(&mut self, token: TimerToken) -> Option<Gesture> {
        if token.id != TimerId::ClickWindow || token.generation != self.generation {
            debug!(
                "click window: stale expiry gen={} (current {})",
                token.generation, self.generation
            );
            return None;
        }

        let count = core::mem::take(&mut self.count);
        let gesture = classify(count);
        if gesture.is_none() && count > 0 {
            debug!("click window: burst of {} ignored", count);
        }
        gesture
    }

    /// Press-ups counted in the open window.
    pub fn pending(&self) -> u8 {
        self.count
    }

    /// Generation of the most recently armed window.
    pub fn generation(&self) -> u16 {
        self.generation
    }
}
