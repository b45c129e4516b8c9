//! Gesture recognition: debounced button edges → unambiguous gestures.
//!
//! ```text
//!  PressUp ──▶ LongPressSuppressor ──▶ ClickDisambiguator ──(window)──▶ SingleClick / TripleClick
//!  LongPressStart ──▶ arm suppressor ─────────────────────────────────▶ LongPress
//! ```

pub mod click;
pub mod suppress;

use log::debug;

use crate::app::ports::{TimerId, TimerPort, TimerToken};
use crate::config::PanelConfig;
use click::ClickDisambiguator;
use suppress::LongPressSuppressor;

/// A classified button action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SingleClick,
    TripleClick,
    LongPress,
}

/// One detent of the rotary knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobDirection {
    /// Right, +1.
    Clockwise,
    /// Left, -1.
    CounterClockwise,
}

impl KnobDirection {
    pub fn delta(self) -> i8 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// Button edge pipeline: suppressor in front of the click counter.
pub struct GestureDecoder {
    click: ClickDisambiguator,
    suppressor: LongPressSuppressor,
}

impl GestureDecoder {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            click: ClickDisambiguator::new(config.click_window_ms, config.click_window_restarts),
            suppressor: LongPressSuppressor::new(),
        }
    }

    /// A press ended.  Either swallowed (it ends a long press) or
    /// counted toward the open click window.
    pub fn press_up(&mut self, timers: &mut impl TimerPort) {
        if self.suppressor.absorb_press_up() {
            debug!("press-up after long press suppressed");
            return;
        }
        self.click.on_press_up(timers);
    }

    /// The button has been held past the long-press threshold.  The click
    /// window, if open, is left to expire on its own.
    pub fn long_press_start(&mut self) -> Gesture {
        self.suppressor.arm();
        Gesture::LongPress
    }

    /// A timer fired.  Only click-window expiries produce gestures.
    pub fn timer_fired(&mut self, token: TimerToken) -> Option<Gesture> {
        match token.id {
            TimerId::ClickWindow => self.click.on_window_expired(token),
            TimerId::Boot => None,
        }
    }

    pub fn pending_clicks(&self) -> u8 {
        self.click.pending()
    }

    pub fn is_suppressing(&self) -> bool {
        self.suppressor.is_armed()
    }

    /// Token of the currently armed click window.
    pub fn click_window_token(&self) -> TimerToken {
        TimerToken::new(TimerId::ClickWindow, self.click.generation())
    }
}
