//! Polled, debounced push-button driver.
//!
//! ## Hardware
//!
//! Active-low momentary switch on GPIO0 with the internal pull-up
//! enabled.  The main loop samples the pin every input-poll tick; the
//! debouncer turns raw levels into the two edges the panel core cares
//! about.
//!
//! ## Edge detection
//!
//! | Edge             | Condition                                   |
//! |------------------|---------------------------------------------|
//! | `LongPressStart` | Stable press held >= `long_press_ms`        |
//! | `PressUp`        | Stable release (including after a long press) |
//!
//! Click counting and long-press suppression live in
//! [`gesture`](crate::gesture), not here.

use embedded_hal::digital::InputPin;

use crate::config::PanelConfig;
use crate::error::{InputError, Result};

/// Debounced button edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    PressUp,
    LongPressStart,
}

/// Pure debounce + hold-time state machine.  Feed it raw levels.
#[derive(Debug, Clone)]
pub struct ButtonDebouncer {
    debounce_ms: u32,
    long_press_ms: u32,
    stable_pressed: bool,
    candidate: bool,
    candidate_since_ms: u32,
    pressed_since_ms: u32,
    long_fired: bool,
}

impl ButtonDebouncer {
    pub fn new(debounce_ms: u32, long_press_ms: u32) -> Self {
        Self {
            debounce_ms,
            long_press_ms,
            stable_pressed: false,
            candidate: false,
            candidate_since_ms: 0,
            pressed_since_ms: 0,
            long_fired: false,
        }
    }

    /// Feed one sample.  `now_ms` may wrap.
    pub fn sample(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEdge> {
        if pressed != self.candidate {
            self.candidate = pressed;
            self.candidate_since_ms = now_ms;
        }

        if self.candidate != self.stable_pressed
            && now_ms.wrapping_sub(self.candidate_since_ms) >= self.debounce_ms
        {
            self.stable_pressed = self.candidate;
            if self.stable_pressed {
                self.pressed_since_ms = now_ms;
                self.long_fired = false;
                return None;
            }
            return Some(ButtonEdge::PressUp);
        }

        if self.stable_pressed
            && !self.long_fired
            && now_ms.wrapping_sub(self.pressed_since_ms) >= self.long_press_ms
        {
            self.long_fired = true;
            return Some(ButtonEdge::LongPressStart);
        }

        None
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        self.stable_pressed
    }
}

/// Button on any embedded-hal input pin.
pub struct ButtonDriver<P: InputPin> {
    pin: P,
    active_low: bool,
    debouncer: ButtonDebouncer,
}

impl<P: InputPin> ButtonDriver<P> {
    pub fn new(pin: P, active_low: bool, config: &PanelConfig) -> Self {
        Self {
            pin,
            active_low,
            debouncer: ButtonDebouncer::new(config.debounce_ms, config.long_press_ms),
        }
    }

    /// Sample the pin.  Call from the main loop at each input-poll tick.
    pub fn tick(&mut self, now_ms: u32) -> Result<Option<ButtonEdge>> {
        let low = self.pin.is_low().map_err(|_| InputError::ButtonRead)?;
        let pressed = low == self.active_low;
        Ok(self.debouncer.sample(pressed, now_ms))
    }

    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }
}
