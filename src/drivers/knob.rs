//! Quadrature rotary encoder (knob) driver.
//!
//! Channels A (GPIO6) and B (GPIO5) are sampled every input-poll tick and
//! run through a 16-entry transition table.  Invalid transitions (both
//! channels changing at once) contribute nothing.  One detent is
//! `transitions_per_step` valid transitions in the same direction.

use embedded_hal::digital::InputPin;
use log::debug;

use crate::error::{InputError, Result};
use crate::gesture::KnobDirection;

/// Indexed by `prev_state << 2 | curr_state`, where a state is `A << 1 | B`.
const TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Pure quadrature decoder.  Feed it channel levels.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    prev: u8,
    accum: i8,
    per_step: i8,
    count: i32,
}

impl QuadratureDecoder {
    pub fn new(transitions_per_step: u8) -> Self {
        Self {
            prev: 0,
            accum: 0,
            per_step: transitions_per_step.clamp(1, 4) as i8,
            count: 0,
        }
    }

    /// Seed the previous state so the first sample is not a phantom move.
    pub fn reset(&mut self, a: bool, b: bool) {
        self.prev = state_of(a, b);
        self.accum = 0;
    }

    pub fn sample(&mut self, a: bool, b: bool) -> Option<KnobDirection> {
        let curr = state_of(a, b);
        let idx = ((self.prev << 2) | curr) as usize;
        self.prev = curr;

        self.accum += TRANSITIONS[idx];
        if self.accum >= self.per_step {
            self.accum = 0;
            self.count += 1;
            Some(KnobDirection::Clockwise)
        } else if self.accum <= -self.per_step {
            self.accum = 0;
            self.count -= 1;
            Some(KnobDirection::CounterClockwise)
        } else {
            None
        }
    }

    /// Net detents since construction.
    pub fn count(&self) -> i32 {
        self.count
    }
}

fn state_of(a: bool, b: bool) -> u8 {
    (u8::from(a) << 1) | u8::from(b)
}

/// Knob on two embedded-hal input pins.
pub struct KnobDriver<A: InputPin, B: InputPin> {
    pin_a: A,
    pin_b: B,
    decoder: QuadratureDecoder,
}

impl<A: InputPin, B: InputPin> KnobDriver<A, B> {
    pub fn new(mut pin_a: A, mut pin_b: B, transitions_per_step: u8) -> Result<Self> {
        let mut decoder = QuadratureDecoder::new(transitions_per_step);
        let a = pin_a.is_high().map_err(|_| InputError::EncoderRead)?;
        let b = pin_b.is_high().map_err(|_| InputError::EncoderRead)?;
        decoder.reset(a, b);
        Ok(Self {
            pin_a,
            pin_b,
            decoder,
        })
    }

    /// Sample both channels; returns a direction on each completed detent.
    pub fn tick(&mut self) -> Result<Option<KnobDirection>> {
        let a = self.pin_a.is_high().map_err(|_| InputError::EncoderRead)?;
        let b = self.pin_b.is_high().map_err(|_| InputError::EncoderRead)?;
        let step = self.decoder.sample(a, b);
        if let Some(dir) = step {
            debug!("knob event {:?}, {}", dir, self.decoder.count());
        }
        Ok(step)
    }
}
