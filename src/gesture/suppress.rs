//! Long-press suppressor.
//!
//! The press-up that ends a long press must not count as a click.  The
//! flag is armed at long-press-start and consumed by exactly one press-up.

#[derive(Debug, Default)]
pub struct LongPressSuppressor {
    suppress_next: bool,
}

impl LongPressSuppressor {
    pub const fn new() -> Self {
        Self {
            suppress_next: false,
        }
    }

    /// Long press detected: swallow the coming press-up.
    pub fn arm(&mut self) {
        self.suppress_next = true;
    }

    /// Returns `true` if this press-up ends a long press and must be
    /// dropped.  Clears the flag either way.
    pub fn absorb_press_up(&mut self) -> bool {
        core::mem::replace(&mut self.suppress_next, false)
    }

    pub fn is_armed(&self) -> bool {
        self.suppress_next
    }
}
