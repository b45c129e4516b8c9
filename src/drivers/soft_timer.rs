//! One-shot software timers polled from the main loop.
//!
//! A fixed deadline table, one slot per [`TimerId`].  Expiries are not
//! delivered by callback: [`SoftTimers::poll`] returns them and the
//! caller pushes them onto the event queue, so they are serialized with
//! input events.
//!
//! Deadlines use wrapping `u32` millisecond arithmetic; any single delay
//! must stay below 2^31 ms.

use heapless::Vec;
use log::debug;

use crate::app::ports::{TimerId, TimerPort, TimerToken};

#[derive(Debug, Clone, Copy)]
struct Slot {
    token: TimerToken,
    deadline_ms: u32,
}

#[derive(Debug, Default)]
pub struct SoftTimers {
    slots: [Option<Slot>; TimerId::COUNT],
    now_ms: u32,
}

impl SoftTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock without collecting expiries.
    pub fn set_now(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
    }

    /// Advance the clock to `now_ms` and take every expired timer,
    /// earliest deadline first.
    pub fn poll(&mut self, now_ms: u32) -> Vec<TimerToken, { TimerId::COUNT }> {
        self.now_ms = now_ms;
        let mut due: Vec<Slot, { TimerId::COUNT }> = Vec::new();

        for slot in &mut self.slots {
            if let Some(s) = *slot {
                if is_due(s.deadline_ms, now_ms) {
                    *slot = None;
                    // Capacity equals the slot count.
                    let _ = due.push(s);
                }
            }
        }

        due.sort_unstable_by_key(|s| s.deadline_ms.wrapping_sub(now_ms) as i32);
        due.into_iter().map(|s| s.token).collect()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.slots[id as usize].is_some()
    }

    /// Milliseconds until `id` fires, if armed.
    pub fn remaining_ms(&self, id: TimerId) -> Option<u32> {
        self.slots[id as usize].map(|s| {
            if is_due(s.deadline_ms, self.now_ms) {
                0
            } else {
                s.deadline_ms.wrapping_sub(self.now_ms)
            }
        })
    }
}

fn is_due(deadline_ms: u32, now_ms: u32) -> bool {
    now_ms.wrapping_sub(deadline_ms) as i32 >= 0
}

impl TimerPort for SoftTimers {
    fn schedule_once(&mut self, token: TimerToken, after_ms: u32) {
        let deadline_ms = self.now_ms.wrapping_add(after_ms);
        debug!(
            "Timer {:?} gen {} armed for {} ms",
            token.id, token.generation, after_ms
        );
        self.slots[token.id as usize] = Some(Slot { token, deadline_ms });
    }

    fn cancel(&mut self, id: TimerId) {
        self.slots[id as usize] = None;
    }
}
