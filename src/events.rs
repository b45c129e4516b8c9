//! Input event queue: the single serialization point.
//!
//! Events are produced by:
//! - The input poll (knob detents, button release, long-press start)
//! - Software timers (boot splash, click window)
//!
//! Events are consumed by the main loop, which hands them one at a time,
//! in FIFO order, to [`PanelService::handle_event`](crate::app::service::PanelService::handle_event).
//! No handler ever runs concurrently with another.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Knob poll   │────▶│              │     │              │
//! │ Button poll │────▶│  Event Queue │────▶│  Main Loop   │
//! │ Soft timers │────▶│  (channel)   │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use crate::app::ports::TimerToken;
use crate::gesture::KnobDirection;

/// Maximum number of pending events.
pub const EVENT_QUEUE_CAP: usize = 32;

/// Raw inputs to the panel core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One knob detent.
    Knob(KnobDirection),
    /// Debounced button release.
    PressUp,
    /// Button held past the long-press threshold.
    LongPressStart,
    /// A one-shot software timer expired.
    TimerFired(TimerToken),
}

/// Bounded multi-producer FIFO backed by an embassy channel.
pub struct EventQueue {
    channel: Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_CAP>,
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Enqueue an event.  Returns `false` if the queue is full (event dropped).
    pub fn push(&self, event: Event) -> bool {
        match self.channel.try_send(event) {
            Ok(()) => true,
            Err(_) => {
                warn!("Event queue full, dropping {:?}", event);
                false
            }
        }
    }

    pub fn pop(&self) -> Option<Event> {
        self.channel.try_receive().ok()
    }

    /// Drain all pending events into a callback, in FIFO order.
    ///
    /// Events pushed by the callback itself are drained in the same pass.
    pub fn drain(&self, mut handler: impl FnMut(Event)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide queue shared by the input poll and timer sources.
pub static EVENTS: EventQueue = EventQueue::new();
