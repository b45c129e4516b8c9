//! Hardware adapter: bundles the output side behind the core's ports.
//!
//! [`PanelIo`] owns the fan output, the display and the software timers
//! and exposes them through [`FanPort`], [`DisplayPort`] and
//! [`TimerPort`], which is the `hw` argument the
//! [`PanelService`](crate::app::service::PanelService) expects.  On
//! non-espidf targets the same adapter runs with fake fan channels.

use heapless::Vec;

use crate::app::ports::{
    DisplayPort, EventSink, FanPort, SettingsPort, TimerId, TimerPort, TimerToken,
};
use crate::app::service::PanelService;
use crate::drivers::soft_timer::SoftTimers;
use crate::events::{Event, EventQueue};
use crate::view::View;

/// Concrete adapter that combines the panel outputs behind port traits.
pub struct PanelIo<F: FanPort, D: DisplayPort> {
    fan: F,
    display: D,
    timers: SoftTimers,
}

impl<F: FanPort, D: DisplayPort> PanelIo<F, D> {
    pub fn new(fan: F, display: D) -> Self {
        Self {
            fan,
            display,
            timers: SoftTimers::new(),
        }
    }

    /// Sync the timer clock before anything is scheduled.
    pub fn set_now(&mut self, now_ms: u32) {
        self.timers.set_now(now_ms);
    }

    /// Advance the timer clock and collect expired timers.
    fn poll_timers(&mut self, now_ms: u32) -> Vec<TimerToken, { TimerId::COUNT }> {
        self.timers.poll(now_ms)
    }

    /// One pass of the panel loop at `now_ms`.
    ///
    /// Timers due by `now_ms` are queued ahead of the `inputs` sampled on
    /// the same pass, so a window that expires on this tick is decided
    /// before a press landing on it.  The queue is then drained into the
    /// service in order.
    pub fn run_once<S: SettingsPort, K: EventSink>(
        &mut self,
        now_ms: u32,
        inputs: &[Event],
        queue: &EventQueue,
        service: &mut PanelService,
        settings: &mut S,
        sink: &mut K,
    ) {
        for token in self.poll_timers(now_ms) {
            queue.push(Event::TimerFired(token));
        }
        for event in inputs {
            queue.push(*event);
        }
        queue.drain(|event| {
            service.handle_event(event, &mut *self, &mut *settings, &mut *sink)
        });
    }

    pub fn fan(&self) -> &F {
        &self.fan
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

// ── Port implementations ──────────────────────────────────────

impl<F: FanPort, D: DisplayPort> FanPort for PanelIo<F, D> {
    fn apply_duty(&mut self, percent: u8) {
        self.fan.apply_duty(percent);
    }
}

impl<F: FanPort, D: DisplayPort> DisplayPort for PanelIo<F, D> {
    fn render(&mut self, view: &View) {
        self.display.render(view);
    }
}

impl<F: FanPort, D: DisplayPort> TimerPort for PanelIo<F, D> {
    fn schedule_once(&mut self, token: TimerToken, after_ms: u32) {
        self.timers.schedule_once(token, after_ms);
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.cancel(id);
    }
}
