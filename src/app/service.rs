//! Application service: the hexagonal core.
//!
//! [`PanelService`] owns the screen FSM, the gesture decoder and the one
//! authoritative [`UiState`].  It is the single serialized handler: every
//! input event and timer expiry goes through [`PanelService::handle_event`]
//! on one context, one at a time, in arrival order.  All I/O flows through
//! port traits injected at call sites, making the service testable with
//! mock adapters.
//!
//! ```text
//!  Event queue ──▶ ┌──────────────────────────────┐ ──▶ FanPort
//!                  │         PanelService         │ ──▶ DisplayPort
//!  TimerPort  ◀──  │  GestureDecoder · FSM · View │ ──▶ EventSink
//!                  └──────────────────────────────┘ ◀─▶ SettingsPort
//! ```

use log::{info, warn};

use crate::config::PanelConfig;
use crate::events::Event;
use crate::fsm::context::{UiContext, UiState};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, Intent, ScreenId};
use crate::gesture::GestureDecoder;
use crate::view::View;

use super::events::{AppEvent, SettingKey};
use super::ports::{
    DisplayPort, EventSink, FanPort, SettingsPort, StorageError, TimerId, TimerPort, TimerToken,
};

/// The boot timer is scheduled exactly once, so one generation suffices.
const BOOT_TOKEN: TimerToken = TimerToken::new(TimerId::Boot, 0);

// ───────────────────────────────────────────────────────────────
// PanelService
// ───────────────────────────────────────────────────────────────

/// The panel service orchestrates all domain logic.
pub struct PanelService {
    fsm: Fsm,
    ctx: UiContext,
    gestures: GestureDecoder,
    events_handled: u64,
}

impl PanelService {
    /// Construct the service from configuration.
    ///
    /// A config that fails [`PanelConfig::validate`] is replaced by the
    /// defaults.  Does **not** start the FSM; call [`start`](Self::start)
    /// next.
    pub fn new(config: PanelConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Panel config rejected ({}), using defaults", e);
                PanelConfig::default()
            }
        };
        let gestures = GestureDecoder::new(&config);
        let ctx = UiContext::new(config);
        let fsm = Fsm::new(build_state_table(), ScreenId::Boot);

        Self {
            fsm,
            ctx,
            gestures,
            events_handled: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Load persisted settings, show the boot screen, arm the boot timer
    /// and drive the fan at its default speed.
    pub fn start(
        &mut self,
        hw: &mut (impl TimerPort + FanPort + DisplayPort),
        store: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) {
        if let Some(language) = store.load_language() {
            self.ctx.state.language = language;
        }
        if let Some(name) = store.load_owner_name() {
            self.ctx.state.owner_name = name;
        }

        self.fsm.start(&mut self.ctx);
        hw.schedule_once(BOOT_TOKEN, self.ctx.config.boot_splash_ms);

        // Fan speed is not persisted: every boot starts at the default.
        self.ctx.effects.fan_duty = Some(self.ctx.state.fan_percent);

        sink.emit(&AppEvent::Started(self.fsm.current_screen()));
        sink.emit(&AppEvent::LanguageApplied(self.ctx.state.language));
        self.apply_effects(hw, store, sink);

        info!(
            "PanelService started in {:?} (language {}, owner \"{}\")",
            self.fsm.current_screen(),
            self.ctx.state.language,
            self.ctx.state.owner_name
        );
    }

    // ── Event handling ────────────────────────────────────────

    /// Process one queued input or timer event.
    pub fn handle_event(
        &mut self,
        event: Event,
        hw: &mut (impl TimerPort + FanPort + DisplayPort),
        store: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) {
        self.events_handled += 1;

        match event {
            Event::Knob(dir) => self.handle_intent(Intent::KnobStep(dir), hw, store, sink),

            Event::PressUp => self.gestures.press_up(hw),

            Event::LongPressStart => {
                let gesture = self.gestures.long_press_start();
                sink.emit(&AppEvent::Gesture(gesture));
                self.handle_intent(gesture.into(), hw, store, sink);
            }

            Event::TimerFired(token) => match token.id {
                TimerId::Boot => self.handle_intent(Intent::BootElapsed, hw, store, sink),
                TimerId::ClickWindow => {
                    if let Some(gesture) = self.gestures.timer_fired(token) {
                        sink.emit(&AppEvent::Gesture(gesture));
                        self.handle_intent(gesture.into(), hw, store, sink);
                    }
                }
            },
        }
    }

    /// Hand one intent to the FSM and apply whatever it requested.
    pub fn handle_intent(
        &mut self,
        intent: Intent,
        hw: &mut (impl FanPort + DisplayPort),
        store: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) {
        if let Some((from, to)) = self.fsm.dispatch(intent, &mut self.ctx) {
            sink.emit(&AppEvent::ScreenChanged { from, to });
        }
        self.apply_effects(hw, store, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current screen.
    pub fn screen(&self) -> ScreenId {
        self.fsm.current_screen()
    }

    /// Read-only view of the UI state.
    pub fn state(&self) -> &UiState {
        &self.ctx.state
    }

    /// View of the current state, as the display would receive it.
    pub fn view(&self) -> View {
        View::from_state(&self.ctx.state)
    }

    pub fn gestures(&self) -> &GestureDecoder {
        &self.gestures
    }

    pub fn config(&self) -> &PanelConfig {
        &self.ctx.config
    }

    /// Total events processed since startup.
    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate FSM effects into port calls.
    fn apply_effects(
        &mut self,
        hw: &mut (impl FanPort + DisplayPort),
        store: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) {
        let fx = self.ctx.effects.take();

        if let Some(duty) = fx.fan_duty {
            hw.apply_duty(duty);
            sink.emit(&AppEvent::FanSpeedChanged(duty));
        }

        if fx.lock_changed {
            sink.emit(&AppEvent::LockChanged(self.ctx.state.locked));
        }

        if let Some(language) = fx.persist_language {
            sink.emit(&AppEvent::LanguageApplied(language));
            report_persist(SettingKey::Language, store.save_language(language), sink);
        }

        if fx.persist_owner {
            let result = store.save_owner_name(&self.ctx.state.owner_name);
            report_persist(SettingKey::Owner, result, sink);
        }

        if fx.repaint {
            hw.render(&View::from_state(&self.ctx.state));
        }
    }
}

/// Save failures are not fatal: log, report, keep the in-memory value.
fn report_persist(key: SettingKey, result: Result<(), StorageError>, sink: &mut impl EventSink) {
    match result {
        Ok(()) => {
            info!("{:?} saved", key);
            sink.emit(&AppEvent::SettingSaved(key));
        }
        Err(e) => {
            warn!("{:?} save failed: {} (keeping in-memory value)", key, e);
            sink.emit(&AppEvent::PersistFailed(key));
        }
    }
}
