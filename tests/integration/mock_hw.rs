//! Mock adapters and a loop harness for integration tests.
//!
//! The recording fan and display sit behind the real [`PanelIo`] and
//! [`SoftTimers`](fanpanel::drivers::soft_timer::SoftTimers).  Every tick
//! goes through [`PanelIo::run_once`], the same loop pass the firmware
//! runs, over a real [`EventQueue`] and a simulated millisecond clock.

use fanpanel::adapters::hardware::PanelIo;
use fanpanel::app::events::AppEvent;
use fanpanel::app::ports::{DisplayPort, EventSink, FanPort, SettingsPort, StorageError};
use fanpanel::app::service::PanelService;
use fanpanel::config::PanelConfig;
use fanpanel::events::{Event, EventQueue};
use fanpanel::fsm::ScreenId;
use fanpanel::gesture::{Gesture, KnobDirection};
use fanpanel::model::{Language, OwnerName};
use fanpanel::view::View;

/// Input poll period of the simulated loop.
pub const TICK_MS: u32 = 5;

// ── Recording fan ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingFan {
    pub duties: Vec<u8>,
}

impl FanPort for RecordingFan {
    fn apply_duty(&mut self, percent: u8) {
        self.duties.push(percent);
    }
}

// ── Recording display ─────────────────────────────────────────

#[derive(Default)]
pub struct RecordingDisplay {
    pub frames: Vec<View>,
}

impl DisplayPort for RecordingDisplay {
    fn render(&mut self, view: &View) {
        self.frames.push(view.clone());
    }
}

// ── Settings with failure injection ───────────────────────────

#[derive(Default)]
pub struct MockSettings {
    pub language: Option<Language>,
    pub owner: Option<OwnerName>,
    pub fail_saves: bool,
    pub language_saves: u32,
    pub owner_saves: u32,
}

impl SettingsPort for MockSettings {
    fn load_language(&self) -> Option<Language> {
        self.language
    }

    fn load_owner_name(&self) -> Option<OwnerName> {
        self.owner.clone()
    }

    fn save_language(&mut self, language: Language) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::IoError);
        }
        self.language = Some(language);
        self.language_saves += 1;
        Ok(())
    }

    fn save_owner_name(&mut self, name: &OwnerName) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::Full);
        }
        self.owner = Some(name.clone());
        self.owner_saves += 1;
        Ok(())
    }
}

// ── Recording sink ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Harness ───────────────────────────────────────────────────

pub struct Harness<S: SettingsPort = MockSettings> {
    pub service: PanelService,
    pub io: PanelIo<RecordingFan, RecordingDisplay>,
    pub settings: S,
    pub sink: RecordingSink,
    pub queue: EventQueue,
    pub now_ms: u32,
}

#[allow(dead_code)]
impl Harness<MockSettings> {
    pub fn new() -> Self {
        Self::with_settings(PanelConfig::default(), MockSettings::default())
    }
}

#[allow(dead_code)]
impl<S: SettingsPort> Harness<S> {
    /// Start the service (Boot screen, boot timer armed).
    pub fn with_settings(config: PanelConfig, mut settings: S) -> Self {
        let mut service = PanelService::new(config);
        let mut io = PanelIo::new(RecordingFan::default(), RecordingDisplay::default());
        let mut sink = RecordingSink::default();
        io.set_now(0);
        service.start(&mut io, &mut settings, &mut sink);
        Self {
            service,
            io,
            settings,
            sink,
            queue: EventQueue::new(),
            now_ms: 0,
        }
    }

    /// Start and run past the boot splash.
    pub fn booted() -> Self
    where
        S: Default,
    {
        let mut h = Self::with_settings(PanelConfig::default(), S::default());
        h.finish_boot();
        h
    }

    pub fn finish_boot(&mut self) {
        let splash = self.service.config().boot_splash_ms;
        self.advance(splash + TICK_MS);
        assert_eq!(self.service.screen(), ScreenId::Main);
    }

    /// One loop pass at the next tick, with `inputs` sampled on it.
    pub fn tick_with(&mut self, inputs: &[Event]) {
        self.now_ms += TICK_MS;
        self.io.run_once(
            self.now_ms,
            inputs,
            &self.queue,
            &mut self.service,
            &mut self.settings,
            &mut self.sink,
        );
    }

    pub fn push(&mut self, event: Event) {
        self.tick_with(&[event]);
    }

    /// Run the simulated loop for `ms` with no input.
    pub fn advance(&mut self, ms: u32) {
        let end = self.now_ms + ms;
        while self.now_ms < end {
            self.tick_with(&[]);
        }
    }

    pub fn knob(&mut self, dir: KnobDirection, steps: usize) {
        for _ in 0..steps {
            self.push(Event::Knob(dir));
            self.advance(TICK_MS);
        }
    }

    /// `n` quick clicks, then wait for the click window to close.
    pub fn clicks(&mut self, n: usize) {
        for _ in 0..n {
            self.push(Event::PressUp);
            self.advance(100);
        }
        self.settle();
    }

    pub fn click(&mut self) {
        self.clicks(1);
    }

    pub fn triple_click(&mut self) {
        self.clicks(3);
    }

    /// Hold past the threshold, then release.
    pub fn long_press(&mut self) {
        self.push(Event::LongPressStart);
        self.advance(200);
        self.push(Event::PressUp);
        self.settle();
    }

    /// Wait out any pending click window.
    pub fn settle(&mut self) {
        let window = self.service.config().click_window_ms;
        self.advance(window + 2 * TICK_MS);
    }

    pub fn gestures(&self) -> Vec<Gesture> {
        self.sink
            .events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Gesture(g) => Some(*g),
                _ => None,
            })
            .collect()
    }

    pub fn last_frame(&self) -> &View {
        self.io
            .display()
            .frames
            .last()
            .expect("at least the boot frame")
    }

    pub fn last_duty(&self) -> Option<u8> {
        self.io.fan().duties.last().copied()
    }
}
