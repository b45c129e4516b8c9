//! Fuzz target: panel event sequences
//!
//! Interprets the input as a stream of events (knob steps, press-ups,
//! long presses, timer expiries with arbitrary generations) and feeds it
//! through `PanelService`, verifying after every event:
//! - No panics
//! - `fan_percent` stays within 40..=80
//! - `settings_cursor` < 2, rollers in range
//! - Owner name and draft never exceed 16 characters
//!
//! cargo fuzz run fuzz_event_sequence

#![no_main]

use fanpanel::app::events::AppEvent;
use fanpanel::app::ports::{
    DisplayPort, EventSink, FanPort, SettingsPort, StorageError, TimerId, TimerPort, TimerToken,
};
use fanpanel::app::service::PanelService;
use fanpanel::config::PanelConfig;
use fanpanel::events::Event;
use fanpanel::gesture::KnobDirection;
use fanpanel::model::{Language, OWNER_NAME_CAPACITY, OwnerKey, OwnerName};
use fanpanel::view::View;
use libfuzzer_sys::fuzz_target;

// ── In-memory adapters for fuzz testing ───────────────────────

#[derive(Default)]
struct Io {
    armed: [Option<TimerToken>; TimerId::COUNT],
}

impl FanPort for Io {
    fn apply_duty(&mut self, percent: u8) {
        assert!((40..=80).contains(&percent));
    }
}

impl DisplayPort for Io {
    fn render(&mut self, _view: &View) {}
}

impl TimerPort for Io {
    fn schedule_once(&mut self, token: TimerToken, _after_ms: u32) {
        self.armed[token.id as usize] = Some(token);
    }
    fn cancel(&mut self, id: TimerId) {
        self.armed[id as usize] = None;
    }
}

#[derive(Default)]
struct Store {
    fail: bool,
}

impl SettingsPort for Store {
    fn load_language(&self) -> Option<Language> {
        None
    }
    fn load_owner_name(&self) -> Option<OwnerName> {
        None
    }
    fn save_language(&mut self, _language: Language) -> Result<(), StorageError> {
        if self.fail { Err(StorageError::IoError) } else { Ok(()) }
    }
    fn save_owner_name(&mut self, name: &OwnerName) -> Result<(), StorageError> {
        assert!(name.len() <= OWNER_NAME_CAPACITY);
        if self.fail { Err(StorageError::Full) } else { Ok(()) }
    }
}

struct Sink;

impl EventSink for Sink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut svc = PanelService::new(PanelConfig::default());
    let mut io = Io::default();
    let mut store = Store::default();
    svc.start(&mut io, &mut store, &mut Sink);

    for &byte in data {
        let event = match byte % 8 {
            0 => Event::Knob(KnobDirection::Clockwise),
            1 => Event::Knob(KnobDirection::CounterClockwise),
            2 | 3 => Event::PressUp,
            4 => Event::LongPressStart,
            // Expire whatever is armed (the "real" timer).
            5 => match io.armed.iter_mut().find_map(Option::take) {
                Some(token) => Event::TimerFired(token),
                None => continue,
            },
            // A stale or foreign expiry.
            6 => Event::TimerFired(TimerToken::new(TimerId::ClickWindow, u16::from(byte >> 3))),
            _ => {
                store.fail = !store.fail;
                continue;
            }
        };
        svc.handle_event(event, &mut io, &mut store, &mut Sink);

        let s = svc.state();
        assert!((40..=80).contains(&s.fan_percent));
        assert!(s.settings_cursor < 2);
        assert!(s.language_roller < Language::COUNT);
        assert!(s.owner_roller < OwnerKey::COUNT);
        assert!(s.owner_name.len() <= OWNER_NAME_CAPACITY);
        assert!(s.owner_draft.len() <= OWNER_NAME_CAPACITY);
        assert_eq!(s.screen, svc.screen());
    }
});
