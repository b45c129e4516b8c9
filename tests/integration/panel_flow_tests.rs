//! Panel flow tests: full event-loop sequences through the service.

use fanpanel::app::events::{AppEvent, SettingKey};
use fanpanel::config::PanelConfig;
use fanpanel::events::Event;
use fanpanel::fsm::ScreenId;
use fanpanel::gesture::Gesture;
use fanpanel::gesture::KnobDirection::{Clockwise as Cw, CounterClockwise as Ccw};
use fanpanel::model::{Language, OWNER_NAME_CAPACITY, OwnerKey, OwnerName};
use fanpanel::view::ViewBody;

use crate::mock_hw::{Harness, MockSettings, TICK_MS};

// ── Boot ──────────────────────────────────────────────────────

#[test]
fn boot_shows_splash_then_main() {
    let mut h = Harness::new();
    assert_eq!(h.service.screen(), ScreenId::Boot);
    assert_eq!(h.last_frame().body, ViewBody::Splash);
    assert_eq!(h.last_duty(), Some(65));

    h.advance(1000);
    assert_eq!(h.service.screen(), ScreenId::Boot);

    h.advance(1005);
    assert_eq!(h.service.screen(), ScreenId::Main);
    assert_eq!(
        h.last_frame().body,
        ViewBody::Main {
            fan_caption: "Speed",
            fan_percent: 65
        }
    );
    assert_eq!(h.last_frame().overlay, None);
}

#[test]
fn input_during_boot_is_ignored() {
    let mut h = Harness::new();
    h.knob(Cw, 5);
    h.triple_click();
    assert_eq!(h.service.screen(), ScreenId::Boot);
    assert_eq!(h.service.state().fan_percent, 65);
    h.finish_boot();
    assert_eq!(h.service.state().fan_percent, 65);
}

#[test]
fn boot_timer_fires_only_once() {
    let mut h: Harness = Harness::booted();
    h.advance(10_000);
    let changes = h
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ScreenChanged { to: ScreenId::Main, .. }))
        .count();
    assert_eq!(changes, 1);
}

// ── Main: fan and lock ────────────────────────────────────────

#[test]
fn knob_clamps_fan_then_triple_click_opens_settings() {
    let mut h: Harness = Harness::booted();
    h.knob(Cw, 20);
    assert_eq!(h.service.state().fan_percent, 80);
    assert_eq!(h.last_duty(), Some(80));

    h.triple_click();
    assert_eq!(h.service.screen(), ScreenId::Settings);
    assert_eq!(h.service.state().settings_cursor, 0);
    assert_eq!(h.gestures(), vec![Gesture::TripleClick]);
}

#[test]
fn fan_duty_pushed_once_per_change() {
    let mut h: Harness = Harness::booted();
    h.knob(Ccw, 30);
    assert_eq!(h.service.state().fan_percent, 40);
    // Default at boot, then 64..=40: 25 distinct values.
    assert_eq!(h.io.fan().duties.len(), 1 + 25);
    assert!(h.io.fan().duties.iter().all(|d| (40..=80).contains(d)));
}

#[test]
fn single_click_toggles_lock_and_blocks_knob() {
    let mut h: Harness = Harness::booted();
    h.click();
    assert!(h.service.state().locked);
    assert_eq!(h.last_frame().overlay, Some("Locked"));
    assert!(h.sink.events.contains(&AppEvent::LockChanged(true)));

    h.knob(Cw, 5);
    assert_eq!(h.service.state().fan_percent, 65);

    h.click();
    assert!(!h.service.state().locked);
    assert_eq!(h.last_frame().overlay, None);
    h.knob(Cw, 5);
    assert_eq!(h.service.state().fan_percent, 70);
}

#[test]
fn lock_survives_settings_round_trip() {
    let mut h: Harness = Harness::booted();
    h.click();
    h.triple_click();
    assert_eq!(h.service.screen(), ScreenId::Settings);
    assert_eq!(h.last_frame().overlay, None);

    h.long_press();
    assert_eq!(h.service.screen(), ScreenId::Main);
    assert!(h.service.state().locked);
    assert_eq!(h.last_frame().overlay, Some("Locked"));
}

// ── Gestures ──────────────────────────────────────────────────

#[test]
fn double_and_quadruple_clicks_do_nothing() {
    let mut h: Harness = Harness::booted();
    h.clicks(2);
    h.clicks(4);
    h.clicks(5);
    assert!(h.gestures().is_empty());
    assert_eq!(h.service.screen(), ScreenId::Main);
    assert!(!h.service.state().locked);
}

#[test]
fn long_press_release_is_not_a_click() {
    let mut h: Harness = Harness::booted();
    h.triple_click();
    h.long_press();
    h.click();
    assert_eq!(
        h.gestures(),
        vec![Gesture::TripleClick, Gesture::LongPress, Gesture::SingleClick]
    );
    assert_eq!(h.service.screen(), ScreenId::Main);
    assert!(h.service.state().locked);
}

#[test]
fn long_press_on_main_is_harmless() {
    let mut h: Harness = Harness::booted();
    h.long_press();
    assert_eq!(h.service.screen(), ScreenId::Main);
    assert!(!h.service.state().locked);
    assert_eq!(h.gestures(), vec![Gesture::LongPress]);
}

#[test]
fn clicks_spread_past_the_window_are_separate_gestures() {
    let mut h: Harness = Harness::booted();
    h.push(Event::PressUp);
    h.advance(900);
    h.push(Event::PressUp);
    h.settle();
    assert_eq!(h.gestures(), vec![Gesture::SingleClick, Gesture::SingleClick]);
    assert!(!h.service.state().locked);
}

#[test]
fn press_on_the_expiry_tick_starts_a_new_burst() {
    for restarts in [true, false] {
        let config = PanelConfig {
            click_window_restarts: restarts,
            ..PanelConfig::default()
        };
        let mut h = Harness::with_settings(config, MockSettings::default());
        h.finish_boot();
        let window = h.service.config().click_window_ms;

        h.push(Event::PressUp);
        let first = h.now_ms;
        h.advance(window - TICK_MS);
        // Lands on the same tick the window expires.
        h.push(Event::PressUp);
        assert_eq!(h.now_ms - first, window);
        h.settle();

        assert_eq!(
            h.gestures(),
            vec![Gesture::SingleClick, Gesture::SingleClick],
            "restarts={restarts}"
        );
        assert!(!h.service.state().locked);
    }
}

#[test]
fn fixed_window_splits_slow_bursts() {
    let fixed = PanelConfig {
        click_window_restarts: false,
        ..PanelConfig::default()
    };
    let mut h = Harness::with_settings(fixed, MockSettings::default());
    h.finish_boot();
    let mut sliding: Harness = Harness::booted();

    // Three presses 500 ms apart.
    for _ in 0..3 {
        h.push(Event::PressUp);
        h.advance(500);
        sliding.push(Event::PressUp);
        sliding.advance(500);
    }
    h.settle();
    sliding.settle();

    // Fixed: the first window holds two presses (dropped), the third
    // press opens a new window alone.
    assert_eq!(h.gestures(), vec![Gesture::SingleClick]);
    assert!(h.service.state().locked);
    // Sliding: every press extends the window.
    assert_eq!(sliding.gestures(), vec![Gesture::TripleClick]);
    assert_eq!(sliding.service.screen(), ScreenId::Settings);
}

// ── Settings navigation ───────────────────────────────────────

#[test]
fn settings_cursor_wraps_both_ways() {
    let mut h: Harness = Harness::booted();
    h.triple_click();
    h.knob(Ccw, 1);
    assert_eq!(h.service.state().settings_cursor, 1);
    assert_eq!(
        h.last_frame().body,
        ViewBody::Settings {
            entries: ["Language", "Owner"],
            selected: 1
        }
    );
    h.knob(Cw, 1);
    assert_eq!(h.service.state().settings_cursor, 0);
}

#[test]
fn language_commit_persists_and_returns_to_settings() {
    let mut h: Harness = Harness::booted();
    h.triple_click();
    h.click();
    assert_eq!(h.service.screen(), ScreenId::Language);
    assert_eq!(h.service.state().language_roller, Language::English.index());

    h.knob(Cw, 2);
    h.click();
    assert_eq!(h.service.screen(), ScreenId::Settings);
    assert_eq!(h.service.state().language, Language::Japanese);
    assert_eq!(h.settings.language, Some(Language::Japanese));
    assert!(h.sink.events.contains(&AppEvent::SettingSaved(SettingKey::Language)));
    assert!(h.sink.events.contains(&AppEvent::LanguageApplied(Language::Japanese)));
}

#[test]
fn language_long_press_discards_selection() {
    let mut h: Harness = Harness::booted();
    h.triple_click();
    h.click();
    h.knob(Cw, 3);
    h.long_press();
    assert_eq!(h.service.screen(), ScreenId::Settings);
    assert_eq!(h.service.state().language, Language::English);
    assert_eq!(h.settings.language_saves, 0);
}

#[test]
fn captions_follow_committed_language() {
    let mut h: Harness = Harness::booted();
    h.triple_click();
    h.click();
    h.knob(Cw, Language::French.index());
    h.click();
    assert_eq!(h.last_frame().title, "Réglages");

    h.long_press();
    assert_eq!(h.service.screen(), ScreenId::Main);
    assert_eq!(h.last_frame().title, "Ventilateur");
}

#[test]
fn language_save_failure_is_not_fatal() {
    let settings = MockSettings {
        fail_saves: true,
        ..MockSettings::default()
    };
    let mut h = Harness::with_settings(PanelConfig::default(), settings);
    h.finish_boot();
    h.triple_click();
    h.click();
    h.knob(Ccw, 1);
    h.click();

    assert_eq!(h.service.screen(), ScreenId::Settings);
    assert_eq!(h.service.state().language, Language::Russian);
    assert_eq!(h.settings.language, None);
    assert!(h.sink.events.contains(&AppEvent::PersistFailed(SettingKey::Language)));
}

// ── Owner name editing ────────────────────────────────────────

/// Enter the Owner screen from a booted Main.
fn open_owner(h: &mut Harness) {
    h.triple_click();
    h.knob(Cw, 1);
    h.click();
    assert_eq!(h.service.screen(), ScreenId::Owner);
}

/// Move the roller from `A` (index 0) to `key` and click it.
fn pick(h: &mut Harness, index: usize) {
    let current = h.service.state().owner_roller;
    if index >= current {
        h.knob(Cw, index - current);
    } else {
        h.knob(Ccw, current - index);
    }
    h.click();
}

const SAVE: usize = OwnerKey::COUNT - 1;
const BACKSPACE: usize = OwnerKey::COUNT - 2;

#[test]
fn owner_type_and_save() {
    let mut h: Harness = Harness::booted();
    open_owner(&mut h);
    pick(&mut h, 'B' as usize - 'A' as usize);
    pick(&mut h, 'O' as usize - 'A' as usize);
    pick(&mut h, 'B' as usize - 'A' as usize);
    pick(&mut h, SAVE);

    assert_eq!(h.service.screen(), ScreenId::Settings);
    assert_eq!(h.service.state().owner_name.to_string(), "BOB");
    assert_eq!(h.settings.owner.as_ref().map(|n| n.to_string()).as_deref(), Some("BOB"));
    assert!(h.sink.events.contains(&AppEvent::SettingSaved(SettingKey::Owner)));
}

#[test]
fn backspace_on_empty_name_is_noop() {
    let mut h: Harness = Harness::booted();
    open_owner(&mut h);
    pick(&mut h, BACKSPACE);
    assert_eq!(h.service.screen(), ScreenId::Owner);
    assert!(h.service.state().owner_draft.is_empty());
}

#[test]
fn backspace_deletes_last_character() {
    let mut h: Harness = Harness::booted();
    open_owner(&mut h);
    pick(&mut h, 0);
    pick(&mut h, 1);
    pick(&mut h, BACKSPACE);
    assert_eq!(h.service.state().owner_draft.to_string(), "A");
}

#[test]
fn seventeenth_character_is_rejected() {
    let mut h: Harness = Harness::booted();
    open_owner(&mut h);
    for _ in 0..OWNER_NAME_CAPACITY + 1 {
        h.click();
    }
    assert_eq!(h.service.state().owner_draft.len(), OWNER_NAME_CAPACITY);
    pick(&mut h, SAVE);
    assert_eq!(h.settings.owner.as_ref().map(OwnerName::len), Some(OWNER_NAME_CAPACITY));
}

#[test]
fn owner_long_press_discards_edits() {
    let settings = MockSettings {
        owner: Some(OwnerName::from_str_truncating("Ann").0),
        ..MockSettings::default()
    };
    let mut h = Harness::with_settings(PanelConfig::default(), settings);
    h.finish_boot();

    open_owner(&mut h);
    match &h.last_frame().body {
        ViewBody::Owner { name, .. } => assert_eq!(name.to_string(), "Ann"),
        other => panic!("unexpected body {other:?}"),
    }
    pick(&mut h, 25);
    h.long_press();

    assert_eq!(h.service.screen(), ScreenId::Settings);
    assert_eq!(h.service.state().owner_name.to_string(), "Ann");
    assert_eq!(h.settings.owner_saves, 0);
}

#[test]
fn owner_save_failure_keeps_name_for_session() {
    let settings = MockSettings {
        fail_saves: true,
        ..MockSettings::default()
    };
    let mut h = Harness::with_settings(PanelConfig::default(), settings);
    h.finish_boot();
    open_owner(&mut h);
    pick(&mut h, 'Z' as usize - 'A' as usize);
    pick(&mut h, SAVE);

    assert_eq!(h.service.state().owner_name.to_string(), "Z");
    assert!(h.sink.events.contains(&AppEvent::PersistFailed(SettingKey::Owner)));
}

// ── Startup settings ──────────────────────────────────────────

#[test]
fn stored_settings_apply_at_start() {
    let settings = MockSettings {
        language: Some(Language::German),
        owner: Some(OwnerName::from_str_truncating("Kai").0),
        ..MockSettings::default()
    };
    let h = Harness::with_settings(PanelConfig::default(), settings);
    assert_eq!(h.service.state().language, Language::German);
    assert_eq!(h.service.state().owner_name.to_string(), "Kai");
    assert_eq!(h.service.state().fan_percent, 65);
    assert_eq!(h.sink.events[0], AppEvent::Started(ScreenId::Boot));
}
