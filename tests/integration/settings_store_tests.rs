//! Settings persistence through the real NVS-backed store.

use fanpanel::adapters::nvs::NvsAdapter;
use fanpanel::app::ports::{SettingsPort, StoragePort};
use fanpanel::app::settings::{LANGUAGE_KEY, OWNER_KEY, SETTINGS_NAMESPACE, SettingsStore};
use fanpanel::config::PanelConfig;
use fanpanel::fsm::ScreenId;
use fanpanel::gesture::KnobDirection::Clockwise as Cw;
use fanpanel::model::{Language, OwnerName};

use crate::mock_hw::Harness;

fn nvs_store() -> SettingsStore<NvsAdapter> {
    SettingsStore::new(NvsAdapter::new().expect("simulation NVS"))
}

#[test]
fn language_survives_restart() {
    let mut h = Harness::with_settings(PanelConfig::default(), nvs_store());
    h.finish_boot();
    h.triple_click();
    h.click();
    h.knob(Cw, 5);
    h.click();
    assert_eq!(h.service.state().language, Language::German);
    assert!(h.settings.storage().exists(SETTINGS_NAMESPACE, LANGUAGE_KEY));

    // Same storage, fresh service: the committed language is loaded.
    let restarted = Harness::with_settings(PanelConfig::default(), h.settings);
    assert_eq!(restarted.service.state().language, Language::German);
    assert_eq!(restarted.service.screen(), ScreenId::Boot);
    assert_eq!(restarted.service.state().fan_percent, 65);
}

#[test]
fn owner_round_trip_up_to_capacity() {
    let mut store = nvs_store();
    for text in ["", "A", "Ada Lovelace", "ABCDEFGHIJKLMNOP"] {
        let (name, truncated) = OwnerName::from_str_truncating(text);
        assert!(!truncated);
        store.save_owner_name(&name).unwrap();
        assert_eq!(store.load_owner_name(), Some(name));
    }
}

#[test]
fn unknown_language_tag_falls_back_to_default() {
    let mut store = nvs_store();
    store
        .storage_mut()
        .write(SETTINGS_NAMESPACE, LANGUAGE_KEY, &[Language::COUNT as u8])
        .unwrap();
    assert_eq!(store.load_language(), None);

    let h = Harness::with_settings(PanelConfig::default(), store);
    assert_eq!(h.service.state().language, Language::English);
}

#[test]
fn garbage_owner_falls_back_to_empty() {
    let mut store = nvs_store();
    store
        .storage_mut()
        .write(SETTINGS_NAMESPACE, OWNER_KEY, &[0x05, 0xFF, 0xFE])
        .unwrap();
    assert_eq!(store.load_owner_name(), None);

    let h = Harness::with_settings(PanelConfig::default(), store);
    assert!(h.service.state().owner_name.is_empty());
}
