//! Fuzz target: stored settings decoding
//!
//! Writes arbitrary bytes under the `language` and `owner` keys and loads
//! them back through `SettingsStore`, verifying:
//! - No panics under arbitrary stored bytes
//! - A loaded owner name never exceeds 16 characters
//! - Whatever loads can be saved and loads back identically
//!
//! cargo fuzz run fuzz_settings_decode

#![no_main]

use fanpanel::adapters::nvs::NvsAdapter;
use fanpanel::app::ports::{SettingsPort, StoragePort};
use fanpanel::app::settings::{LANGUAGE_KEY, OWNER_KEY, SETTINGS_NAMESPACE, SettingsStore};
use fanpanel::model::OWNER_NAME_CAPACITY;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(nvs) = NvsAdapter::new() else {
        return;
    };
    let mut store = SettingsStore::new(nvs);

    let split = data.first().map_or(0, |b| *b as usize).min(data.len());
    let (lang_bytes, owner_bytes) = data.split_at(split);

    let _ = store
        .storage_mut()
        .write(SETTINGS_NAMESPACE, LANGUAGE_KEY, lang_bytes);
    let _ = store
        .storage_mut()
        .write(SETTINGS_NAMESPACE, OWNER_KEY, owner_bytes);

    if let Some(language) = store.load_language() {
        store.save_language(language).unwrap();
        assert_eq!(store.load_language(), Some(language));
    }

    if let Some(name) = store.load_owner_name() {
        assert!(name.len() <= OWNER_NAME_CAPACITY);
        store.save_owner_name(&name).unwrap();
        assert_eq!(store.load_owner_name(), Some(name));
    }
});
