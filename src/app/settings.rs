//! Typed settings over a [`StoragePort`].
//!
//! | Key        | Value                              |
//! |------------|------------------------------------|
//! | `language` | postcard-encoded [`Language`]      |
//! | `owner`    | postcard-encoded UTF-8 string      |
//!
//! Both live in the `panel` namespace.  Missing or undecodable values
//! load as `None`; the caller falls back to defaults.

use log::{info, warn};

use super::ports::{SettingsPort, StorageError, StoragePort};
use crate::model::{Language, OWNER_NAME_CAPACITY, OwnerName};

pub const SETTINGS_NAMESPACE: &str = "panel";
pub const LANGUAGE_KEY: &str = "language";
pub const OWNER_KEY: &str = "owner";

/// Enum tag, varint encoded.
const LANGUAGE_BUF: usize = 8;
/// Length prefix plus up to 4 UTF-8 bytes per character, with room to
/// read back (and truncate) an over-long legacy value.
const OWNER_BUF: usize = 2 + OWNER_NAME_CAPACITY * 4 * 2;

/// [`SettingsPort`] implementation on top of any key-value store.
pub struct SettingsStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn read_value<'b>(&self, key: &str, buf: &'b mut [u8]) -> Option<&'b [u8]> {
        match self.storage.read(SETTINGS_NAMESPACE, key, buf) {
            Ok(len) => Some(&buf[..len]),
            Err(StorageError::NotFound) => {
                info!("Settings: no stored {}, using default", key);
                None
            }
            Err(e) => {
                warn!("Settings: reading {} failed ({}), using default", key, e);
                None
            }
        }
    }
}

impl<S: StoragePort> SettingsPort for SettingsStore<S> {
    fn load_language(&self) -> Option<Language> {
        let mut buf = [0u8; LANGUAGE_BUF];
        let bytes = self.read_value(LANGUAGE_KEY, &mut buf)?;
        match postcard::from_bytes::<Language>(bytes) {
            Ok(language) => Some(language),
            Err(_) => {
                warn!("Settings: stored language is corrupted, using default");
                None
            }
        }
    }

    fn load_owner_name(&self) -> Option<OwnerName> {
        let mut buf = [0u8; OWNER_BUF];
        let bytes = self.read_value(OWNER_KEY, &mut buf)?;
        let text = match postcard::from_bytes::<&str>(bytes) {
            Ok(text) => text,
            Err(_) => {
                warn!("Settings: stored owner name is corrupted, using default");
                return None;
            }
        };
        let (name, truncated) = OwnerName::from_str_truncating(text);
        if truncated {
            warn!(
                "Settings: stored owner name longer than {} chars, truncated",
                OWNER_NAME_CAPACITY
            );
        }
        Some(name)
    }

    fn save_language(&mut self, language: Language) -> Result<(), StorageError> {
        let mut buf = [0u8; LANGUAGE_BUF];
        let encoded =
            postcard::to_slice(&language, &mut buf).map_err(|_| StorageError::Corrupted)?;
        self.storage
            .write(SETTINGS_NAMESPACE, LANGUAGE_KEY, encoded)
    }

    fn save_owner_name(&mut self, name: &OwnerName) -> Result<(), StorageError> {
        let text = name.to_string();
        let mut buf = [0u8; OWNER_BUF];
        let encoded =
            postcard::to_slice(text.as_str(), &mut buf).map_err(|_| StorageError::Corrupted)?;
        self.storage.write(SETTINGS_NAMESPACE, OWNER_KEY, encoded)
    }
}
