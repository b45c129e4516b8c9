//! Immutable view of the UI, built fresh from a [`UiState`] snapshot.
//!
//! Presentation adapters only ever see a [`View`]; they hold no widget
//! handles into the state machine and need no knowledge of navigation.

use crate::fsm::ScreenId;
use crate::fsm::context::{SETTINGS_ENTRIES, UiState};
use crate::i18n;
use crate::model::{Language, OwnerKey, OwnerName};

/// Per-screen content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Splash,
    Main {
        fan_caption: &'static str,
        fan_percent: u8,
    },
    Settings {
        entries: [&'static str; SETTINGS_ENTRIES],
        selected: usize,
    },
    Language {
        selected: Language,
    },
    Owner {
        name: OwnerName,
        selected: OwnerKey,
        hint: &'static str,
    },
}

/// Everything one repaint needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub screen: ScreenId,
    pub title: &'static str,
    /// Lock overlay caption, `Some` while the overlay is visible.
    pub overlay: Option<&'static str>,
    pub body: ViewBody,
}

impl View {
    pub fn from_state(state: &UiState) -> Self {
        let c = i18n::captions(state.language);

        let (title, body) = match state.screen {
            ScreenId::Boot => (c.splash, ViewBody::Splash),
            ScreenId::Main => (
                c.main_title,
                ViewBody::Main {
                    fan_caption: c.fan,
                    fan_percent: state.fan_percent,
                },
            ),
            ScreenId::Settings => (
                c.settings_title,
                ViewBody::Settings {
                    entries: [c.language_entry, c.owner_entry],
                    selected: state.settings_cursor,
                },
            ),
            ScreenId::Language => (
                c.language_entry,
                ViewBody::Language {
                    selected: Language::from_index(state.language_roller),
                },
            ),
            ScreenId::Owner => (
                c.owner_entry,
                ViewBody::Owner {
                    name: state.owner_draft.clone(),
                    selected: OwnerKey::from_index(state.owner_roller),
                    hint: c.owner_hint,
                },
            ),
        };

        let overlay = (state.screen == ScreenId::Main && state.locked).then_some(c.locked);

        Self {
            screen: state.screen,
            title,
            overlay,
            body,
        }
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_some()
    }

    /// Highlighted index on screens that have a selection.
    pub fn selection(&self) -> Option<usize> {
        match &self.body {
            ViewBody::Settings { selected, .. } => Some(*selected),
            ViewBody::Language { selected } => Some(selected.index()),
            ViewBody::Owner { selected, .. } => (0..OwnerKey::COUNT)
                .find(|i| OwnerKey::from_index(*i) == *selected),
            ViewBody::Splash | ViewBody::Main { .. } => None,
        }
    }
}
