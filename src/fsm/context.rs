//! Shared mutable context threaded through every screen handler.
//!
//! `UiContext` is the single struct that screen handlers read from and
//! write to: the UI state itself, the side effects requested by the last
//! intent, and the configuration.  Think of it as the "blackboard" in a
//! blackboard architecture.  Handlers never call ports; the service
//! drains [`UiEffects`] after each dispatch and applies them.

use crate::config::PanelConfig;
use crate::model::{Language, OwnerName};

use super::ScreenId;

/// Number of entries on the settings menu (Language, Owner).
pub const SETTINGS_ENTRIES: usize = 2;

// ---------------------------------------------------------------------------
// UI state (the single authoritative copy)
// ---------------------------------------------------------------------------

/// Everything the panel shows or remembers at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Active screen.  Mirrors the FSM's current state.
    pub screen: ScreenId,
    /// Main-screen lock: blocks knob fan adjustment.
    pub locked: bool,
    /// Fan speed, always within the configured min..=max.
    pub fan_percent: u8,
    /// Settings menu cursor, `0..SETTINGS_ENTRIES`.
    pub settings_cursor: usize,
    /// Committed display language.
    pub language: Language,
    /// Language roller position while the Language screen is open.
    pub language_roller: usize,
    /// Committed owner name.
    pub owner_name: OwnerName,
    /// Working copy edited on the Owner screen.
    pub owner_draft: OwnerName,
    /// Owner character-roller position.
    pub owner_roller: usize,
}

impl UiState {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            screen: ScreenId::Boot,
            locked: false,
            fan_percent: config.fan_default_percent,
            settings_cursor: 0,
            language: Language::default(),
            language_roller: 0,
            owner_name: OwnerName::new(),
            owner_draft: OwnerName::new(),
            owner_roller: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Side effects (written by handlers; consumed by PanelService)
// ---------------------------------------------------------------------------

/// Effects that handlers request.  The service applies them to the ports
/// after the dispatch returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiEffects {
    /// New fan duty to push to the fan output.
    pub fan_duty: Option<u8>,
    /// The lock flag flipped.
    pub lock_changed: bool,
    /// Language committed; persist it.
    pub persist_language: Option<Language>,
    /// Owner name committed; persist it.
    pub persist_owner: bool,
    /// Visible state changed; render a fresh view.
    pub repaint: bool,
}

impl UiEffects {
    /// Drain all pending effects, leaving none behind.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// UiContext
// ---------------------------------------------------------------------------

/// The shared context passed to every screen handler.
pub struct UiContext {
    pub state: UiState,
    pub effects: UiEffects,
    pub config: PanelConfig,
}

impl UiContext {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            state: UiState::new(&config),
            effects: UiEffects::default(),
            config,
        }
    }

    /// Move the fan speed by `delta`, clamped to the configured range.
    /// Returns `true` if the speed actually changed.
    pub fn step_fan(&mut self, delta: i8) -> bool {
        let min = i16::from(self.config.fan_min_percent);
        let max = i16::from(self.config.fan_max_percent);
        let next = (i16::from(self.state.fan_percent) + i16::from(delta)).clamp(min, max) as u8;
        if next == self.state.fan_percent {
            return false;
        }
        self.state.fan_percent = next;
        self.effects.fan_duty = Some(next);
        true
    }
}

/// Move a roller/cursor index by `delta`, wrapping in both directions.
pub fn wrap_index(index: usize, delta: i8, len: usize) -> usize {
    debug_assert!(len > 0);
    let len = len as i64;
    (index as i64 + i64::from(delta)).rem_euclid(len) as usize
}
