//! Outbound application events.
//!
//! The [`PanelService`](super::service::PanelService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them (log to serial, forward to a host
//! tool, etc.)

use crate::fsm::ScreenId;
use crate::gesture::Gesture;
use crate::model::Language;

/// Which persisted setting an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Language,
    Owner,
}

/// Structured events emitted by the panel core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries the initial screen).
    Started(ScreenId),

    /// The FSM moved between screens.
    ScreenChanged { from: ScreenId, to: ScreenId },

    /// A button gesture was recognised.
    Gesture(Gesture),

    /// New fan duty pushed to the fan output.
    FanSpeedChanged(u8),

    /// Main-screen lock toggled (carries the new state).
    LockChanged(bool),

    /// A setting was written to persistent storage.
    SettingSaved(SettingKey),

    /// Persisting a setting failed; in-memory value stays in effect.
    PersistFailed(SettingKey),

    /// Language in effect after load or commit.
    LanguageApplied(Language),
}
