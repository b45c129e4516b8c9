//! Port traits: the hexagonal boundary between the panel core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PanelService (domain)
//! ```
//!
//! Driven adapters (fan PWM, display, timers, settings storage, event
//! sinks) implement these traits.  The [`PanelService`](super::service::PanelService)
//! consumes them via generics, so the core never touches hardware directly.

use crate::model::{Language, OwnerName};
use crate::view::View;

// ───────────────────────────────────────────────────────────────
// Fan output port (driven adapter: domain → PWM)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the fan.
pub trait FanPort {
    /// Drive the fan at `percent` (0–100).  Implementations clamp
    /// anything above 100.
    fn apply_duty(&mut self, percent: u8);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → presentation)
// ───────────────────────────────────────────────────────────────

/// Presentation port.  One call shows the screen, sets every label,
/// the selection index and the overlay visibility described by `view`.
/// Calls are idempotent.
pub trait DisplayPort {
    fn render(&mut self, view: &View);
}

// ───────────────────────────────────────────────────────────────
// Timer port (driven adapter: domain → one-shot timers)
// ───────────────────────────────────────────────────────────────

/// The two one-shot timers the panel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TimerId {
    /// Boot splash → main screen.  Fires once, never rescheduled.
    Boot = 0,
    /// Click disambiguation window.
    ClickWindow = 1,
}

impl TimerId {
    pub const COUNT: usize = 2;
}

/// Identifies one scheduling of a timer.  The generation lets the
/// consumer discard an expiry that was already queued when the timer
/// was rescheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub id: TimerId,
    pub generation: u16,
}

impl TimerToken {
    pub const fn new(id: TimerId, generation: u16) -> Self {
        Self { id, generation }
    }
}

/// Scheduled-task handles.  Expiries come back to the core as
/// [`Event::TimerFired`](crate::events::Event::TimerFired) through the
/// same queue as input events, so ordering is preserved.
pub trait TimerPort {
    /// Arm `token.id` to fire once after `after_ms`, replacing any
    /// pending deadline for the same id.
    fn schedule_once(&mut self, token: TimerToken, after_ms: u32);

    /// Disarm `id`.  No-op if it is not pending.
    fn cancel(&mut self, id: TimerId);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Settings port (driven adapter: domain ↔ persisted settings)
// ───────────────────────────────────────────────────────────────

/// Typed access to the persisted user settings.
///
/// Loads never fail from the caller's point of view: a missing or
/// unreadable value is `None` and defaults apply.  Save errors are
/// reported so they can be logged, but in-memory state stays
/// authoritative for the session.
pub trait SettingsPort {
    fn load_language(&self) -> Option<Language>;

    fn load_owner_name(&self) -> Option<OwnerName>;

    fn save_language(&mut self, language: Language) -> Result<(), StorageError>;

    fn save_owner_name(&mut self, name: &OwnerName) -> Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Storage port (driven adapter: domain ↔ NVS / flash)
// ───────────────────────────────────────────────────────────────

/// Persistent key-value storage.
///
/// - Keys are namespaced to prevent collisions between subsystems.
/// - Write operations MUST be atomic, with no partial writes on power loss.
///   The ESP-IDF NVS API guarantees this natively; in-memory simulation
///   achieves it trivially.
pub trait StoragePort {
    /// Read a value.  Returns the number of bytes written to `buf`.
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a value atomically.
    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Delete a key.  Returns `Ok(())` even if the key didn't exist.
    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError>;

    /// Check whether a key exists without reading it.
    fn exists(&self, namespace: &str, key: &str) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

/// Errors from [`StoragePort`] and [`SettingsPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Requested key does not exist.
    NotFound,
    /// Storage partition is full.
    Full,
    /// Generic I/O error.
    IoError,
    /// Stored value could not be encoded or decoded.
    Corrupted,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "key not found"),
            Self::Full => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
            Self::Corrupted => write!(f, "value corrupted"),
        }
    }
}
