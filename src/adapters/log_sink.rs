//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink {
    emitted: u32,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events logged so far.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        self.emitted = self.emitted.wrapping_add(1);
        match event {
            AppEvent::Started(screen) => info!("START | screen={:?}", screen),
            AppEvent::ScreenChanged { from, to } => info!("SCREEN | {:?} -> {:?}", from, to),
            AppEvent::Gesture(g) => info!("GESTURE | {:?}", g),
            AppEvent::FanSpeedChanged(duty) => info!("FAN | {}%", duty),
            AppEvent::LockChanged(locked) => {
                info!("LOCK | {}", if *locked { "on" } else { "off" })
            }
            AppEvent::SettingSaved(key) => info!("NVS | {:?} saved", key),
            AppEvent::PersistFailed(key) => warn!("NVS | {:?} not saved", key),
            AppEvent::LanguageApplied(lang) => {
                info!("LANG | {} ({})", lang, lang.native_name())
            }
        }
    }
}
