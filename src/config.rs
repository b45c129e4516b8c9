//! Panel configuration parameters
//!
//! All tunable parameters for the FanPanel HMI: fan range, gesture timing,
//! input sampling.  Fan speed itself is runtime state and is not part of
//! the persisted configuration.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Core panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    // --- Fan ---
    /// Lowest fan speed reachable from the knob (0-100%)
    pub fan_min_percent: u8,
    /// Highest fan speed reachable from the knob (0-100%)
    pub fan_max_percent: u8,
    /// Fan speed applied at every boot (0-100%)
    pub fan_default_percent: u8,
    /// Fan PWM carrier frequency (Hz)
    pub fan_pwm_frequency_hz: u32,

    // --- Gestures ---
    /// Click disambiguation window (milliseconds)
    pub click_window_ms: u32,
    /// Restart the window on every press-up (`false` = window runs from the first press-up)
    pub click_window_restarts: bool,
    /// Hold time before a press becomes a long press (milliseconds)
    pub long_press_ms: u32,
    /// Button debounce interval (milliseconds)
    pub debounce_ms: u32,

    // --- Timing ---
    /// Boot splash duration before the main screen (milliseconds)
    pub boot_splash_ms: u32,
    /// Main loop input sampling period (milliseconds)
    pub input_poll_ms: u32,
    /// Valid encoder transitions per mechanical detent
    pub knob_transitions_per_step: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            // Fan
            fan_min_percent: 40,
            fan_max_percent: 80,
            fan_default_percent: 65,
            fan_pwm_frequency_hz: 25_000, // 4-wire PC fan standard

            // Gestures
            click_window_ms: 800,
            click_window_restarts: true,
            long_press_ms: 1500,
            debounce_ms: 20,

            // Timing
            boot_splash_ms: 2000,
            input_poll_ms: 5,
            knob_transitions_per_step: 4,
        }
    }
}

impl PanelConfig {
    /// Range-check every field.  Inconsistent values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fan_max_percent > 100 {
            return Err(ConfigError::ValidationFailed("fan_max_percent must be 0–100"));
        }
        if self.fan_min_percent > self.fan_max_percent {
            return Err(ConfigError::ValidationFailed(
                "fan_min_percent must be <= fan_max_percent",
            ));
        }
        if !(self.fan_min_percent..=self.fan_max_percent).contains(&self.fan_default_percent) {
            return Err(ConfigError::ValidationFailed(
                "fan_default_percent must lie within fan_min_percent..=fan_max_percent",
            ));
        }
        if !(1_000..=40_000).contains(&self.fan_pwm_frequency_hz) {
            return Err(ConfigError::ValidationFailed(
                "fan_pwm_frequency_hz must be 1000–40000",
            ));
        }
        if !(100..=5000).contains(&self.click_window_ms) {
            return Err(ConfigError::ValidationFailed("click_window_ms must be 100–5000"));
        }
        if self.long_press_ms <= self.debounce_ms {
            return Err(ConfigError::ValidationFailed(
                "long_press_ms must be > debounce_ms",
            ));
        }
        if self.debounce_ms < self.input_poll_ms {
            return Err(ConfigError::ValidationFailed(
                "debounce_ms must be >= input_poll_ms",
            ));
        }
        if self.boot_splash_ms == 0 {
            return Err(ConfigError::ValidationFailed("boot_splash_ms must be > 0"));
        }
        if !(1..=50).contains(&self.input_poll_ms) {
            return Err(ConfigError::ValidationFailed("input_poll_ms must be 1–50"));
        }
        if !matches!(self.knob_transitions_per_step, 1 | 2 | 4) {
            return Err(ConfigError::ValidationFailed(
                "knob_transitions_per_step must be 1, 2 or 4",
            ));
        }
        Ok(())
    }
}
