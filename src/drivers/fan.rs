//! Fan PWM driver.
//!
//! 25 kHz LEDC PWM on GPIO18.  The panel core decides *what* speed to
//! run; this driver is a dumb actuator that clamps to 0–100 % and writes
//! the duty cycle.
//!
//! ## Dual-target design
//!
//! Generic over embedded-hal's [`SetDutyCycle`]: on ESP-IDF this is an
//! `LedcDriver`, on host/test any fake channel.

use embedded_hal::pwm::SetDutyCycle;
use log::{debug, warn};

use crate::app::ports::FanPort;
use crate::error::{OutputError, Result};

pub struct FanDriver<P: SetDutyCycle> {
    pwm: P,
    duty: u8,
}

impl<P: SetDutyCycle> FanDriver<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm, duty: 0 }
    }

    /// Write `percent` (clamped to 100) to the PWM channel.
    pub fn set_duty(&mut self, percent: u8) -> Result<()> {
        let percent = percent.min(100);
        self.pwm
            .set_duty_cycle_percent(percent)
            .map_err(|_| OutputError::PwmWriteFailed)?;
        self.duty = percent;
        debug!("Fan duty {}%", percent);
        Ok(())
    }

    /// Last duty successfully written.
    pub fn current_duty(&self) -> u8 {
        self.duty
    }
}

impl<P: SetDutyCycle> FanPort for FanDriver<P> {
    fn apply_duty(&mut self, percent: u8) {
        if let Err(e) = self.set_duty(percent) {
            warn!("Fan: {} (keeping {}%)", e, self.duty);
        }
    }
}
