//! FanPanel Firmware: Main Entry Point
//!
//! Hexagonal architecture with a single polled event loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  PanelIo            LogEventSink   SettingsStore  Esp32Time    │
//! │  (Fan+Display+Timer) (EventSink)   (NVS)          (uptime)     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              PanelService (pure logic)                 │    │
//! │  │  Gestures · Screen FSM · View                          │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Button · Knob (polled)  ──▶  Event queue  ──▶  event loop     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info, warn};

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::ledc::config::TimerConfig;
use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;

use fanpanel::adapters::display::ConsoleDisplay;
use fanpanel::adapters::hardware::PanelIo;
use fanpanel::adapters::log_sink::LogEventSink;
use fanpanel::adapters::nvs::NvsAdapter;
use fanpanel::adapters::time::Esp32TimeAdapter;
use fanpanel::app::service::PanelService;
use fanpanel::app::settings::SettingsStore;
use fanpanel::config::PanelConfig;
use fanpanel::drivers::button::{ButtonDriver, ButtonEdge};
use fanpanel::drivers::fan::FanDriver;
use fanpanel::drivers::knob::KnobDriver;
use fanpanel::events::{EVENTS, Event};

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  FanPanel v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = PanelConfig::default();
    config.validate().map_err(fanpanel::error::Error::from)?;

    // ── 2. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    let mut button_pin = PinDriver::input(pins.gpio0)?;
    button_pin.set_pull(Pull::Up)?;
    let mut knob_a = PinDriver::input(pins.gpio6)?;
    knob_a.set_pull(Pull::Up)?;
    let mut knob_b = PinDriver::input(pins.gpio5)?;
    knob_b.set_pull(Pull::Up)?;

    let mut backlight = PinDriver::output(pins.gpio17)?;
    backlight.set_high()?;

    let fan_timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::default().frequency(Hertz(config.fan_pwm_frequency_hz)),
    )?;
    let fan_pwm = LedcDriver::new(peripherals.ledc.channel0, &fan_timer, pins.gpio18)?;

    let mut button = ButtonDriver::new(button_pin, true, &config);
    let mut knob = KnobDriver::new(knob_a, knob_b, config.knob_transitions_per_step)?;
    let mut io = PanelIo::new(FanDriver::new(fan_pwm), ConsoleDisplay::new());

    // ── 3. Settings storage ───────────────────────────────────
    let nvs = match NvsAdapter::new() {
        Ok(n) => n,
        Err(e) => {
            warn!("NVS init failed ({}), running with defaults and no persistence", e);
            NvsAdapter::uninitialised()
        }
    };
    let mut settings = SettingsStore::new(nvs);
    let mut sink = LogEventSink::new();

    // ── 4. Panel service ──────────────────────────────────────
    let time = Esp32TimeAdapter::new();
    io.set_now(time.uptime_ms());

    let mut service = PanelService::new(config.clone());
    service.start(&mut io, &mut settings, &mut sink);

    info!("System ready. Entering event loop.");

    // ── 5. Event loop ─────────────────────────────────────────
    let mut input_fault = false;
    loop {
        let now_ms = time.uptime_ms();
        let mut inputs: heapless::Vec<Event, 2> = heapless::Vec::new();

        let edge = button.tick(now_ms);
        let step = knob.tick();
        match (edge, step) {
            (Ok(edge), Ok(step)) => {
                input_fault = false;
                // Capacity covers one edge plus one knob step.
                match edge {
                    Some(ButtonEdge::PressUp) => {
                        let _ = inputs.push(Event::PressUp);
                    }
                    Some(ButtonEdge::LongPressStart) => {
                        let _ = inputs.push(Event::LongPressStart);
                    }
                    None => {}
                }
                if let Some(dir) = step {
                    let _ = inputs.push(Event::Knob(dir));
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                if !input_fault {
                    error!("Input sampling failed: {}", e);
                    input_fault = true;
                }
            }
        }

        io.run_once(now_ms, &inputs, &EVENTS, &mut service, &mut settings, &mut sink);

        FreeRtos::delay_ms(config.input_poll_ms);
    }
}
