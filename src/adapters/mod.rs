//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements         | Connects to                  |
//! |------------|--------------------|------------------------------|
//! | `display`  | DisplayPort        | Serial console frames        |
//! | `hardware` | FanPort            | Fan PWM driver               |
//! |            | DisplayPort        | Display adapter              |
//! |            | TimerPort          | Software timers              |
//! | `log_sink` | EventSink          | Serial log output            |
//! | `nvs`      | StoragePort        | NVS / in-memory store        |
//! | `time`     | (none)             | ESP32 system timer           |

pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod nvs;
pub mod time;
