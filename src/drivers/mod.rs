//! Input and output drivers.

pub mod button;
pub mod fan;
pub mod knob;
pub mod soft_timer;
