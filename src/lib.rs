//! Brightness control for USB-C LG UltraFine monitors.
//!
//! The monitors expose their backlight level as a vendor HID feature report
//! on interface 1. This crate finds a supported monitor, claims that
//! interface and reads or writes the 16-bit brightness value through USB
//! control transfers.

pub mod brightness;
pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod hid;
pub mod session;
pub mod signal;
pub mod tui;
pub mod usb;

#[cfg(test)]
pub(crate) mod mock;

pub use brightness::Direction;
pub use config::{AdjustPolicy, Model, MonitorConfig};
pub use error::{Error, Result};
pub use session::Session;
pub use signal::Interrupt;
