//! Ownership of one opened monitor for the duration of a session.
//!
//! A `Session` is either `Opened` (handle open, interface not claimed) or
//! `Claimed`. Teardown moves it to `Closed` and runs exactly once, whether
//! triggered by `close`, by a failed claim, or by `Drop` on an early
//! return or unwind.

use std::mem;

use log::{debug, info, warn};

use crate::brightness::{self, Direction};
use crate::config::MonitorConfig;
use crate::error::{Error, Result};
use crate::hid;
use crate::signal::Interrupt;
use crate::usb::{UsbDevice, UsbHandle};

enum State<H> {
    Opened(H),
    Claimed(H),
    Closed,
}

pub struct Session<H: UsbHandle> {
    state: State<H>,
    config: MonitorConfig,
}

impl<H: UsbHandle> Session<H> {
    /// Open and claim the first of `devices`.
    pub fn open<D>(devices: &[D], config: &MonitorConfig) -> Result<Self>
    where
        D: UsbDevice<Handle = H>,
    {
        let device = devices.first().ok_or(Error::NoMonitors)?;
        let handle = device.open().map_err(Error::Open)?;
        let mut session = Session {
            state: State::Opened(handle),
            config: config.clone(),
        };
        session.claim()?;
        Ok(session)
    }

    fn claim(&mut self) -> Result<()> {
        let iface = self.config.interface;
        let mut handle = match mem::replace(&mut self.state, State::Closed) {
            State::Opened(handle) => handle,
            other => {
                self.state = other;
                return Ok(());
            }
        };

        if let Err(e) = handle.set_auto_detach_kernel_driver(true) {
            warn!("unable to enable kernel driver auto-detach: {}", e);
        }

        match handle.claim_interface(iface) {
            Ok(()) => {
                debug!("claimed interface {}", iface);
                self.state = State::Claimed(handle);
                Ok(())
            }
            Err(source) => {
                self.state = State::Opened(handle);
                self.teardown();
                Err(Error::Claim {
                    interface: iface,
                    source,
                })
            }
        }
    }

    /// `open` only hands out claimed sessions and `close` consumes them, so
    /// `NotClaimed` can only come from a session built in another state.
    fn handle(&self) -> Result<&H> {
        match &self.state {
            State::Claimed(handle) => Ok(handle),
            _ => Err(Error::NotClaimed),
        }
    }

    pub fn read_percent(&self) -> Result<u8> {
        let raw = hid::read_raw_brightness(self.handle()?, &self.config)?;
        let percent = brightness::raw_to_percent(raw, self.config.max_brightness);
        debug!("current brightness: {}% (val: {})", percent, raw);
        Ok(percent)
    }

    /// Move one step in `direction` and return the new percent.
    pub fn run_once(&mut self, direction: Direction) -> Result<u8> {
        self.step(direction, None)
    }

    /// `run_once`, except a signal caught while the read was in flight
    /// cancels the write.
    pub fn run_once_interruptible(
        &mut self,
        direction: Direction,
        interrupt: &Interrupt,
    ) -> Result<u8> {
        self.step(direction, Some(interrupt))
    }

    fn step(&mut self, direction: Direction, interrupt: Option<&Interrupt>) -> Result<u8> {
        let current = self.read_percent()?;
        if interrupt.map_or(false, Interrupt::is_set) {
            return Err(Error::Interrupted);
        }
        let next = brightness::next_percent(current, direction, &self.config);
        let raw = brightness::percent_to_raw(next, self.config.max_brightness);
        hid::write_raw_brightness(self.handle()?, &self.config, raw)?;
        info!("brightness {}% -> {}% (val: {})", current, next, raw);
        Ok(next)
    }

    pub fn close(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let iface = self.config.interface;
        match mem::replace(&mut self.state, State::Closed) {
            State::Claimed(mut handle) => {
                if let Err(e) = handle.release_interface(iface) {
                    warn!("failed to release interface {}: {}", iface, e);
                }
                if let Err(e) = handle.attach_kernel_driver(iface) {
                    debug!("kernel driver not re-attached: {}", e);
                }
                debug!("closed monitor");
            }
            State::Opened(_) => debug!("closed unclaimed monitor"),
            State::Closed => {}
        }
    }
}

impl<H: UsbHandle> Drop for Session<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
