//! Fake USB devices for tests.
//!
//! A `MockDevice` and the handles it opens share one `MockState`, which
//! acts as the monitor firmware (the stored brightness) and records every
//! call so tests can check cleanup and the bytes on the wire.

use std::cell::RefCell;
use std::rc::Rc;

use crate::usb::{UsbDevice, UsbHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub request_type: u8,
    pub request: u8,
    pub value: u16,
    pub index: u16,
    pub data: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub brightness: u16,
    pub auto_detach: bool,
    pub events: Vec<&'static str>,
    pub reads: Vec<Transfer>,
    pub writes: Vec<Transfer>,

    pub fail_open: Option<rusb::Error>,
    pub fail_auto_detach: Option<rusb::Error>,
    pub fail_claim: Option<rusb::Error>,
    pub fail_read: Option<rusb::Error>,
    pub fail_write: Option<rusb::Error>,
    pub fail_attach: Option<rusb::Error>,
    /// Bytes reported back by the next reads instead of a full report.
    pub short_read: Option<usize>,
}

impl MockState {
    pub fn count(&self, event: &str) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

pub struct MockDevice {
    ids: Option<(u16, u16)>,
    pub state: Rc<RefCell<MockState>>,
}

impl MockDevice {
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        MockDevice {
            ids: Some((vendor_id, product_id)),
            state: Rc::new(RefCell::new(MockState::default())),
        }
    }

    /// A supported monitor currently at `brightness`.
    pub fn monitor(brightness: u16) -> Self {
        let device = MockDevice::new(0x43e, 0x9a63);
        device.state.borrow_mut().brightness = brightness;
        device
    }

    pub fn unreadable() -> Self {
        MockDevice {
            ids: None,
            state: Rc::new(RefCell::new(MockState::default())),
        }
    }
}

impl UsbDevice for MockDevice {
    type Handle = MockHandle;

    fn ids(&self) -> rusb::Result<(u16, u16)> {
        self.ids.ok_or(rusb::Error::Io)
    }

    fn open(&self) -> rusb::Result<MockHandle> {
        let mut state = self.state.borrow_mut();
        if let Some(e) = state.fail_open {
            return Err(e);
        }
        state.events.push("open");
        Ok(MockHandle {
            state: Rc::clone(&self.state),
        })
    }
}

pub struct MockHandle {
    state: Rc<RefCell<MockState>>,
}

impl UsbHandle for MockHandle {
    fn set_auto_detach_kernel_driver(&mut self, enable: bool) -> rusb::Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(e) = state.fail_auto_detach {
            return Err(e);
        }
        state.auto_detach = enable;
        Ok(())
    }

    fn claim_interface(&mut self, _iface: u8) -> rusb::Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(e) = state.fail_claim {
            return Err(e);
        }
        state.events.push("claim");
        Ok(())
    }

    fn release_interface(&mut self, _iface: u8) -> rusb::Result<()> {
        self.state.borrow_mut().events.push("release");
        Ok(())
    }

    fn attach_kernel_driver(&mut self, _iface: u8) -> rusb::Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(e) = state.fail_attach {
            return Err(e);
        }
        state.events.push("attach");
        Ok(())
    }

    fn read_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> rusb::Result<usize> {
        let mut state = self.state.borrow_mut();
        state.reads.push(Transfer {
            request_type,
            request,
            value,
            index,
            data: vec![0; buf.len()],
        });
        if let Some(e) = state.fail_read {
            return Err(e);
        }
        let stored = state.brightness.to_le_bytes();
        let n = state.short_read.unwrap_or(buf.len()).min(buf.len());
        for (i, byte) in buf.iter_mut().enumerate().take(n) {
            *byte = stored.get(i).copied().unwrap_or(0);
        }
        Ok(n)
    }

    fn write_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &[u8],
    ) -> rusb::Result<usize> {
        let mut state = self.state.borrow_mut();
        state.writes.push(Transfer {
            request_type,
            request,
            value,
            index,
            data: buf.to_vec(),
        });
        if let Some(e) = state.fail_write {
            return Err(e);
        }
        if buf.len() >= 2 {
            state.brightness = u16::from_le_bytes([buf[0], buf[1]]);
        }
        Ok(buf.len())
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.state.borrow_mut().events.push("close");
    }
}
