//! Thin seam over `rusb` so discovery and sessions can run against fakes.

use std::time::Duration;

use crate::error::{Error, Result};

/// libusb treats a zero timeout as "wait forever".
const NO_TIMEOUT: Duration = Duration::from_secs(0);

/// An enumerated, not yet opened, USB device.
pub trait UsbDevice {
    type Handle: UsbHandle;

    /// `(vendor_id, product_id)` from the device descriptor.
    fn ids(&self) -> rusb::Result<(u16, u16)>;

    fn open(&self) -> rusb::Result<Self::Handle>;
}

/// An open device. Dropping the handle closes it.
pub trait UsbHandle {
    fn set_auto_detach_kernel_driver(&mut self, enable: bool) -> rusb::Result<()>;
    fn claim_interface(&mut self, iface: u8) -> rusb::Result<()>;
    fn release_interface(&mut self, iface: u8) -> rusb::Result<()>;
    fn attach_kernel_driver(&mut self, iface: u8) -> rusb::Result<()>;

    fn read_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> rusb::Result<usize>;

    fn write_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &[u8],
    ) -> rusb::Result<usize>;
}

impl<T: rusb::UsbContext> UsbDevice for rusb::Device<T> {
    type Handle = rusb::DeviceHandle<T>;

    fn ids(&self) -> rusb::Result<(u16, u16)> {
        let desc = self.device_descriptor()?;
        Ok((desc.vendor_id(), desc.product_id()))
    }

    fn open(&self) -> rusb::Result<Self::Handle> {
        rusb::Device::open(self)
    }
}

impl<T: rusb::UsbContext> UsbHandle for rusb::DeviceHandle<T> {
    fn set_auto_detach_kernel_driver(&mut self, enable: bool) -> rusb::Result<()> {
        rusb::DeviceHandle::set_auto_detach_kernel_driver(self, enable)
    }

    fn claim_interface(&mut self, iface: u8) -> rusb::Result<()> {
        rusb::DeviceHandle::claim_interface(self, iface)
    }

    fn release_interface(&mut self, iface: u8) -> rusb::Result<()> {
        rusb::DeviceHandle::release_interface(self, iface)
    }

    fn attach_kernel_driver(&mut self, iface: u8) -> rusb::Result<()> {
        rusb::DeviceHandle::attach_kernel_driver(self, iface)
    }

    fn read_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
    ) -> rusb::Result<usize> {
        rusb::DeviceHandle::read_control(self, request_type, request, value, index, buf, NO_TIMEOUT)
    }

    fn write_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &[u8],
    ) -> rusb::Result<usize> {
        rusb::DeviceHandle::write_control(self, request_type, request, value, index, buf, NO_TIMEOUT)
    }
}

/// Every USB device currently attached, in enumeration order.
pub fn devices() -> Result<Vec<rusb::Device<rusb::GlobalContext>>> {
    let list = rusb::devices().map_err(Error::Enumerate)?;
    Ok(list.iter().collect())
}
