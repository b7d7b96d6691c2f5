//! Brightness feature report over HID class control transfers.

use log::trace;

use crate::config::MonitorConfig;
use crate::error::{Error, Result};
use crate::usb::UsbHandle;

pub const HID_GET_REPORT: u8 = 0x01;
pub const HID_SET_REPORT: u8 = 0x09;
pub const HID_REPORT_TYPE_FEATURE: u16 = 0x03;

/// Bytes requested when reading the report.
pub const GET_REPORT_LEN: usize = 8;
/// Bytes sent when writing the report.
pub const SET_REPORT_LEN: usize = 6;

fn report_value(report_id: u8) -> u16 {
    (HID_REPORT_TYPE_FEATURE << 8) | u16::from(report_id)
}

pub fn encode_brightness_report(val: u16) -> [u8; SET_REPORT_LEN] {
    let [lo, hi] = val.to_le_bytes();
    [lo, hi, 0, 0, 0, 0]
}

pub fn decode_brightness_report(data: &[u8]) -> Result<u16> {
    match data {
        [lo, hi, ..] => Ok(u16::from_le_bytes([*lo, *hi])),
        _ => Err(Error::ShortReport {
            expected: 2,
            actual: data.len(),
        }),
    }
}

pub fn read_raw_brightness<H: UsbHandle>(handle: &H, config: &MonitorConfig) -> Result<u16> {
    let mut data = [0u8; GET_REPORT_LEN];

    let n = handle
        .read_control(
            rusb::request_type(
                rusb::Direction::In,
                rusb::RequestType::Class,
                rusb::Recipient::Interface,
            ),
            HID_GET_REPORT,
            report_value(config.report_id),
            u16::from(config.interface),
            &mut data,
        )
        .map_err(|source| Error::Transfer {
            request: "GET_REPORT",
            source,
        })?;
    trace!("got brightness report {:02x?}", &data[..n]);

    decode_brightness_report(&data[..n])
}

pub fn write_raw_brightness<H: UsbHandle>(
    handle: &H,
    config: &MonitorConfig,
    val: u16,
) -> Result<()> {
    let data = encode_brightness_report(val);
    trace!("set brightness report {:02x?}", data);

    let n = handle
        .write_control(
            rusb::request_type(
                rusb::Direction::Out,
                rusb::RequestType::Class,
                rusb::Recipient::Interface,
            ),
            HID_SET_REPORT,
            report_value(config.report_id),
            u16::from(config.interface),
            &data,
        )
        .map_err(|source| Error::Transfer {
            request: "SET_REPORT",
            source,
        })?;

    if n < data.len() {
        return Err(Error::ShortReport {
            expected: data.len(),
            actual: n,
        });
    }
    Ok(())
}
