//! Monitor identification and brightness calibration.

/// LG USB vendor ID.
pub const LG_VENDOR_ID: u16 = 0x43e;

/// Interface carrying the brightness feature report.
pub const LG_IFACE: u8 = 1;

/// Absolute brightness at 100%.
pub const MAX_BRIGHTNESS: u16 = 0xd2f0;

/// A recognized monitor model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Model {
    pub product_id: u16,
    pub name: &'static str,
}

/// Models we recognize. A monitor that is not picked up may need its
/// product ID added here.
pub const MODELS: &[Model] = &[
    Model {
        product_id: 0x9a63,
        name: "LG 24MD4KL",
    },
    Model {
        product_id: 0x9a70,
        name: "LG 27MD5KL",
    },
    Model {
        product_id: 0x9a40,
        name: "LG 27MD5KA",
    },
];

/// How a requested step is turned into the next percent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustPolicy {
    /// Step, then push further in the direction of travel onto a multiple
    /// of the step size.
    StepAndSnap,
    /// Step, clamp, then floor to a multiple of `granularity`.
    RoundToMultiple { granularity: u8 },
}

/// Everything needed to find a monitor and drive its backlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub vendor_id: u16,
    pub models: Vec<Model>,
    pub interface: u8,
    pub report_id: u8,
    pub max_brightness: u16,
    /// Lowest percent an adjustment may produce.
    pub min_percent: u8,
    /// Percent moved per keypress or invocation.
    pub step: u8,
    pub policy: AdjustPolicy,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            vendor_id: LG_VENDOR_ID,
            models: MODELS.to_vec(),
            interface: LG_IFACE,
            report_id: 0,
            max_brightness: MAX_BRIGHTNESS,
            min_percent: 1,
            step: 2,
            policy: AdjustPolicy::StepAndSnap,
        }
    }
}

impl MonitorConfig {
    /// Single percent steps snapped down to multiples of five, allowed to
    /// reach zero.
    pub fn coarse() -> Self {
        MonitorConfig {
            min_percent: 0,
            step: 1,
            policy: AdjustPolicy::RoundToMultiple { granularity: 5 },
            ..MonitorConfig::default()
        }
    }

    pub fn model(&self, product_id: u16) -> Option<&Model> {
        self.models.iter().find(|m| m.product_id == product_id)
    }
}
