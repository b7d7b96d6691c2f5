//! Percent view of the absolute brightness and the step policy.

use crate::config::{AdjustPolicy, MonitorConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Brighten,
    Dim,
}

impl Direction {
    fn signum(self) -> i32 {
        match self {
            Direction::Brighten => 1,
            Direction::Dim => -1,
        }
    }
}

/// Truncates toward zero. Values above `max` read as 100%.
pub fn raw_to_percent(raw: u16, max: u16) -> u8 {
    if max == 0 {
        return 0;
    }
    let raw = u32::from(raw.min(max));
    (raw * 100 / u32::from(max)) as u8
}

pub fn percent_to_raw(percent: u8, max: u16) -> u16 {
    (u32::from(percent.min(100)) * u32::from(max) / 100) as u16
}

/// The percent that one step in `direction` from `current` lands on.
pub fn next_percent(current: u8, direction: Direction, config: &MonitorConfig) -> u8 {
    let floor = i32::from(config.min_percent.min(100));
    let step = i32::from(config.step.max(1));
    let new = i32::from(current) + direction.signum() * step;

    let new = match config.policy {
        AdjustPolicy::StepAndSnap => {
            let rem = new.rem_euclid(step);
            let snapped = match (rem, direction) {
                (0, _) => new,
                (_, Direction::Brighten) => new + (step - rem),
                (_, Direction::Dim) => new - rem,
            };
            snapped.max(floor).min(100)
        }
        AdjustPolicy::RoundToMultiple { granularity } => {
            let granularity = i32::from(granularity.max(1));
            let clamped = new.max(0).min(100);
            (clamped - clamped % granularity).max(floor)
        }
    };
    new as u8
}
