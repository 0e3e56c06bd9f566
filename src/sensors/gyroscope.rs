//! Gyroscope sensor types
//!
//! Full-scale range selection and readings in rad/s.

use super::RawAxes;

const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±250°/s range
    #[default]
    Dps250 = 0,
    /// ±500°/s range
    Dps500 = 1,
    /// ±1000°/s range
    Dps1000 = 2,
    /// ±2000°/s range
    Dps2000 = 3,
}

impl GyroRange {
    /// Datasheet sensitivity in LSB/(°/s)
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Dps250 => 131.0,
            Self::Dps500 => 65.5,
            Self::Dps1000 => 32.8,
            Self::Dps2000 => 16.4,
        }
    }

    /// Scale factor in LSB/(rad/s)
    ///
    /// Raw counts divided by this value give angular rate in rad/s.
    #[must_use]
    pub fn scale(self) -> f32 {
        self.sensitivity() * RAD_TO_DEG
    }

    /// Two-bit `FS_SEL` code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Range for an `FS_SEL` code, `None` outside 0-3
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Dps250),
            1 => Some(Self::Dps500),
            2 => Some(Self::Dps1000),
            3 => Some(Self::Dps2000),
            _ => None,
        }
    }

    /// Convert one raw count to rad/s
    #[must_use]
    pub fn to_physical(self, raw: f32) -> f32 {
        raw / self.scale()
    }
}

/// Gyroscope reading in rad/s
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation rate in rad/s
    pub x: f32,
    /// Y-axis rotation rate in rad/s
    pub y: f32,
    /// Z-axis rotation rate in rad/s
    pub z: f32,
}

impl GyroData {
    /// Convert raw counts taken at `range`
    #[must_use]
    pub fn from_raw(raw: RawAxes, range: GyroRange) -> Self {
        Self {
            x: range.to_physical(f32::from(raw.x)),
            y: range.to_physical(f32::from(raw.y)),
            z: range.to_physical(f32::from(raw.z)),
        }
    }

    /// Subtract a per-axis bias
    #[must_use]
    pub fn corrected(self, bias: [f32; 3]) -> Self {
        Self {
            x: self.x - bias[0],
            y: self.y - bias[1],
            z: self.z - bias[2],
        }
    }

    /// Rates in °/s as `[x, y, z]`
    #[must_use]
    pub fn to_degrees_per_sec(&self) -> [f32; 3] {
        [self.x * RAD_TO_DEG, self.y * RAD_TO_DEG, self.z * RAD_TO_DEG]
    }

    /// Axes as `[x, y, z]`
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
