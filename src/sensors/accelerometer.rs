//! Accelerometer sensor types
//!
//! Full-scale range selection and readings in m/s².

use super::RawAxes;

/// Standard gravity in m/s², the default unit multiplier for acceleration
pub const STANDARD_GRAVITY: f32 = 9.806_65;

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g range (most sensitive, least range)
    #[default]
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range
    G8 = 2,
    /// ±16g range (least sensitive, most range)
    G16 = 3,
}

impl AccelRange {
    /// Scale factor in LSB/g
    ///
    /// Raw counts divided by this value give acceleration in g.
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }

    /// Two-bit `AFS_SEL` code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Range for an `AFS_SEL` code, `None` outside 0-3
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::G2),
            1 => Some(Self::G4),
            2 => Some(Self::G8),
            3 => Some(Self::G16),
            _ => None,
        }
    }

    /// Convert one raw count to m/s² using `gravity` as the unit multiplier
    #[must_use]
    pub fn to_physical(self, raw: f32, gravity: f32) -> f32 {
        gravity * raw / self.scale()
    }
}

/// Accelerometer reading in m/s²
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration in m/s²
    pub x: f32,
    /// Y-axis acceleration in m/s²
    pub y: f32,
    /// Z-axis acceleration in m/s²
    pub z: f32,
}

impl AccelData {
    /// Convert raw counts taken at `range`
    #[must_use]
    pub fn from_raw(raw: RawAxes, range: AccelRange, gravity: f32) -> Self {
        Self {
            x: range.to_physical(f32::from(raw.x), gravity),
            y: range.to_physical(f32::from(raw.y), gravity),
            z: range.to_physical(f32::from(raw.z), gravity),
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

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Axes as `[x, y, z]`
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
