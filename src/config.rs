//! Sensor and calibration configuration
//!
//! [`SensorConfig`] mirrors what the driver last wrote to the device. The
//! driver only updates it after the corresponding register write succeeded,
//! and every conversion reads its scale factors from it, so a reading is
//! always converted with the range the device is actually using.

use crate::power::PowerState;
use crate::sensors::{AccelData, AccelRange, GyroData, GyroRange, RawAxes, STANDARD_GRAVITY};

/// Digital low pass filter (`DLPF_CFG`) setting
///
/// Variants are named after the gyroscope bandwidth. Lower bandwidth means
/// less noise and more delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowpassFilter {
    /// Gyro 256 Hz / accel 260 Hz, filter effectively off (gyro samples at 8 kHz)
    #[default]
    Hz256 = 0,
    /// Gyro 188 Hz / accel 184 Hz
    Hz188 = 1,
    /// Gyro 98 Hz / accel 94 Hz
    Hz98 = 2,
    /// Gyro 42 Hz / accel 44 Hz
    Hz42 = 3,
    /// Gyro 20 Hz / accel 21 Hz
    Hz20 = 4,
    /// 10 Hz
    Hz10 = 5,
    /// 5 Hz
    Hz5 = 6,
}

impl LowpassFilter {
    /// Three-bit `DLPF_CFG` code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Filter for a `DLPF_CFG` code, `None` for the reserved code 7 and above
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Hz256),
            1 => Some(Self::Hz188),
            2 => Some(Self::Hz98),
            3 => Some(Self::Hz42),
            4 => Some(Self::Hz20),
            5 => Some(Self::Hz10),
            6 => Some(Self::Hz5),
            _ => None,
        }
    }

    /// Gyroscope 3dB bandwidth in Hz
    #[must_use]
    pub const fn gyro_bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz256 => 256,
            Self::Hz188 => 188,
            Self::Hz98 => 98,
            Self::Hz42 => 42,
            Self::Hz20 => 20,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }

    /// Accelerometer 3dB bandwidth in Hz
    #[must_use]
    pub const fn accel_bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz256 => 260,
            Self::Hz188 => 184,
            Self::Hz98 => 94,
            Self::Hz42 => 44,
            Self::Hz20 => 21,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }

    /// Gyroscope output rate before the sample rate divider
    #[must_use]
    pub const fn gyro_output_rate_hz(self) -> u16 {
        match self {
            Self::Hz256 => 8000,
            _ => 1000,
        }
    }
}

/// Configuration the device is currently running with
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Accelerometer full-scale range
    pub accel_range: AccelRange,
    /// Gyroscope full-scale range
    pub gyro_range: GyroRange,
    /// Sample rate divider written to `SMPLRT_DIV`
    pub sample_rate_divider: u8,
    /// Digital low pass filter
    pub lowpass: LowpassFilter,
    /// Sleep state
    pub power: PowerState,
    /// Unit multiplier from g to m/s²
    pub gravity: f32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            accel_range: AccelRange::default(),
            gyro_range: GyroRange::default(),
            sample_rate_divider: 0,
            lowpass: LowpassFilter::default(),
            power: PowerState::Awake,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl SensorConfig {
    /// Defaults with a custom gravity constant
    #[must_use]
    pub fn with_gravity(gravity: f32) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Accelerometer scale factor in LSB/g
    #[must_use]
    pub const fn accel_scale(&self) -> f32 {
        self.accel_range.scale()
    }

    /// Gyroscope scale factor in LSB/(rad/s)
    #[must_use]
    pub fn gyro_scale(&self) -> f32 {
        self.gyro_range.scale()
    }

    /// Output data rate in Hz
    ///
    /// `gyro_output_rate / (1 + divider)`: 1 kHz based, or 8 kHz based
    /// while the filter is at [`LowpassFilter::Hz256`]. The accelerometer
    /// itself never produces new samples faster than 1 kHz.
    #[must_use]
    pub fn sample_rate_hz(&self) -> f32 {
        f32::from(self.lowpass.gyro_output_rate_hz()) / (1.0 + f32::from(self.sample_rate_divider))
    }

    /// Whether the data registers are being refreshed
    #[must_use]
    pub const fn is_measuring(&self) -> bool {
        self.power.is_measuring()
    }

    /// Convert raw accelerometer counts to m/s²
    #[must_use]
    pub fn convert_accel(&self, raw: RawAxes) -> AccelData {
        AccelData::from_raw(raw, self.accel_range, self.gravity)
    }

    /// Convert raw gyroscope counts to rad/s
    #[must_use]
    pub fn convert_gyro(&self, raw: RawAxes) -> GyroData {
        GyroData::from_raw(raw, self.gyro_range)
    }
}

/// How gravity enters the accelerometer z bias during calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GravityHandling {
    /// The z bias keeps gravity, so a level device reads zero on all axes
    /// after correction
    #[default]
    Absorb,
    /// The gravity constant is taken out of the z bias, so a level device
    /// with z pointing up reads +g on z after correction
    Preserve,
}

/// Calibration procedure settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationConfig {
    /// Gravity policy for the z bias
    pub gravity: GravityHandling,
    /// Wait between samples in milliseconds
    pub sample_interval_ms: u32,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            gravity: GravityHandling::Absorb,
            sample_interval_ms: 50,
        }
    }
}
