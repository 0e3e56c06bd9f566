//! Bias calibration
//!
//! Calibration averages a number of uncorrected readings taken while the
//! device is at rest. The averages become per-axis biases that are
//! subtracted from later readings on request.

use crate::config::{GravityHandling, SensorConfig};
use crate::sensors::{AccelData, GyroData, RawAxes};

/// Per-axis bias offsets in physical units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Accelerometer bias in m/s², `[x, y, z]`
    pub accel_bias: [f32; 3],
    /// Gyroscope bias in rad/s, `[x, y, z]`
    pub gyro_bias: [f32; 3],
}

impl Calibration {
    /// Whether every bias is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.accel_bias
            .iter()
            .chain(self.gyro_bias.iter())
            .all(|bias| *bias == 0.0)
    }

    /// Subtract the accelerometer bias
    #[must_use]
    pub fn correct_accel(&self, data: AccelData) -> AccelData {
        data.corrected(self.accel_bias)
    }

    /// Subtract the gyroscope bias
    #[must_use]
    pub fn correct_gyro(&self, data: GyroData) -> GyroData {
        data.corrected(self.gyro_bias)
    }
}

/// Running per-axis sums of raw samples
///
/// Raw counts are summed exactly in `i64`; the mean is converted to physical
/// units once, with the scale factors in effect during calibration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiasAccumulator {
    accel_sum: [i64; 3],
    gyro_sum: [i64; 3],
    samples: u32,
}

impl BiasAccumulator {
    /// Empty accumulator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accel_sum: [0; 3],
            gyro_sum: [0; 3],
            samples: 0,
        }
    }

    /// Add one joint reading
    pub fn push(&mut self, accel: RawAxes, gyro: RawAxes) {
        for (sum, value) in self.accel_sum.iter_mut().zip([accel.x, accel.y, accel.z]) {
            *sum += i64::from(value);
        }
        for (sum, value) in self.gyro_sum.iter_mut().zip([gyro.x, gyro.y, gyro.z]) {
            *sum += i64::from(value);
        }
        self.samples += 1;
    }

    /// Number of readings added so far
    #[must_use]
    pub const fn samples(&self) -> u32 {
        self.samples
    }

    /// Biases from the averaged readings, `None` if nothing was added
    #[must_use]
    pub fn finish(&self, config: &SensorConfig, gravity: GravityHandling) -> Option<Calibration> {
        if self.samples == 0 {
            return None;
        }

        let accel_mean = self.accel_sum.map(|sum| mean(sum, self.samples));
        let gyro_mean = self.gyro_sum.map(|sum| mean(sum, self.samples));

        let mut accel_bias =
            accel_mean.map(|raw| config.accel_range.to_physical(raw, config.gravity));
        let gyro_bias = gyro_mean.map(|raw| config.gyro_range.to_physical(raw));

        if gravity == GravityHandling::Preserve {
            accel_bias[2] -= config.gravity;
        }

        Some(Calibration {
            accel_bias,
            gyro_bias,
        })
    }
}

/// Mean raw count; exact whenever the true mean is a whole count
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn mean(sum: i64, samples: u32) -> f32 {
    (sum as f64 / f64::from(samples)) as f32
}
