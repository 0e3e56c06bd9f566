//! Sensor types for the MPU-6050
//!
//! - Accelerometer (3-axis), readings in m/s²
//! - Gyroscope (3-axis), readings in rad/s
//!
//! All bus operations are performed through methods on [`Mpu6050`](crate::Mpu6050).

pub mod accelerometer;
pub mod gyroscope;

pub use accelerometer::{AccelData, AccelRange, STANDARD_GRAVITY};
pub use gyroscope::{GyroData, GyroRange};

/// Raw signed 16-bit counts for the three axes of one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAxes {
    /// X-axis (raw)
    pub x: i16,
    /// Y-axis (raw)
    pub y: i16,
    /// Z-axis (raw)
    pub z: i16,
}

impl RawAxes {
    /// Create from individual axes
    #[must_use]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// Accelerometer and gyroscope readings taken back to back
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImuData {
    /// Acceleration in m/s²
    pub accel: AccelData,
    /// Angular rate in rad/s
    pub gyro: GyroData,
}
