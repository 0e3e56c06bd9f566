#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod calibration;
pub mod config;
pub mod device;
pub mod interface;
pub mod power;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use calibration::{BiasAccumulator, Calibration};
pub use config::{CalibrationConfig, GravityHandling, LowpassFilter, SensorConfig};
pub use device::Mpu6050;
pub use interface::{I2cInterface, SpiInterface};
pub use power::PowerState;
pub use sensors::{AccelData, AccelRange, GyroData, GyroRange, ImuData, RawAxes, STANDARD_GRAVITY};

/// MPU-6050 I2C address when AD0 pin is low (default: 0x68)
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// MPU-6050 I2C address when AD0 pin is high (alternative: 0x69)
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Expected value of `WHO_AM_I` register
///
/// The register holds the upper bits of the I2C address and ignores AD0, so
/// it reads 0x68 at either address.
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// Driver errors
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Argument outside its valid set (zero calibration samples, unknown range or filter code)
    InvalidArgument,
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// The device did not clear its reset bit in time
    ResetTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
