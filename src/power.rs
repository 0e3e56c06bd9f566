//! Power management
//!
//! The MPU-6050 has two states relevant to the driver:
//! - **Awake**: sensors sample continuously and data registers refresh
//! - **Sleeping**: only the serial interface and registers stay powered.
//!   Data registers keep their last contents, so reads return stale values.
//!
//! Transitions happen only through [`Mpu6050::enable_sleep`](crate::Mpu6050::enable_sleep)
//! and [`Mpu6050::disable_sleep`](crate::Mpu6050::disable_sleep). A device reset
//! leaves the chip sleeping, which is its power-on state.

/// Power state of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Sensors running, data registers refreshing
    #[default]
    Awake,
    /// Sleep mode, measurements stopped
    Sleeping,
}

impl PowerState {
    /// Value of the `SLEEP` bit in `PWR_MGMT_1` for this state
    #[must_use]
    pub const fn sleep_enabled(self) -> bool {
        matches!(self, Self::Sleeping)
    }

    /// State selected by the `SLEEP` bit
    #[must_use]
    pub const fn from_sleep(sleep: bool) -> Self {
        if sleep {
            Self::Sleeping
        } else {
            Self::Awake
        }
    }

    /// Whether the device is refreshing its data registers
    #[must_use]
    pub const fn is_measuring(self) -> bool {
        matches!(self, Self::Awake)
    }
}
