//! High-level driver API for the MPU-6050
//!
//! [`Mpu6050`] keeps the device configuration, the scale factors it implies
//! and the calibration biases in one place. Setters write the device first
//! and update the stored configuration only once the write has succeeded.
//!
//! The blocking API is available by default; enabling the `async` feature
//! replaces it with an identical `async` API.

use crate::calibration::{BiasAccumulator, Calibration};
use crate::config::{CalibrationConfig, LowpassFilter, SensorConfig};
use crate::power::PowerState;
use crate::sensors::{AccelData, AccelRange, GyroData, GyroRange, ImuData, RawAxes};
use crate::Error;

use crate::registers::Mpu6050Registers as RegisterDevice;

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Maximum time the device may take to come out of reset
const RESET_TIMEOUT_MS: u32 = 100;
const RESET_POLL_INTERVAL_MS: u32 = 1;

/// Temperature sensitivity in LSB/°C
const TEMP_SENSITIVITY: f32 = 340.0;
/// Temperature reading at zero counts in °C
const TEMP_OFFSET_C: f32 = 36.53;

/// Main driver for the MPU-6050
///
/// The driver owns its register interface. To keep using the bus elsewhere
/// once the driver is gone, build the interface over a borrowed bus
/// (`I2cInterface::default(&mut i2c)`) or take it back with
/// [`release`](Self::release). Dropping the driver leaves the device in
/// whatever power state it was in.
///
/// All methods take `&mut self`, so a driver is used by one caller at a
/// time. Devices sharing a bus must be serialized by the bus implementation
/// (for example with `embedded-hal-bus`).
pub struct Mpu6050<I> {
    device: RegisterDevice<I>,
    config: SensorConfig,
    calibration: Calibration,
    calibration_config: CalibrationConfig,
}

impl<I> Mpu6050<I> {
    fn with_config(interface: I, config: SensorConfig) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            config,
            calibration: Calibration::default(),
            calibration_config: CalibrationConfig::default(),
        }
    }

    /// Configuration the device is running with
    #[must_use]
    pub const fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Accelerometer scale factor in LSB/g for the selected range
    #[must_use]
    pub const fn accel_scale(&self) -> f32 {
        self.config.accel_scale()
    }

    /// Gyroscope scale factor in LSB/(rad/s) for the selected range
    #[must_use]
    pub fn gyro_scale(&self) -> f32 {
        self.config.gyro_scale()
    }

    /// Last power state set through the driver
    #[must_use]
    pub const fn power_state(&self) -> PowerState {
        self.config.power
    }

    /// Current bias offsets
    #[must_use]
    pub const fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Set every bias back to zero
    pub fn reset_calibration(&mut self) {
        self.calibration = Calibration::default();
    }

    /// Settings used by `calibrate`
    #[must_use]
    pub const fn calibration_config(&self) -> &CalibrationConfig {
        &self.calibration_config
    }

    /// Change the settings used by `calibrate`
    pub fn set_calibration_config(&mut self, config: CalibrationConfig) {
        self.calibration_config = config;
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    fn convert_accel(&self, raw: RawAxes, apply_bias: bool) -> AccelData {
        let data = self.config.convert_accel(raw);
        if apply_bias {
            self.calibration.correct_accel(data)
        } else {
            data
        }
    }

    fn convert_gyro(&self, raw: RawAxes, apply_bias: bool) -> GyroData {
        let data = self.config.convert_gyro(raw);
        if apply_bias {
            self.calibration.correct_gyro(data)
        } else {
            data
        }
    }

    fn warn_if_sleeping(&self) {
        #[cfg(feature = "defmt")]
        {
            if !self.config.is_measuring() {
                defmt::warn!("MPU-6050 is sleeping, sensor registers hold stale data");
            }
        }
    }

    /// Configuration right after the device finished a reset
    fn reset_config(&self, sleep: bool) -> SensorConfig {
        SensorConfig {
            power: PowerState::from_sleep(sleep),
            ..SensorConfig::with_gravity(self.config.gravity)
        }
    }

    fn record_calibration(&mut self, accumulator: &BiasAccumulator) -> Option<Calibration> {
        let calibration =
            accumulator.finish(&self.config, self.calibration_config.gravity)?;
        self.calibration = calibration;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Calibrated over {} samples: accel bias {} m/s^2, gyro bias {} rad/s",
            accumulator.samples(),
            calibration.accel_bias,
            calibration.gyro_bias
        );

        Some(calibration)
    }
}

fn temperature_celsius(raw: i16) -> f32 {
    f32::from(raw) / TEMP_SENSITIVITY + TEMP_OFFSET_C
}

#[cfg(not(feature = "async"))]
impl<I> Mpu6050<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a driver with standard gravity and wake the device
    ///
    /// The stored configuration starts at the register defaults (±2g,
    /// ±250°/s, divider 0, widest filter). Only the sleep bit is written.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn new(interface: I) -> Result<Self, Error<I::Error>> {
        Self::with_gravity(interface, crate::STANDARD_GRAVITY)
    }

    /// Create a driver that converts acceleration with a custom gravity constant
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn with_gravity(interface: I, gravity: f32) -> Result<Self, Error<I::Error>> {
        let mut driver = Self::with_config(interface, SensorConfig::with_gravity(gravity));
        driver.disable_sleep()?;
        Ok(driver)
    }

    /// Read the `WHO_AM_I` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Check that the device identifies as an MPU-6050
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] with the value read if it is not
    /// [`WHO_AM_I_VALUE`](crate::WHO_AM_I_VALUE), or a bus error.
    pub fn verify_device(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.read_who_am_i()?;
        if who_am_i != crate::WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }
        Ok(())
    }

    /// Reset every device register to its power-on value
    ///
    /// Polls the self-clearing reset bit for up to 100 ms. Afterwards the
    /// device is asleep and the stored configuration is back at defaults;
    /// the gravity constant and calibration are kept.
    ///
    /// # Errors
    ///
    /// Returns a bus error if the reset cannot be requested, or
    /// [`Error::ResetTimeout`] if the device never reports completion.
    pub fn reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.device.pwr_mgmt_1().modify(|w| {
            w.set_device_reset(true);
        })?;

        // The device may not answer while it resets, so read errors only mean "not yet"
        for _ in 0..(RESET_TIMEOUT_MS / RESET_POLL_INTERVAL_MS) {
            delay.delay_ms(RESET_POLL_INTERVAL_MS);
            if let Ok(pwr_mgmt) = self.device.pwr_mgmt_1().read() {
                if !pwr_mgmt.device_reset() {
                    self.config = self.reset_config(pwr_mgmt.sleep());
                    #[cfg(feature = "defmt")]
                    defmt::debug!("MPU-6050 reset complete");
                    return Ok(());
                }
            }
        }

        Err(Error::ResetTimeout)
    }

    /// Select the accelerometer full-scale range
    ///
    /// Writes only the `AFS_SEL` bits of `ACCEL_CONFIG`. The accelerometer
    /// scale factor changes together with the register.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails; the stored
    /// range is unchanged in that case.
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error<I::Error>> {
        self.device.accel_config().modify(|w| {
            w.set_afs_sel(range.code());
        })?;
        self.config.accel_range = range;

        #[cfg(feature = "defmt")]
        defmt::debug!("Accelerometer range set to {}", range);
        Ok(())
    }

    /// Select the accelerometer range from a raw `AFS_SEL` code (0-3)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for unknown codes without touching
    /// the bus, otherwise as [`set_accel_range`](Self::set_accel_range).
    pub fn set_accel_range_code(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        let range = AccelRange::from_code(code).ok_or(Error::InvalidArgument)?;
        self.set_accel_range(range)
    }

    /// Select the gyroscope full-scale range
    ///
    /// Writes only the `FS_SEL` bits of `GYRO_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails; the stored
    /// range is unchanged in that case.
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<I::Error>> {
        self.device.gyro_config().modify(|w| {
            w.set_fs_sel(range.code());
        })?;
        self.config.gyro_range = range;

        #[cfg(feature = "defmt")]
        defmt::debug!("Gyroscope range set to {}", range);
        Ok(())
    }

    /// Select the gyroscope range from a raw `FS_SEL` code (0-3)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for unknown codes without touching
    /// the bus, otherwise as [`set_gyro_range`](Self::set_gyro_range).
    pub fn set_gyro_range_code(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        let range = GyroRange::from_code(code).ok_or(Error::InvalidArgument)?;
        self.set_gyro_range(range)
    }

    /// Write the sample rate divider
    ///
    /// Output rate = 1 kHz / (1 + `divider`), or 8 kHz / (1 + `divider`)
    /// for the gyroscope while the filter is at [`LowpassFilter::Hz256`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.device.smplrt_div().write(|w| {
            w.set_smplrt_div(divider);
        })?;
        self.config.sample_rate_divider = divider;

        #[cfg(feature = "defmt")]
        defmt::debug!("Sample rate divider set to {}", divider);
        Ok(())
    }

    /// Select the digital low pass filter
    ///
    /// Writes only the `DLPF_CFG` bits of `CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_lowpass_filter(&mut self, filter: LowpassFilter) -> Result<(), Error<I::Error>> {
        self.device.config().modify(|w| {
            w.set_dlpf_cfg(filter.code());
        })?;
        self.config.lowpass = filter;

        #[cfg(feature = "defmt")]
        defmt::debug!("Low pass filter set to {}", filter);
        Ok(())
    }

    /// Select the low pass filter from a raw `DLPF_CFG` code (0-6)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for unknown codes without touching
    /// the bus, otherwise as [`set_lowpass_filter`](Self::set_lowpass_filter).
    pub fn set_lowpass_filter_code(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        let filter = LowpassFilter::from_code(code).ok_or(Error::InvalidArgument)?;
        self.set_lowpass_filter(filter)
    }

    /// Put the device to sleep
    ///
    /// Measurements stop; later reads return the last values the device
    /// produced until [`disable_sleep`](Self::disable_sleep) is called.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_sleep(&mut self) -> Result<(), Error<I::Error>> {
        self.set_power_state(PowerState::Sleeping)
    }

    /// Wake the device from sleep
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn disable_sleep(&mut self) -> Result<(), Error<I::Error>> {
        self.set_power_state(PowerState::Awake)
    }

    fn set_power_state(&mut self, state: PowerState) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_1().modify(|w| {
            w.set_sleep(state.sleep_enabled());
        })?;
        self.config.power = state;

        #[cfg(feature = "defmt")]
        defmt::debug!("Power state set to {}", state);
        Ok(())
    }

    /// Read raw accelerometer counts
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_raw(&mut self) -> Result<RawAxes, Error<I::Error>> {
        let reg = self.device.accel_out().read()?;
        Ok(RawAxes::new(reg.accel_x(), reg.accel_y(), reg.accel_z()))
    }

    /// Read raw gyroscope counts
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_raw(&mut self) -> Result<RawAxes, Error<I::Error>> {
        let reg = self.device.gyro_out().read()?;
        Ok(RawAxes::new(reg.gyro_x(), reg.gyro_y(), reg.gyro_z()))
    }

    /// Read acceleration in m/s²
    ///
    /// Each axis is `gravity * raw / accel_scale`, minus the calibrated
    /// bias when `apply_bias` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel(&mut self, apply_bias: bool) -> Result<AccelData, Error<I::Error>> {
        self.warn_if_sleeping();
        let raw = self.read_accel_raw()?;
        Ok(self.convert_accel(raw, apply_bias))
    }

    /// Read angular rate in rad/s
    ///
    /// Each axis is `raw / gyro_scale`, minus the calibrated bias when
    /// `apply_bias` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro(&mut self, apply_bias: bool) -> Result<GyroData, Error<I::Error>> {
        self.warn_if_sleeping();
        let raw = self.read_gyro_raw()?;
        Ok(self.convert_gyro(raw, apply_bias))
    }

    /// Read the accelerometer, then the gyroscope
    ///
    /// These are two separate bus transactions, so the two readings are not
    /// taken at the same instant.
    ///
    /// # Errors
    ///
    /// Returns an error if either read fails.
    pub fn read_all(&mut self, apply_bias: bool) -> Result<ImuData, Error<I::Error>> {
        let accel = self.read_accel(apply_bias)?;
        let gyro = self.read_gyro(apply_bias)?;
        Ok(ImuData { accel, gyro })
    }

    /// Read the die temperature in °C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let reg = self.device.temp_out().read()?;
        Ok(temperature_celsius(reg.temp_out()))
    }

    /// Estimate the bias of every axis by averaging `samples` readings
    ///
    /// The device must stay still. Readings are taken without bias
    /// correction and spaced by the configured interval (50 ms by default).
    /// The result replaces the previous calibration and is returned. How
    /// gravity enters the z bias is set by
    /// [`CalibrationConfig::gravity`](crate::CalibrationConfig::gravity).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `samples` is zero, or the bus
    /// error of a failed read. The previous calibration is kept on error.
    pub fn calibrate<D>(
        &mut self,
        samples: u16,
        delay: &mut D,
    ) -> Result<Calibration, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        if samples == 0 {
            return Err(Error::InvalidArgument);
        }
        self.warn_if_sleeping();

        let mut accumulator = BiasAccumulator::new();
        for sample in 0..samples {
            if sample > 0 {
                delay.delay_ms(self.calibration_config.sample_interval_ms);
            }
            let accel = self.read_accel_raw()?;
            let gyro = self.read_gyro_raw()?;
            accumulator.push(accel, gyro);
        }

        self.record_calibration(&accumulator)
            .ok_or(Error::InvalidArgument)
    }
}

#[cfg(feature = "async")]
impl<I> Mpu6050<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Create a driver with standard gravity and wake the device
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn new(interface: I) -> Result<Self, Error<I::Error>> {
        Self::with_gravity(interface, crate::STANDARD_GRAVITY).await
    }

    /// Create a driver that converts acceleration with a custom gravity constant
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn with_gravity(interface: I, gravity: f32) -> Result<Self, Error<I::Error>> {
        let mut driver = Self::with_config(interface, SensorConfig::with_gravity(gravity));
        driver.disable_sleep().await?;
        Ok(driver)
    }

    /// Read the `WHO_AM_I` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read_async().await?;
        Ok(reg.who_am_i())
    }

    /// Check that the device identifies as an MPU-6050
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] with the value read, or a bus error.
    pub async fn verify_device(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.read_who_am_i().await?;
        if who_am_i != crate::WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }
        Ok(())
    }

    /// Reset every device register to its power-on value
    ///
    /// # Errors
    ///
    /// Returns a bus error if the reset cannot be requested, or
    /// [`Error::ResetTimeout`] if the device never reports completion.
    pub async fn reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.device
            .pwr_mgmt_1()
            .modify_async(|w| {
                w.set_device_reset(true);
            })
            .await?;

        for _ in 0..(RESET_TIMEOUT_MS / RESET_POLL_INTERVAL_MS) {
            delay.delay_ms(RESET_POLL_INTERVAL_MS).await;
            if let Ok(pwr_mgmt) = self.device.pwr_mgmt_1().read_async().await {
                if !pwr_mgmt.device_reset() {
                    self.config = self.reset_config(pwr_mgmt.sleep());
                    #[cfg(feature = "defmt")]
                    defmt::debug!("MPU-6050 reset complete");
                    return Ok(());
                }
            }
        }

        Err(Error::ResetTimeout)
    }

    /// Select the accelerometer full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails; the stored
    /// range is unchanged in that case.
    pub async fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error<I::Error>> {
        self.device
            .accel_config()
            .modify_async(|w| {
                w.set_afs_sel(range.code());
            })
            .await?;
        self.config.accel_range = range;

        #[cfg(feature = "defmt")]
        defmt::debug!("Accelerometer range set to {}", range);
        Ok(())
    }

    /// Select the accelerometer range from a raw `AFS_SEL` code (0-3)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for unknown codes without touching the bus.
    pub async fn set_accel_range_code(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        let range = AccelRange::from_code(code).ok_or(Error::InvalidArgument)?;
        self.set_accel_range(range).await
    }

    /// Select the gyroscope full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails; the stored
    /// range is unchanged in that case.
    pub async fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<I::Error>> {
        self.device
            .gyro_config()
            .modify_async(|w| {
                w.set_fs_sel(range.code());
            })
            .await?;
        self.config.gyro_range = range;

        #[cfg(feature = "defmt")]
        defmt::debug!("Gyroscope range set to {}", range);
        Ok(())
    }

    /// Select the gyroscope range from a raw `FS_SEL` code (0-3)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for unknown codes without touching the bus.
    pub async fn set_gyro_range_code(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        let range = GyroRange::from_code(code).ok_or(Error::InvalidArgument)?;
        self.set_gyro_range(range).await
    }

    /// Write the sample rate divider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.device
            .smplrt_div()
            .write_async(|w| {
                w.set_smplrt_div(divider);
            })
            .await?;
        self.config.sample_rate_divider = divider;

        #[cfg(feature = "defmt")]
        defmt::debug!("Sample rate divider set to {}", divider);
        Ok(())
    }

    /// Select the digital low pass filter
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_lowpass_filter(
        &mut self,
        filter: LowpassFilter,
    ) -> Result<(), Error<I::Error>> {
        self.device
            .config()
            .modify_async(|w| {
                w.set_dlpf_cfg(filter.code());
            })
            .await?;
        self.config.lowpass = filter;

        #[cfg(feature = "defmt")]
        defmt::debug!("Low pass filter set to {}", filter);
        Ok(())
    }

    /// Select the low pass filter from a raw `DLPF_CFG` code (0-6)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for unknown codes without touching the bus.
    pub async fn set_lowpass_filter_code(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        let filter = LowpassFilter::from_code(code).ok_or(Error::InvalidArgument)?;
        self.set_lowpass_filter(filter).await
    }

    /// Put the device to sleep
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn enable_sleep(&mut self) -> Result<(), Error<I::Error>> {
        self.set_power_state(PowerState::Sleeping).await
    }

    /// Wake the device from sleep
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn disable_sleep(&mut self) -> Result<(), Error<I::Error>> {
        self.set_power_state(PowerState::Awake).await
    }

    async fn set_power_state(&mut self, state: PowerState) -> Result<(), Error<I::Error>> {
        self.device
            .pwr_mgmt_1()
            .modify_async(|w| {
                w.set_sleep(state.sleep_enabled());
            })
            .await?;
        self.config.power = state;

        #[cfg(feature = "defmt")]
        defmt::debug!("Power state set to {}", state);
        Ok(())
    }

    /// Read raw accelerometer counts
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_accel_raw(&mut self) -> Result<RawAxes, Error<I::Error>> {
        let reg = self.device.accel_out().read_async().await?;
        Ok(RawAxes::new(reg.accel_x(), reg.accel_y(), reg.accel_z()))
    }

    /// Read raw gyroscope counts
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_gyro_raw(&mut self) -> Result<RawAxes, Error<I::Error>> {
        let reg = self.device.gyro_out().read_async().await?;
        Ok(RawAxes::new(reg.gyro_x(), reg.gyro_y(), reg.gyro_z()))
    }

    /// Read acceleration in m/s²
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_accel(&mut self, apply_bias: bool) -> Result<AccelData, Error<I::Error>> {
        self.warn_if_sleeping();
        let raw = self.read_accel_raw().await?;
        Ok(self.convert_accel(raw, apply_bias))
    }

    /// Read angular rate in rad/s
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_gyro(&mut self, apply_bias: bool) -> Result<GyroData, Error<I::Error>> {
        self.warn_if_sleeping();
        let raw = self.read_gyro_raw().await?;
        Ok(self.convert_gyro(raw, apply_bias))
    }

    /// Read the accelerometer, then the gyroscope, in two transactions
    ///
    /// # Errors
    ///
    /// Returns an error if either read fails.
    pub async fn read_all(&mut self, apply_bias: bool) -> Result<ImuData, Error<I::Error>> {
        let accel = self.read_accel(apply_bias).await?;
        let gyro = self.read_gyro(apply_bias).await?;
        Ok(ImuData { accel, gyro })
    }

    /// Read the die temperature in °C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let reg = self.device.temp_out().read_async().await?;
        Ok(temperature_celsius(reg.temp_out()))
    }

    /// Estimate the bias of every axis by averaging `samples` readings
    ///
    /// The wait between samples is awaited, so other tasks keep running
    /// while calibration is in progress.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `samples` is zero, or the bus
    /// error of a failed read. The previous calibration is kept on error.
    pub async fn calibrate<D>(
        &mut self,
        samples: u16,
        delay: &mut D,
    ) -> Result<Calibration, Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        if samples == 0 {
            return Err(Error::InvalidArgument);
        }
        self.warn_if_sleeping();

        let mut accumulator = BiasAccumulator::new();
        for sample in 0..samples {
            if sample > 0 {
                delay
                    .delay_ms(self.calibration_config.sample_interval_ms)
                    .await;
            }
            let accel = self.read_accel_raw().await?;
            let gyro = self.read_gyro_raw().await?;
            accumulator.push(accel, gyro);
        }

        self.record_calibration(&accumulator)
            .ok_or(Error::InvalidArgument)
    }
}
