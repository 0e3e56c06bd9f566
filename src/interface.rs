//! Bus interfaces for the MPU-6050
//!
//! The driver reaches the device through any `device-driver` register
//! interface with `u8` addresses. [`I2cInterface`] and [`SpiInterface`]
//! cover the two serial buses; a custom transport only has to implement
//! `RegisterInterface` (or `AsyncRegisterInterface` with the `async`
//! feature).

use crate::{I2C_ADDRESS_AD0_HIGH, I2C_ADDRESS_AD0_LOW};

use device_driver::RegisterInterface;

/// Largest data payload of a single register write
pub const MAX_WRITE_LEN: usize = 32;

/// Copy `address` and `data` into `buffer`, returning the used length
///
/// Payloads longer than [`MAX_WRITE_LEN`] are cut to that length.
fn frame_write(buffer: &mut [u8; MAX_WRITE_LEN + 1], address: u8, data: &[u8]) -> usize {
    debug_assert!(
        data.len() <= MAX_WRITE_LEN,
        "register write of {} bytes exceeds {} bytes",
        data.len(),
        MAX_WRITE_LEN
    );
    buffer[0] = address;
    let len = data.len().min(MAX_WRITE_LEN);
    buffer[1..=len].copy_from_slice(&data[..len]);
    len + 1
}

/// I2C interface for the MPU-6050
///
/// The bus can be owned or borrowed: `embedded-hal` implements its I2C trait
/// for `&mut I2C`, so `I2cInterface::default(&mut i2c)` ties the driver to
/// the bus for its lifetime without taking it away from the caller.
///
/// A single register write carries at most [`MAX_WRITE_LEN`] data bytes.
/// Every register the driver writes is one byte wide.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x68, AD0 pin LOW)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Mpu6050::new(interface)?;
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x69, AD0 pin HIGH)
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address used for every transaction
    #[must_use]
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        let len = frame_write(&mut buffer, address, write_data);
        self.i2c.write(self.address, &buffer[..len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c
            .write_read(self.address, &[address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        let len = frame_write(&mut buffer, address, write_data);
        self.i2c.write(self.address, &buffer[..len]).await
    }
}

/// SPI interface for the MPU-6000, the SPI variant sharing the MPU-6050 register map
///
/// Chip select is handled by the `SpiDevice` implementation, e.g.
/// `embedded_hal_bus::spi::ExclusiveDevice`. Writes are limited to
/// [`MAX_WRITE_LEN`] data bytes, as for [`I2cInterface`].
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

/// Read flag in the SPI address byte
const SPI_READ: u8 = 0x80;

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut operations = [
            embedded_hal::spi::Operation::Write(&[address | SPI_READ]),
            embedded_hal::spi::Operation::Read(read_data),
        ];
        self.spi.transaction(&mut operations)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        let len = frame_write(&mut buffer, address & !SPI_READ, write_data);
        self.spi.write(&buffer[..len])
    }
}

#[cfg(feature = "async")]
impl<SPI, E> device_driver::AsyncRegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal_async::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut operations = [
            embedded_hal_async::spi::Operation::Write(&[address | SPI_READ]),
            embedded_hal_async::spi::Operation::Read(read_data),
        ];
        self.spi.transaction(&mut operations).await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        let len = frame_write(&mut buffer, address & !SPI_READ, write_data);
        self.spi.write(&buffer[..len]).await
    }
}
