//! Blocking I2C master

use barlink_hal::i2c::{I2cBus, I2cConfig};
use embassy_rp::i2c::{self, AbortReason, Blocking, I2c, Instance};

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// No device acknowledged the address or data
    Nack,
    /// Arbitration lost to another master
    ArbitrationLost,
    /// Address outside the 7-bit range
    InvalidAddress,
    /// Other error
    Other,
}

impl From<i2c::Error> for I2cBusError {
    fn from(e: i2c::Error) -> Self {
        match e {
            i2c::Error::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
            i2c::Error::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
            i2c::Error::AddressOutOfRange(_) => I2cBusError::InvalidAddress,
            _ => I2cBusError::Other,
        }
    }
}

/// embassy-rp configuration for the given bus settings
pub fn embassy_config(config: &I2cConfig) -> i2c::Config {
    let mut cfg = i2c::Config::default();
    cfg.frequency = config.frequency;
    cfg
}

/// Blocking I2C bus
pub struct RpI2c<'d, T: Instance> {
    bus: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> RpI2c<'d, T> {
    pub fn new(bus: I2c<'d, T, Blocking>) -> Self {
        Self { bus }
    }
}

impl<T: Instance> I2cBus for RpI2c<'_, T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.blocking_write(address, data)?;
        Ok(())
    }
}
