//! I2C master
//!
//! The only I2C device on the board is the LCD backpack's PCF8574, which
//! takes single-byte writes and is never read back.

/// Write-only I2C master
pub trait I2cBus {
    type Error;

    /// Write `data` to the 7-bit `address` as one transaction
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// Bus clock settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// SCL frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// 100 kHz standard mode, what PCF8574 backpacks are rated for
    pub const STANDARD: Self = Self { frequency: 100_000 };
}
