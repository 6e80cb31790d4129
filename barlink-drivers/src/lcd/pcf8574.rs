//! PCF8574 I2C expander as an HD44780 nibble transport

use barlink_hal::I2cBus;
use embedded_hal::delay::DelayNs;

use super::{NibbleTransport, ENABLE};

/// Setup and hold time around the enable strobe
const ENABLE_SETTLE_US: u32 = 600;

/// PCF8574 backpack on an I2C bus
pub struct Pcf8574<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C: I2cBus, D: DelayNs> Pcf8574<I2C, D> {
    /// Create a transport for the expander at the 7-bit `address`
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus and delay provider
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C: I2cBus, D: DelayNs> NibbleTransport for Pcf8574<I2C, D> {
    type Error = I2C::Error;

    fn write_control_byte(&mut self, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[value])
    }

    fn pulse_enable(&mut self, value: u8) -> Result<(), Self::Error> {
        self.delay.delay_us(ENABLE_SETTLE_US);
        self.write_control_byte(value | ENABLE)?;
        self.delay.delay_us(ENABLE_SETTLE_US);
        self.write_control_byte(value & !ENABLE)?;
        self.delay.delay_us(ENABLE_SETTLE_US);
        Ok(())
    }

    fn wait_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
