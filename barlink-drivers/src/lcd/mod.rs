//! Character LCD drivers
//!
//! The HD44780 controller is wired in 4-bit mode behind a PCF8574 I2C
//! port expander. Each expander write sets all eight lines at once:
//!
//! ```text
//!   bit  7   6   5   4   3          2    1    0
//!       D7  D6  D5  D4  BACKLIGHT  EN   RW   RS
//! ```

pub mod hd44780;
pub mod pcf8574;

pub use hd44780::{Lcd1602, LcdError};
pub use pcf8574::Pcf8574;

/// Backlight transistor, kept on in every write
pub const BACKLIGHT: u8 = 0x08;

/// HD44780 enable strobe
pub const ENABLE: u8 = 0x04;

/// Register select: data register
pub const RS_DATA: u8 = 0x01;

/// Register select: instruction register
pub const RS_COMMAND: u8 = 0x00;

/// Transport carrying HD44780 nibbles
///
/// A nibble is presented on the data lines with [`write_control_byte`]
/// and latched with [`pulse_enable`].
///
/// [`write_control_byte`]: NibbleTransport::write_control_byte
/// [`pulse_enable`]: NibbleTransport::pulse_enable
pub trait NibbleTransport {
    /// Error type for bus transfers
    type Error;

    /// Drive all expander lines to `value`
    fn write_control_byte(&mut self, value: u8) -> Result<(), Self::Error>;

    /// Strobe the enable line with the data lines held at `value`
    fn pulse_enable(&mut self, value: u8) -> Result<(), Self::Error>;

    /// Block for at least `ms` milliseconds
    fn wait_ms(&mut self, ms: u32);
}
