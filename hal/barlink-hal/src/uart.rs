//! UART serial communication abstractions
//!
//! The CH9121 bridge shares one UART between two phases (configuration at a
//! fixed low baud rate, then data at the operational rate), so the transmit
//! trait includes runtime baud switching.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Reprogram the baud rate
    ///
    /// Implementations flush pending bytes first so nothing queued at the
    /// old rate is clocked out at the new one.
    fn set_baudrate(&mut self, baudrate: u32) -> Result<(), Self::Error>;
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::with_baudrate(115_200)
    }
}

impl UartConfig {
    /// 8N1 framing at the given baud rate
    pub const fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
