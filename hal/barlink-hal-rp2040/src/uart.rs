//! Blocking UART transmitter
//!
//! RP2040 has two UART peripherals (UART0 and UART1). The CH9121 only
//! receives from the host, so the adapter exposes transmit operations only.

use barlink_hal::uart::{DataBits, Parity, StopBits, UartConfig, UartTx};
use embassy_rp::uart::{self, Blocking};

/// embassy-rp configuration for the given framing
pub fn embassy_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// Blocking UART with runtime baud switching
///
/// Only the TX half is used, but embassy-rp can only change the baud rate
/// of a full [`uart::Uart`], so RX stays claimed with it.
pub struct RpUartTx<'d> {
    uart: uart::Uart<'d, Blocking>,
}

impl<'d> RpUartTx<'d> {
    pub fn new(uart: uart::Uart<'d, Blocking>) -> Self {
        Self { uart }
    }
}

impl UartTx for RpUartTx<'_> {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.uart.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.uart.blocking_flush()
    }

    fn set_baudrate(&mut self, baudrate: u32) -> Result<(), Self::Error> {
        // Bytes still in the FIFO would go out at the new rate
        self.uart.blocking_flush()?;
        self.uart.set_baudrate(baudrate);
        Ok(())
    }
}
