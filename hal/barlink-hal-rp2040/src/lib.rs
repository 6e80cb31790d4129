//! RP2040-specific HAL for the barcode bridge firmware
//!
//! This crate provides RP2040 implementations of the shared `barlink-hal`
//! traits on top of embassy-rp's blocking drivers:
//!
//! - I2C master for the LCD backpack
//! - UART transmitter with runtime baud switching for the CH9121
//! - Push-pull GPIO outputs (bridge control lines, status LED)
//! - Board pin map and pin function checks

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod pins;
pub mod uart;

pub use gpio::GpioOutput;
pub use i2c::{I2cBusError, RpI2c};
pub use uart::RpUartTx;
