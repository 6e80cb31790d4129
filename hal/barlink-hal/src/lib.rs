//! Barlink Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the barcode bridge drivers are
//! written against. Chip-specific crates (currently `barlink-hal-rp2040`)
//! implement them, and host tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  barlink-drivers (LCD, CH9121, LED)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  barlink-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ barlink-hal-  │       │  test mocks   │
//! │    rp2040     │       │   (host)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (bridge control lines, status LED)
//! - [`uart::UartTx`] - Serial transmit with runtime baud switching
//! - [`i2c::I2cBus`] - Write-only I2C master (LCD backpack)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use uart::UartTx;
