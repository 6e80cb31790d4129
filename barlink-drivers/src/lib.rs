//! Peripheral drivers
//!
//! This crate provides concrete implementations of the traits defined
//! in barlink-core, written against the barlink-hal bus traits:
//!
//! - HD44780 16x2 character LCD behind a PCF8574 I2C expander
//! - CH9121 UART-to-Ethernet bridge (provisioning and data lines)
//! - Status LED driven by the activity deadline

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bridge;
pub mod indicator;
pub mod lcd;

#[cfg(test)]
pub(crate) mod mock;
