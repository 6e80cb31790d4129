//! Configuration type definitions
//!
//! The bridge record itself is defined next to its wire encoding in
//! `barlink-protocol` and re-exported here so application code has one
//! place to find every configuration type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use barlink_protocol::{BridgeConfig, BridgeMode, Ipv4};

/// Default PCF8574 address on common LCD1602 backpacks
pub const DEFAULT_LCD_ADDRESS: u8 = 0x27;

/// Default I2C clock for the LCD backpack (standard mode)
pub const DEFAULT_LCD_I2C_HZ: u32 = 100_000;

/// Character LCD configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LcdConfig {
    /// 7-bit I2C address of the PCF8574 expander
    pub i2c_address: u8,
    /// I2C clock frequency in Hz
    pub i2c_frequency: u32,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            i2c_address: DEFAULT_LCD_ADDRESS,
            i2c_frequency: DEFAULT_LCD_I2C_HZ,
        }
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FirmwareConfig {
    /// CH9121 network settings
    pub bridge: BridgeConfig,
    /// Character display settings
    #[cfg_attr(feature = "serde", serde(default))]
    pub lcd: LcdConfig,
}
