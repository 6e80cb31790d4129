//! Deployment configuration checks

use core::fmt;

use heapless::Vec;

use super::types::{FirmwareConfig, Ipv4};

/// Largest number of issues reported at once
pub const MAX_ISSUES: usize = 8;

/// Fastest I2C clock the RP2040 supports (fast mode plus)
const MAX_I2C_HZ: u32 = 1_000_000;

/// A configuration value that would produce a non-working bridge or display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigIssue {
    /// Operational baud rate is zero
    ZeroBaudRate,
    /// Subnet mask has a zero bit before a one bit
    SubnetMaskNotContiguous(Ipv4),
    /// Local port is zero
    ZeroLocalPort,
    /// Client mode with a zero target port
    ZeroTargetPort,
    /// Client mode with target address 0.0.0.0
    MissingTargetIp,
    /// LCD address does not fit in 7 bits
    LcdAddressOutOfRange(u8),
    /// LCD bus clock is zero or faster than the controller supports
    LcdFrequencyOutOfRange(u32),
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::ZeroBaudRate => write!(f, "[bridge] baud_rate must be non-zero"),
            ConfigIssue::SubnetMaskNotContiguous(m) => write!(
                f,
                "[bridge] subnet_mask {}.{}.{}.{} is not contiguous",
                m[0], m[1], m[2], m[3]
            ),
            ConfigIssue::ZeroLocalPort => write!(f, "[bridge] local_port must be non-zero"),
            ConfigIssue::ZeroTargetPort => {
                write!(f, "[bridge] target_port must be non-zero in client modes")
            }
            ConfigIssue::MissingTargetIp => {
                write!(f, "[bridge] target_ip must be set in client modes")
            }
            ConfigIssue::LcdAddressOutOfRange(a) => {
                write!(f, "[lcd] i2c_address 0x{:02X} is not a 7-bit address", a)
            }
            ConfigIssue::LcdFrequencyOutOfRange(hz) => {
                write!(f, "[lcd] i2c_frequency {} Hz must be 1..=1000000", hz)
            }
        }
    }
}

/// Text columns inside a build-time diagnostic box
pub const DIAGNOSTIC_WIDTH: usize = 64;

/// Write `line` as one row of a diagnostic box
///
/// Longer lines are cut by characters, not bytes, and end in `...`; shorter
/// lines are padded so the right border lines up.
pub fn write_boxed_line<W: fmt::Write>(out: &mut W, line: &str) -> fmt::Result {
    out.write_str("║  ")?;
    let count = line.chars().count();
    if count > DIAGNOSTIC_WIDTH {
        for ch in line.chars().take(DIAGNOSTIC_WIDTH - 3) {
            out.write_char(ch)?;
        }
        out.write_str("...")?;
    } else {
        out.write_str(line)?;
        for _ in count..DIAGNOSTIC_WIDTH {
            out.write_char(' ')?;
        }
    }
    out.write_str(" ║")
}

/// Ones followed only by zeros
pub fn is_contiguous_mask(mask: &Ipv4) -> bool {
    let bits = u32::from_be_bytes(*mask);
    bits.leading_ones() + bits.trailing_zeros() == 32
}

impl FirmwareConfig {
    /// Every problem found, in field order
    pub fn issues(&self) -> Vec<ConfigIssue, MAX_ISSUES> {
        let mut issues = Vec::new();
        let bridge = &self.bridge;
        let mut report = |issue| {
            // One issue per check, fewer checks than MAX_ISSUES
            let _ = issues.push(issue);
        };

        if bridge.baud_rate == 0 {
            report(ConfigIssue::ZeroBaudRate);
        }
        if !is_contiguous_mask(&bridge.subnet_mask) {
            report(ConfigIssue::SubnetMaskNotContiguous(bridge.subnet_mask));
        }
        if bridge.local_port == 0 {
            report(ConfigIssue::ZeroLocalPort);
        }
        if bridge.mode.is_client() {
            if bridge.target_port == 0 {
                report(ConfigIssue::ZeroTargetPort);
            }
            if bridge.target_ip == [0; 4] {
                report(ConfigIssue::MissingTargetIp);
            }
        }
        if self.lcd.i2c_address > 0x7F {
            report(ConfigIssue::LcdAddressOutOfRange(self.lcd.i2c_address));
        }
        if self.lcd.i2c_frequency == 0 || self.lcd.i2c_frequency > MAX_I2C_HZ {
            report(ConfigIssue::LcdFrequencyOutOfRange(self.lcd.i2c_frequency));
        }

        issues
    }
}
