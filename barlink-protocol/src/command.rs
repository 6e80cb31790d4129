//! CH9121 command opcodes

/// Configuration commands understood by the CH9121 in configuration mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Port 1 network mode (1 byte)
    Mode,
    /// Module IP address (4 bytes)
    LocalIp,
    /// Subnet mask (4 bytes)
    SubnetMask,
    /// Gateway address (4 bytes)
    Gateway,
    /// Port 1 local port (2 bytes, little-endian)
    LocalPort,
    /// Port 1 destination IP (4 bytes)
    TargetIp,
    /// Port 1 destination port (2 bytes, little-endian)
    TargetPort,
    /// Port 1 UART baud rate (4 bytes, little-endian)
    BaudRate,
    /// Save parameters to EEPROM
    SaveToEeprom,
    /// Apply the saved configuration and reset the module
    ApplyAndReset,
    /// Leave serial configuration mode
    ExitConfig,
}

// Wire format values
const CMD_MODE: u8 = 0x10;
const CMD_LOCAL_IP: u8 = 0x11;
const CMD_SUBNET_MASK: u8 = 0x12;
const CMD_GATEWAY: u8 = 0x13;
const CMD_LOCAL_PORT: u8 = 0x14;
const CMD_TARGET_IP: u8 = 0x15;
const CMD_TARGET_PORT: u8 = 0x16;
const CMD_BAUD_RATE: u8 = 0x21;
const CMD_SAVE_TO_EEPROM: u8 = 0x0D;
const CMD_APPLY_AND_RESET: u8 = 0x0E;
const CMD_EXIT_CONFIG: u8 = 0x5E;

impl Command {
    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_MODE => Some(Command::Mode),
            CMD_LOCAL_IP => Some(Command::LocalIp),
            CMD_SUBNET_MASK => Some(Command::SubnetMask),
            CMD_GATEWAY => Some(Command::Gateway),
            CMD_LOCAL_PORT => Some(Command::LocalPort),
            CMD_TARGET_IP => Some(Command::TargetIp),
            CMD_TARGET_PORT => Some(Command::TargetPort),
            CMD_BAUD_RATE => Some(Command::BaudRate),
            CMD_SAVE_TO_EEPROM => Some(Command::SaveToEeprom),
            CMD_APPLY_AND_RESET => Some(Command::ApplyAndReset),
            CMD_EXIT_CONFIG => Some(Command::ExitConfig),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Command::Mode => CMD_MODE,
            Command::LocalIp => CMD_LOCAL_IP,
            Command::SubnetMask => CMD_SUBNET_MASK,
            Command::Gateway => CMD_GATEWAY,
            Command::LocalPort => CMD_LOCAL_PORT,
            Command::TargetIp => CMD_TARGET_IP,
            Command::TargetPort => CMD_TARGET_PORT,
            Command::BaudRate => CMD_BAUD_RATE,
            Command::SaveToEeprom => CMD_SAVE_TO_EEPROM,
            Command::ApplyAndReset => CMD_APPLY_AND_RESET,
            Command::ExitConfig => CMD_EXIT_CONFIG,
        }
    }

    /// Number of payload bytes that follow this command on the wire
    pub fn payload_len(self) -> usize {
        match self {
            Command::Mode => 1,
            Command::LocalPort | Command::TargetPort => 2,
            Command::LocalIp
            | Command::SubnetMask
            | Command::Gateway
            | Command::TargetIp
            | Command::BaudRate => 4,
            Command::SaveToEeprom | Command::ApplyAndReset | Command::ExitConfig => 0,
        }
    }
}
