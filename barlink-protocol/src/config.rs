//! Bridge configuration record
//!
//! The record is built once by the application, handed to the provisioning
//! sequence by reference and never mutated. Field values are trusted as-is;
//! checking them is a build-time tooling concern.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// IPv4 address in network (octet) order
pub type Ipv4 = [u8; 4];

/// CH9121 network operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BridgeMode {
    /// Wait for an incoming TCP connection on the local port
    TcpServer,
    /// Connect to the target IP/port and stream data to it
    #[default]
    TcpClient,
    /// Receive UDP datagrams on the local port
    UdpServer,
    /// Send UDP datagrams to the target IP/port without a connection
    UdpClient,
}

impl BridgeMode {
    /// Wire value for the mode command payload
    pub fn to_byte(self) -> u8 {
        match self {
            BridgeMode::TcpServer => 0,
            BridgeMode::TcpClient => 1,
            BridgeMode::UdpServer => 2,
            BridgeMode::UdpClient => 3,
        }
    }

    /// Parse a mode from its wire value
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(BridgeMode::TcpServer),
            1 => Some(BridgeMode::TcpClient),
            2 => Some(BridgeMode::UdpServer),
            3 => Some(BridgeMode::UdpClient),
            _ => None,
        }
    }

    /// True for modes that initiate traffic towards the target address
    pub fn is_client(self) -> bool {
        matches!(self, BridgeMode::TcpClient | BridgeMode::UdpClient)
    }
}

/// Network and serial settings written into the CH9121
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BridgeConfig {
    /// Operating mode
    pub mode: BridgeMode,
    /// Module IP address
    pub local_ip: Ipv4,
    /// Gateway address
    pub gateway: Ipv4,
    /// Subnet mask
    pub subnet_mask: Ipv4,
    /// Remote host address (client modes)
    pub target_ip: Ipv4,
    /// Local port
    pub local_port: u16,
    /// Remote host port (client modes)
    pub target_port: u16,
    /// UART baud rate used for data traffic after provisioning
    pub baud_rate: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            mode: BridgeMode::TcpClient,
            local_ip: [192, 168, 0, 105],
            gateway: [192, 168, 0, 1],
            subnet_mask: [255, 255, 255, 0],
            target_ip: [192, 168, 0, 86],
            local_port: 4000,
            target_port: 5000,
            baud_rate: 115_200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_wire_values() {
        assert_eq!(BridgeMode::TcpServer.to_byte(), 0);
        assert_eq!(BridgeMode::TcpClient.to_byte(), 1);
        assert_eq!(BridgeMode::UdpServer.to_byte(), 2);
        assert_eq!(BridgeMode::UdpClient.to_byte(), 3);
        assert_eq!(BridgeMode::from_byte(2), Some(BridgeMode::UdpServer));
        assert_eq!(BridgeMode::from_byte(4), None);
    }

    #[test]
    fn test_client_modes() {
        assert!(BridgeMode::TcpClient.is_client());
        assert!(BridgeMode::UdpClient.is_client());
        assert!(!BridgeMode::TcpServer.is_client());
        assert!(!BridgeMode::UdpServer.is_client());
    }
}
