//! Provisioning command sequence
//!
//! Builds the ordered list of field frames for a [`BridgeConfig`] and the
//! fixed three-step commit that persists them in the module's EEPROM.
//! Timing and line control belong to the driver that sends these frames.

use crate::command::Command;
use crate::config::BridgeConfig;
use crate::frame::{Frame, FrameError};

/// Baud rate the CH9121 listens at while its CFG line is held low
pub const CONFIG_BAUDRATE: u32 = 9600;

/// Number of configuration fields written per provisioning run
pub const FIELD_COUNT: usize = 8;

/// Commit handshake, sent unconditionally in this order
pub const COMMIT_SEQUENCE: [Command; 3] = [
    Command::SaveToEeprom,
    Command::ApplyAndReset,
    Command::ExitConfig,
];

/// Encode every configuration field of `config` in wire order
///
/// Order: mode, local IP, subnet mask, gateway, target IP, local port,
/// target port, baud rate.
pub fn field_frames(config: &BridgeConfig) -> Result<[Frame; FIELD_COUNT], FrameError> {
    Ok([
        Frame::mode(config.mode)?,
        Frame::address(Command::LocalIp, config.local_ip)?,
        Frame::address(Command::SubnetMask, config.subnet_mask)?,
        Frame::address(Command::Gateway, config.gateway)?,
        Frame::address(Command::TargetIp, config.target_ip)?,
        Frame::port(Command::LocalPort, config.local_port)?,
        Frame::port(Command::TargetPort, config.target_port)?,
        Frame::baud_rate(config.baud_rate)?,
    ])
}

/// Encode the commit handshake
pub fn commit_frames() -> Result<[Frame; 3], FrameError> {
    let [save, apply, exit] = COMMIT_SEQUENCE;
    Ok([
        Frame::empty(save)?,
        Frame::empty(apply)?,
        Frame::empty(exit)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BridgeMode;
    use crate::frame::FrameParser;

    use proptest::prelude::*;

    fn deployment_config() -> BridgeConfig {
        BridgeConfig {
            mode: BridgeMode::TcpClient,
            local_ip: [172, 16, 28, 241],
            gateway: [172, 16, 28, 1],
            subnet_mask: [255, 255, 255, 0],
            target_ip: [172, 16, 28, 240],
            local_port: 4000,
            target_port: 5000,
            baud_rate: 115_200,
        }
    }

    #[test]
    fn test_field_order() {
        let frames = field_frames(&deployment_config()).unwrap();
        let order: [Command; FIELD_COUNT] = [
            Command::Mode,
            Command::LocalIp,
            Command::SubnetMask,
            Command::Gateway,
            Command::TargetIp,
            Command::LocalPort,
            Command::TargetPort,
            Command::BaudRate,
        ];
        for (frame, expected) in frames.iter().zip(order) {
            assert_eq!(frame.command, expected);
        }
    }

    #[test]
    fn test_tcp_client_port_frames() {
        let frames = field_frames(&deployment_config()).unwrap();

        let local = frames
            .iter()
            .find(|f| f.command.to_byte() == 0x14)
            .unwrap();
        assert_eq!(local.payload.as_slice(), &[0xA0, 0x0F]);

        let target = frames
            .iter()
            .find(|f| f.command.to_byte() == 0x16)
            .unwrap();
        assert_eq!(target.payload.as_slice(), &[0x88, 0x13]);

        assert_eq!(frames[0].payload.as_slice(), &[1]);
    }

    #[test]
    fn test_addresses_not_swapped() {
        let frames = field_frames(&deployment_config()).unwrap();
        assert_eq!(frames[2].payload.as_slice(), &[255, 255, 255, 0]);
        assert_eq!(frames[3].payload.as_slice(), &[172, 16, 28, 1]);
        assert_eq!(frames[4].payload.as_slice(), &[172, 16, 28, 240]);
    }

    #[test]
    fn test_commit_sequence_bytes() {
        let bytes: [u8; 3] = [
            COMMIT_SEQUENCE[0].to_byte(),
            COMMIT_SEQUENCE[1].to_byte(),
            COMMIT_SEQUENCE[2].to_byte(),
        ];
        assert_eq!(bytes, [0x0D, 0x0E, 0x5E]);

        let frames = commit_frames().unwrap();
        assert_eq!(frames[0].encode_to_vec().as_slice(), &[0x57, 0xAB, 0x0D]);
        assert_eq!(frames[2].encode_to_vec().as_slice(), &[0x57, 0xAB, 0x5E]);
        assert!(frames.iter().all(|f| f.payload.is_empty()));
    }

    proptest! {
        #[test]
        fn prop_encoded_stream_decodes_to_same_fields(
            mode in 0u8..4,
            local_ip in any::<[u8; 4]>(),
            target_ip in any::<[u8; 4]>(),
            local_port in any::<u16>(),
            target_port in any::<u16>(),
            baud_rate in any::<u32>(),
        ) {
            let config = BridgeConfig {
                mode: BridgeMode::from_byte(mode).unwrap(),
                local_ip,
                target_ip,
                local_port,
                target_port,
                baud_rate,
                ..deployment_config()
            };

            let frames = field_frames(&config).unwrap();
            let mut parser = FrameParser::new();
            let mut decoded = 0;
            for frame in frames.iter() {
                let encoded = frame.encode_to_vec();
                let parsed = parser.feed_bytes(&encoded).unwrap().unwrap();
                prop_assert_eq!(&parsed, frame);
                decoded += 1;
            }
            prop_assert_eq!(decoded, FIELD_COUNT);
            prop_assert_eq!(
                u16::from_le_bytes([frames[5].payload[0], frames[5].payload[1]]),
                local_port
            );
            prop_assert_eq!(
                u32::from_le_bytes([
                    frames[7].payload[0],
                    frames[7].payload[1],
                    frames[7].payload[2],
                    frames[7].payload[3],
                ]),
                baud_rate
            );
        }
    }
}
