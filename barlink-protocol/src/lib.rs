//! CH9121 Configuration Protocol
//!
//! This crate defines the binary command frames used to provision the
//! CH9121 UART-to-Ethernet bridge. While the module's CFG line is held low
//! it interprets UART bytes as commands instead of forwarding them to the
//! network.
//!
//! # Protocol Overview
//!
//! Every command uses the same frame layout:
//! ```text
//! ┌──────────┬─────────┬─────────────┐
//! │ PREAMBLE │ COMMAND │ PAYLOAD     │
//! │ 57 AB    │ 1B      │ 0/1/2/4B    │
//! └──────────┴─────────┴─────────────┘
//! ```
//!
//! The payload length is implied by the command. There is no checksum and
//! no acknowledgement; the host paces commands with fixed delays instead.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod frame;
pub mod provisioning;

pub use command::Command;
pub use config::{BridgeConfig, BridgeMode, Ipv4};
pub use frame::{Frame, FrameError, FrameParser, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE, PREAMBLE};
pub use provisioning::{commit_frames, field_frames, CONFIG_BAUDRATE, COMMIT_SEQUENCE, FIELD_COUNT};
