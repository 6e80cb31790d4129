//! Board-agnostic core logic for the barcode bridge firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Keystroke-to-barcode reassembly from HID keyboard reports
//! - Collaborator traits (display, network line sender, activity indicator)
//! - Link phase state machine gating the shared bridge UART
//! - Activity indicator deadline logic
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod hid;
pub mod indicator;
pub mod state;
pub mod traits;
