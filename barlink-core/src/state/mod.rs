//! Link phase state machine
//!
//! The CH9121 shares one UART between configuration frames and barcode
//! data. The phase decides which of the two may use it.

pub mod events;
pub mod machine;

pub use events::LinkEvent;
pub use machine::{LinkPhase, PhaseError};
