//! Network bridge drivers

pub mod ch9121;

pub use ch9121::{BridgeError, Ch9121, ProvisionReport};
