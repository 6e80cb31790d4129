//! Collaborator traits
//!
//! These traits define the interface between the keystroke reassembler
//! and the components that consume completed barcodes.

pub mod display;
pub mod indicator;
pub mod network;

pub use display::BarcodeDisplay;
pub use indicator::ActivityIndicator;
pub use network::LineSender;
