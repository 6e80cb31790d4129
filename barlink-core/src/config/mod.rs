//! Configuration types
//!
//! Values come from `barlink.toml` in the firmware crate. The build script
//! parses it into [`FirmwareConfig`], rejects it if [`FirmwareConfig::issues`]
//! finds anything, and emits the record as a `const`. Runtime code trusts
//! the record as-is.

pub mod check;
pub mod types;

pub use check::ConfigIssue;
pub use types::*;
