//! Keystroke-to-barcode reassembly
//!
//! A keyboard-emulating scanner "types" each barcode followed by Enter.
//! Reports are snapshots of the currently held keys; the [`Reassembler`]
//! compares consecutive snapshots, translates newly pressed keys to ASCII
//! and hands each completed line to the display and network collaborators.

pub mod buffer;
pub mod keymap;
pub mod reassembler;
pub mod report;

pub use buffer::{BarcodeBuffer, BufferError, BARCODE_CAPACITY};
pub use keymap::{resolve, KEYCODE_TO_ASCII};
pub use reassembler::{FinalizeStatus, KeyOutcome, Reassembler, ReportOutcome, LINE_CAPACITY};
pub use report::{KeyboardReport, BOOT_REPORT_LEN, KEY_SLOTS, LEFT_SHIFT, RIGHT_SHIFT};
