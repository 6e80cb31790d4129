//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use barlink_core::hid::KeyboardReport;

/// Channel capacity for keyboard reports
///
/// A scanner types one key per report pair; eight reports cover bursts
/// while the scanner task is busy repainting the LCD.
const HID_REPORT_CHANNEL_SIZE: usize = 8;

/// Keyboard reports from the USB host stack, in arrival order
pub static HID_REPORTS: Channel<CriticalSectionRawMutex, KeyboardReport, HID_REPORT_CHANNEL_SIZE> =
    Channel::new();

/// Activity indicator suppress request
///
/// Value is `(requested_at_ms, duration_ms)`. A newer request replaces an
/// unserviced one.
pub static LED_SUPPRESS: Signal<CriticalSectionRawMutex, (u32, u32)> = Signal::new();
