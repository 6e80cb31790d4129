//! USB HID host integration
//!
//! The USB host driver calls [`on_report_received`] from its report
//! callback for every keyboard interface. Reports are queued for the
//! scanner task; nothing here blocks.

use defmt::*;

use barlink_core::hid::KeyboardReport;

use crate::channels::HID_REPORTS;

/// Queue one raw keyboard report
///
/// `has_report_id` is set for generic HID collections whose reports start
/// with a report ID byte. Returns `false` if the report was malformed or
/// the queue was full.
#[allow(dead_code)] // called from the USB host driver's report callback
pub fn on_report_received(bytes: &[u8], has_report_id: bool) -> bool {
    let parsed = if has_report_id {
        KeyboardReport::parse_with_id(bytes)
    } else {
        KeyboardReport::parse(bytes)
    };

    let Some(report) = parsed else {
        warn!("Ignoring short HID report ({} bytes)", bytes.len());
        return false;
    };

    if HID_REPORTS.try_send(report).is_err() {
        warn!("HID report queue full, report dropped");
        return false;
    }
    true
}
