//! Activity indicator

/// Character accepted (short blink)
pub const CHARACTER_SUPPRESS_MS: u32 = 300;

/// Barcode finalized (long blink)
pub const BARCODE_SUPPRESS_MS: u32 = 3000;

/// Trait for the scan activity indicator
///
/// The indicator is normally lit; activity turns it off for a while. The
/// implementation owns the on/off timing.
pub trait ActivityIndicator {
    /// Turn the indicator off for `ms` milliseconds from now
    fn suppress_for_ms(&mut self, ms: u32);
}
