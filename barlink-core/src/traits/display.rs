//! Local barcode display

/// Trait for the operator-facing display
///
/// Completed barcodes reach the display only through this trait.
pub trait BarcodeDisplay {
    /// Error type for display transfers
    type Error;

    /// Show a completed barcode
    ///
    /// Implementations truncate codes that do not fit.
    fn show_barcode(&mut self, code: &str) -> Result<(), Self::Error>;
}
