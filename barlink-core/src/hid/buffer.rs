//! Bounded barcode accumulator

use heapless::String;

/// Maximum number of characters held for one barcode
pub const BARCODE_CAPACITY: usize = 63;

/// Reasons a character was not appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// Buffer already holds [`BARCODE_CAPACITY`] characters
    Full,
    /// Character outside printable ASCII (32..=126)
    NotPrintable,
}

/// Printable ASCII characters of the barcode being scanned
#[derive(Debug, Clone, Default)]
pub struct BarcodeBuffer {
    chars: String<BARCODE_CAPACITY>,
}

impl BarcodeBuffer {
    pub const fn new() -> Self {
        Self {
            chars: String::new(),
        }
    }

    /// Append one printable ASCII character
    pub fn push(&mut self, ch: u8) -> Result<(), BufferError> {
        if !is_printable(ch) {
            return Err(BufferError::NotPrintable);
        }
        self.chars
            .push(ch as char)
            .map_err(|_| BufferError::Full)
    }

    pub fn as_str(&self) -> &str {
        self.chars.as_str()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chars.len() == BARCODE_CAPACITY
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }
}

/// Space through tilde
pub fn is_printable(ch: u8) -> bool {
    (32..=126).contains(&ch)
}
