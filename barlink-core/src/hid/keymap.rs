//! HID usage ID to ASCII translation
//!
//! US keyboard layout. Each entry is `[unshifted, shifted]`; zero means the
//! key produces no character.

/// Carriage return, produced by Enter and keypad Enter
pub const ENTER: u8 = b'\r';

/// Translation table for usage IDs 0x00..=0x7F
pub const KEYCODE_TO_ASCII: [[u8; 2]; 128] = build_table();

const fn build_table() -> [[u8; 2]; 128] {
    let mut table = [[0u8; 2]; 128];

    // 0x04..=0x1D: letters
    let mut i = 0;
    while i < 26 {
        table[0x04 + i] = [b'a' + i as u8, b'A' + i as u8];
        i += 1;
    }

    // 0x1E..=0x27: top row digits 1-9, 0
    let digits = *b"1234567890";
    let symbols = *b"!@#$%^&*()";
    let mut i = 0;
    while i < 10 {
        table[0x1E + i] = [digits[i], symbols[i]];
        i += 1;
    }

    table[0x28] = [ENTER, ENTER];
    table[0x29] = [0x1B, 0x1B]; // escape
    table[0x2A] = [0x08, 0x08]; // backspace
    table[0x2B] = [b'\t', b'\t'];
    table[0x2C] = [b' ', b' '];

    // 0x2D..=0x38: punctuation
    let plain = *b"-=[]\\#;'`,./";
    let shifted = *b"_+{}|~:\"~<>?";
    let mut i = 0;
    while i < 12 {
        table[0x2D + i] = [plain[i], shifted[i]];
        i += 1;
    }

    // Keypad operators and enter
    table[0x54] = [b'/', b'/'];
    table[0x55] = [b'*', b'*'];
    table[0x56] = [b'-', b'-'];
    table[0x57] = [b'+', b'+'];
    table[0x58] = [ENTER, ENTER];

    // 0x59..=0x62: keypad 1-9, 0; shifted they are navigation keys
    let mut i = 0;
    while i < 10 {
        table[0x59 + i] = [digits[i], 0];
        i += 1;
    }
    table[0x5D] = [b'5', b'5'];
    table[0x63] = [b'.', 0];
    table[0x67] = [b'=', b'='];

    table
}

/// Translate a usage ID, honoring shift
///
/// Codes outside the table resolve to zero.
pub fn resolve(code: u8, shift: bool) -> u8 {
    match KEYCODE_TO_ASCII.get(code as usize) {
        Some(entry) => entry[shift as usize],
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert_eq!(resolve(0x04, false), b'a');
        assert_eq!(resolve(0x04, true), b'A');
        assert_eq!(resolve(0x1D, false), b'z');
        assert_eq!(resolve(0x1D, true), b'Z');
    }

    #[test]
    fn test_top_row() {
        assert_eq!(resolve(0x1E, false), b'1');
        assert_eq!(resolve(0x1E, true), b'!');
        assert_eq!(resolve(0x27, false), b'0');
        assert_eq!(resolve(0x27, true), b')');
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(resolve(0x28, false), ENTER);
        assert_eq!(resolve(0x58, true), ENTER);
        assert_eq!(resolve(0x29, false), 0x1B);
        assert_eq!(resolve(0x2A, false), 0x08);
        assert_eq!(resolve(0x2C, true), b' ');
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(resolve(0x2D, false), b'-');
        assert_eq!(resolve(0x2D, true), b'_');
        assert_eq!(resolve(0x31, true), b'|');
        assert_eq!(resolve(0x34, true), b'"');
        assert_eq!(resolve(0x38, false), b'/');
        assert_eq!(resolve(0x38, true), b'?');
    }

    #[test]
    fn test_keypad() {
        assert_eq!(resolve(0x59, false), b'1');
        assert_eq!(resolve(0x59, true), 0);
        assert_eq!(resolve(0x5D, true), b'5');
        assert_eq!(resolve(0x62, false), b'0');
        assert_eq!(resolve(0x63, false), b'.');
        assert_eq!(resolve(0x67, true), b'=');
    }

    #[test]
    fn test_unmapped_codes() {
        // Function keys, arrows
        assert_eq!(resolve(0x3A, false), 0);
        assert_eq!(resolve(0x4F, true), 0);
        assert_eq!(resolve(0x7F, false), 0);
        assert_eq!(resolve(0x80, false), 0);
        assert_eq!(resolve(0xFF, true), 0);
    }
}
