//! HID keyboard report snapshots

/// Left shift bit in the modifier byte
pub const LEFT_SHIFT: u8 = 0x02;

/// Right shift bit in the modifier byte
pub const RIGHT_SHIFT: u8 = 0x20;

/// Number of simultaneous key slots in a boot-protocol report
pub const KEY_SLOTS: usize = 6;

/// Boot-protocol report length: modifier, reserved, six key codes
pub const BOOT_REPORT_LEN: usize = 2 + KEY_SLOTS;

/// Snapshot of the keys held at one poll
///
/// A zero key code means the slot is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier bitmask (ctrl/shift/alt/gui, left and right)
    pub modifier: u8,
    /// Held key codes
    pub keycodes: [u8; KEY_SLOTS],
}

impl KeyboardReport {
    /// Create a report from its parts
    pub const fn new(modifier: u8, keycodes: [u8; KEY_SLOTS]) -> Self {
        Self { modifier, keycodes }
    }

    /// Report with no keys and no modifiers held
    pub const fn empty() -> Self {
        Self::new(0, [0; KEY_SLOTS])
    }

    /// Parse a boot-protocol report
    ///
    /// Returns `None` when fewer than [`BOOT_REPORT_LEN`] bytes are given.
    /// Trailing bytes are ignored.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < BOOT_REPORT_LEN {
            return None;
        }

        let mut keycodes = [0u8; KEY_SLOTS];
        keycodes.copy_from_slice(&bytes[2..BOOT_REPORT_LEN]);
        Some(Self::new(bytes[0], keycodes))
    }

    /// Parse a report that starts with a report ID byte
    ///
    /// Generic HID keyboards with several collections prefix every report
    /// with its ID; the ID is dropped and the rest parsed as a boot report.
    pub fn parse_with_id(bytes: &[u8]) -> Option<Self> {
        match bytes.split_first() {
            Some((_id, rest)) => Self::parse(rest),
            None => None,
        }
    }

    /// Either shift key is held
    pub fn shift_held(&self) -> bool {
        self.modifier & (LEFT_SHIFT | RIGHT_SHIFT) != 0
    }

    /// The key code is held in any slot
    pub fn contains(&self, code: u8) -> bool {
        self.keycodes.contains(&code)
    }

    /// Non-empty key slots, in slot order
    pub fn held_keys(&self) -> impl Iterator<Item = u8> + '_ {
        self.keycodes.iter().copied().filter(|&code| code != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boot_report() {
        let report = KeyboardReport::parse(&[0x02, 0x00, 0x0B, 0x0C, 0, 0, 0, 0]).unwrap();
        assert_eq!(report.modifier, LEFT_SHIFT);
        assert_eq!(report.keycodes, [0x0B, 0x0C, 0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_short_report_rejected() {
        assert!(KeyboardReport::parse(&[0x00, 0x00, 0x04]).is_none());
        assert!(KeyboardReport::parse(&[]).is_none());
    }

    #[test]
    fn test_parse_with_id_strips_first_byte() {
        let report = KeyboardReport::parse_with_id(&[0x01, 0x20, 0x00, 0x04, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(report.modifier, RIGHT_SHIFT);
        assert_eq!(report.keycodes[0], 0x04);

        // ID plus a truncated report
        assert!(KeyboardReport::parse_with_id(&[0x01, 0, 0, 0x04]).is_none());
        assert!(KeyboardReport::parse_with_id(&[]).is_none());
    }

    #[test]
    fn test_shift_detection() {
        assert!(!KeyboardReport::empty().shift_held());
        assert!(KeyboardReport::new(LEFT_SHIFT, [0; 6]).shift_held());
        assert!(KeyboardReport::new(RIGHT_SHIFT, [0; 6]).shift_held());
        // Left ctrl only
        assert!(!KeyboardReport::new(0x01, [0; 6]).shift_held());
    }

    #[test]
    fn test_held_keys_skips_empty_slots() {
        let report = KeyboardReport::new(0, [0, 0x04, 0, 0x05, 0, 0]);
        let mut keys = report.held_keys();
        assert_eq!(keys.next(), Some(0x04));
        assert_eq!(keys.next(), Some(0x05));
        assert_eq!(keys.next(), None);
        assert!(report.contains(0x05));
        assert!(!report.contains(0x06));
    }
}
