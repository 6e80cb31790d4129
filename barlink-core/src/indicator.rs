//! Activity indicator deadline
//!
//! The indicator is lit while idle and goes dark for a while on scan
//! activity. Time is a free-running 32-bit millisecond counter; comparisons
//! use wrapping arithmetic so the ~49 day rollover is harmless.

/// Off-until deadline for the activity indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityDeadline {
    off_until: u32,
}

impl ActivityDeadline {
    pub const fn new() -> Self {
        Self { off_until: 0 }
    }

    /// Keep the indicator dark until `now_ms + ms`
    ///
    /// A new request replaces the previous deadline, even if it is shorter.
    pub fn request_off(&mut self, now_ms: u32, ms: u32) {
        self.off_until = now_ms.wrapping_add(ms);
    }

    /// Whether the indicator should be lit at `now_ms`
    pub fn is_lit(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.off_until) as i32 >= 0
    }

    /// Milliseconds until the indicator lights again, zero when lit
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        if self.is_lit(now_ms) {
            0
        } else {
            self.off_until.wrapping_sub(now_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::indicator::{BARCODE_SUPPRESS_MS, CHARACTER_SUPPRESS_MS};

    #[test]
    fn test_lit_at_boot() {
        let deadline = ActivityDeadline::new();
        assert!(deadline.is_lit(0));
        assert!(deadline.is_lit(1_000));
    }

    #[test]
    fn test_short_blink() {
        let mut deadline = ActivityDeadline::new();
        deadline.request_off(1_000, CHARACTER_SUPPRESS_MS);
        assert!(!deadline.is_lit(1_000));
        assert!(!deadline.is_lit(1_299));
        assert_eq!(deadline.remaining_ms(1_200), 100);
        assert!(deadline.is_lit(1_300));
        assert_eq!(deadline.remaining_ms(1_300), 0);
    }

    #[test]
    fn test_later_request_replaces_deadline() {
        let mut deadline = ActivityDeadline::new();
        deadline.request_off(0, BARCODE_SUPPRESS_MS);
        deadline.request_off(100, CHARACTER_SUPPRESS_MS);
        assert!(deadline.is_lit(400));
    }

    #[test]
    fn test_wraparound() {
        let mut deadline = ActivityDeadline::new();
        let now = u32::MAX - 100;
        deadline.request_off(now, BARCODE_SUPPRESS_MS);
        assert!(!deadline.is_lit(now));
        assert!(!deadline.is_lit(now.wrapping_add(2_999)));
        assert!(deadline.is_lit(now.wrapping_add(3_000)));
        assert_eq!(deadline.remaining_ms(now.wrapping_add(1_000)), 2_000);
    }
}
