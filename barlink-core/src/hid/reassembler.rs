//! Edge-triggered keystroke reassembly
//!
//! Only keys absent from the previous snapshot produce characters, so a key
//! held across several polls contributes once. Enter finalizes the buffered
//! barcode: it is shown on the display, sent as one `\n`-terminated line and
//! the indicator is suppressed for the long blink.
//!
//! ```text
//!   report ──► new keys ──► resolve ──┬─ '\r'      ─► finalize (display, send, 3s blink)
//!                                     ├─ printable ─► buffer (300ms blink)
//!                                     └─ other     ─► ignored
//! ```

use core::fmt::Write;

use heapless::{String, Vec};

use super::buffer::{is_printable, BarcodeBuffer, BufferError, BARCODE_CAPACITY};
use super::keymap::{resolve, ENTER};
use super::report::{KeyboardReport, KEY_SLOTS};
use crate::traits::indicator::{BARCODE_SUPPRESS_MS, CHARACTER_SUPPRESS_MS};
use crate::traits::{ActivityIndicator, BarcodeDisplay, LineSender};

/// Capacity of one outgoing line: a full barcode plus the newline
pub const LINE_CAPACITY: usize = BARCODE_CAPACITY + 1;

/// Collaborator results of a finalize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FinalizeStatus {
    /// The display accepted the barcode
    pub displayed: bool,
    /// The line sender accepted the line
    pub sent: bool,
}

/// What happened to one key slot of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyOutcome {
    /// Character appended to the barcode
    Accepted(u8),
    /// Printable character dropped because the barcode is full
    DroppedOverflow(u8),
    /// Key code that produces no printable character
    IgnoredNonPrintable(u8),
    /// Key code already held in the previous report
    Held(u8),
    /// Enter with nothing buffered
    EmptyEnter,
    /// Enter completed a barcode of `len` characters
    Finalized { len: usize, status: FinalizeStatus },
}

/// Outcomes for every non-empty slot of one report, in slot order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportOutcome {
    pub keys: Vec<KeyOutcome, KEY_SLOTS>,
}

impl ReportOutcome {
    /// Barcodes finalized by this report
    pub fn finalized(&self) -> impl Iterator<Item = (usize, FinalizeStatus)> + '_ {
        self.keys.iter().filter_map(|outcome| match outcome {
            KeyOutcome::Finalized { len, status } => Some((*len, *status)),
            _ => None,
        })
    }

    /// Number of characters dropped on overflow
    pub fn dropped(&self) -> usize {
        self.keys
            .iter()
            .filter(|outcome| matches!(outcome, KeyOutcome::DroppedOverflow(_)))
            .count()
    }
}

/// Keystroke reassembler
///
/// Holds the previous report and the barcode being typed. One owner feeds
/// it every report in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Reassembler {
    previous: KeyboardReport,
    buffer: BarcodeBuffer,
}

impl Reassembler {
    pub const fn new() -> Self {
        Self {
            previous: KeyboardReport::empty(),
            buffer: BarcodeBuffer::new(),
        }
    }

    /// Characters buffered since the last finalize
    pub fn pending(&self) -> &str {
        self.buffer.as_str()
    }

    /// The report compared against on the next call
    pub fn previous(&self) -> &KeyboardReport {
        &self.previous
    }

    /// Process one keyboard report
    ///
    /// The report always replaces the stored previous report, whatever the
    /// individual keys produced.
    pub fn process_report<D, S, A>(
        &mut self,
        report: &KeyboardReport,
        display: &mut D,
        sender: &mut S,
        indicator: &mut A,
    ) -> ReportOutcome
    where
        D: BarcodeDisplay,
        S: LineSender,
        A: ActivityIndicator,
    {
        let mut outcome = ReportOutcome::default();
        let shift = report.shift_held();

        for code in report.held_keys() {
            let key = if self.previous.contains(code) {
                KeyOutcome::Held(code)
            } else {
                self.press(resolve(code, shift), code, display, sender, indicator)
            };
            // At most one outcome per slot
            let _ = outcome.keys.push(key);
        }

        self.previous = *report;
        outcome
    }

    fn press<D, S, A>(
        &mut self,
        ch: u8,
        code: u8,
        display: &mut D,
        sender: &mut S,
        indicator: &mut A,
    ) -> KeyOutcome
    where
        D: BarcodeDisplay,
        S: LineSender,
        A: ActivityIndicator,
    {
        if ch == ENTER {
            return self.finalize(display, sender, indicator);
        }

        if !is_printable(ch) {
            return KeyOutcome::IgnoredNonPrintable(code);
        }

        indicator.suppress_for_ms(CHARACTER_SUPPRESS_MS);
        match self.buffer.push(ch) {
            Ok(()) => KeyOutcome::Accepted(ch),
            Err(BufferError::Full) => KeyOutcome::DroppedOverflow(ch),
            Err(BufferError::NotPrintable) => KeyOutcome::IgnoredNonPrintable(code),
        }
    }

    fn finalize<D, S, A>(&mut self, display: &mut D, sender: &mut S, indicator: &mut A) -> KeyOutcome
    where
        D: BarcodeDisplay,
        S: LineSender,
        A: ActivityIndicator,
    {
        if self.buffer.is_empty() {
            return KeyOutcome::EmptyEnter;
        }

        let code = self.buffer.as_str();
        let displayed = display.show_barcode(code).is_ok();

        let mut line: String<LINE_CAPACITY> = String::new();
        let sent = writeln!(line, "{}", code).is_ok() && sender.send_line(&line).is_ok();

        indicator.suppress_for_ms(BARCODE_SUPPRESS_MS);

        let len = self.buffer.len();
        self.buffer.clear();
        KeyOutcome::Finalized {
            len,
            status: FinalizeStatus { displayed, sent },
        }
    }
}
