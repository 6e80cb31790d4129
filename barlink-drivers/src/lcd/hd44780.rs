//! HD44780 16x2 character display in 4-bit mode
//!
//! Every byte is sent as two nibbles, high first. Each nibble carries the
//! register-select and backlight bits in its low half.
//!
//! Text is written a full row at a time: content is truncated or padded
//! with spaces to [`LCD_COLUMNS`] cells so stale characters never survive.

use barlink_core::traits::BarcodeDisplay;

use super::{NibbleTransport, BACKLIGHT, RS_COMMAND, RS_DATA};

/// Visible characters per row
pub const LCD_COLUMNS: usize = 16;

/// Number of rows
pub const LCD_ROWS: u8 = 2;

/// First row label for a scanned code
pub const BARCODE_LABEL: &str = "CODE:";

/// Instruction set subset
pub mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    /// Entry mode: increment, no display shift
    pub const ENTRY_LEFT: u8 = 0x02;
    /// Display control: display on, cursor and blink off
    pub const DISPLAY_ON: u8 = 0x04;
    /// Function set: two lines (4-bit bus, 5x8 font implied)
    pub const TWO_LINE: u8 = 0x08;

    /// Wake-up nibble sent three times before selecting the bus width
    pub const WAKE_UP: u8 = 0x03;
}

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; LCD_ROWS as usize] = [0x00, 0x40];

/// Power-on settle time before the first command
const POWER_ON_MS: u32 = 50;

/// Wait after each wake-up command
const WAKE_UP_MS: u32 = 5;

/// Clear display execution time
const CLEAR_MS: u32 = 2;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError<E> {
    /// Transport failure
    Bus(E),
    /// Operation attempted before `init`
    NotInitialized,
}

impl<E> From<E> for LcdError<E> {
    fn from(err: E) -> Self {
        LcdError::Bus(err)
    }
}

/// 16x2 HD44780 display
pub struct Lcd1602<T> {
    transport: T,
    ready: bool,
}

impl<T: NibbleTransport> Lcd1602<T> {
    /// Wrap a transport; call [`init`](Self::init) before writing
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            ready: false,
        }
    }

    /// Whether the power-on sequence has completed
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Release the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Run the power-on sequence and switch to 4-bit, two-line mode
    ///
    /// Safe to call again; the controller is re-synchronized each time.
    pub fn init(&mut self) -> Result<(), LcdError<T::Error>> {
        self.ready = false;
        self.transport.wait_ms(POWER_ON_MS);

        for _ in 0..3 {
            self.command(cmd::WAKE_UP)?;
            self.transport.wait_ms(WAKE_UP_MS);
        }
        self.command(cmd::RETURN_HOME)?;

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINE)?;
        self.command(cmd::ENTRY_MODE_SET | cmd::ENTRY_LEFT)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.clear_display()?;

        self.ready = true;
        Ok(())
    }

    /// Blank both rows and home the cursor
    pub fn clear(&mut self) -> Result<(), LcdError<T::Error>> {
        self.ensure_ready()?;
        self.clear_display()
    }

    /// Move the cursor; rows other than 0 and 1 are ignored
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), LcdError<T::Error>> {
        self.ensure_ready()?;
        let Some(offset) = ROW_OFFSETS.get(row as usize) else {
            return Ok(());
        };
        let col = col.min(LCD_COLUMNS as u8 - 1);
        self.command(cmd::SET_DDRAM_ADDR | (offset + col))
    }

    /// Replace the contents of one row
    ///
    /// Rows other than 0 and 1 are ignored. Non-ASCII characters are shown
    /// as `?`.
    pub fn write_line(&mut self, row: u8, text: &str) -> Result<(), LcdError<T::Error>> {
        self.ensure_ready()?;
        if row >= LCD_ROWS {
            return Ok(());
        }

        let mut cells = [b' '; LCD_COLUMNS];
        for (cell, ch) in cells.iter_mut().zip(text.chars()) {
            *cell = if ch.is_ascii() { ch as u8 } else { b'?' };
        }

        self.set_cursor(row, 0)?;
        for cell in cells {
            self.send(cell, RS_DATA)?;
        }
        Ok(())
    }

    /// Show a scanned code under the `CODE:` label
    pub fn show_barcode(&mut self, code: &str) -> Result<(), LcdError<T::Error>> {
        self.write_line(0, BARCODE_LABEL)?;
        self.write_line(1, code)
    }

    fn ensure_ready(&self) -> Result<(), LcdError<T::Error>> {
        if self.ready {
            Ok(())
        } else {
            Err(LcdError::NotInitialized)
        }
    }

    fn clear_display(&mut self) -> Result<(), LcdError<T::Error>> {
        self.command(cmd::CLEAR_DISPLAY)?;
        self.transport.wait_ms(CLEAR_MS);
        Ok(())
    }

    fn command(&mut self, value: u8) -> Result<(), LcdError<T::Error>> {
        self.send(value, RS_COMMAND)
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), LcdError<T::Error>> {
        let high = mode | (value & 0xF0) | BACKLIGHT;
        let low = mode | ((value << 4) & 0xF0) | BACKLIGHT;
        self.nibble(high)?;
        self.nibble(low)
    }

    fn nibble(&mut self, value: u8) -> Result<(), LcdError<T::Error>> {
        self.transport.write_control_byte(value)?;
        self.transport.pulse_enable(value)?;
        Ok(())
    }
}

impl<T: NibbleTransport> BarcodeDisplay for Lcd1602<T> {
    type Error = LcdError<T::Error>;

    fn show_barcode(&mut self, code: &str) -> Result<(), Self::Error> {
        Lcd1602::show_barcode(self, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcd::Pcf8574;
    use crate::mock::{self, Event, FailAfter, MockDelay, MockI2c};

    use proptest::prelude::*;
    use std::string::String;
    use std::vec::Vec;

    /// Transport that decodes the nibble stream back into bytes
    #[derive(Default)]
    struct Decoder {
        pending_high: Option<u8>,
        commands: Vec<u8>,
        text: Vec<u8>,
        waits: Vec<u32>,
        raw_writes: usize,
    }

    impl NibbleTransport for Decoder {
        type Error = ();

        fn write_control_byte(&mut self, value: u8) -> Result<(), ()> {
            assert_eq!(value & BACKLIGHT, BACKLIGHT, "backlight must stay on");
            self.raw_writes += 1;
            Ok(())
        }

        fn pulse_enable(&mut self, value: u8) -> Result<(), ()> {
            match self.pending_high.take() {
                None => self.pending_high = Some(value),
                Some(high) => {
                    let byte = (high & 0xF0) | (value >> 4);
                    if high & RS_DATA != 0 {
                        self.text.push(byte);
                    } else {
                        self.commands.push(byte);
                    }
                }
            }
            Ok(())
        }

        fn wait_ms(&mut self, ms: u32) {
            self.waits.push(ms);
        }
    }

    fn ready_lcd() -> Lcd1602<Decoder> {
        let mut lcd = Lcd1602::new(Decoder::default());
        lcd.init().unwrap();
        lcd.transport.commands.clear();
        lcd.transport.waits.clear();
        lcd
    }

    fn text(lcd: &Lcd1602<Decoder>) -> String {
        String::from_utf8(lcd.transport.text.clone()).unwrap()
    }

    #[test]
    fn test_init_sequence() {
        let mut lcd = Lcd1602::new(Decoder::default());
        assert!(!lcd.is_ready());
        lcd.init().unwrap();
        assert!(lcd.is_ready());

        assert_eq!(
            lcd.transport.commands,
            [0x03, 0x03, 0x03, 0x02, 0x28, 0x06, 0x0C, 0x01]
        );
        assert_eq!(lcd.transport.waits, [50, 5, 5, 5, 2]);
        assert!(lcd.transport.text.is_empty());
    }

    #[test]
    fn test_requires_init() {
        let mut lcd = Lcd1602::new(Decoder::default());
        assert_eq!(lcd.write_line(0, "x"), Err(LcdError::NotInitialized));
        assert_eq!(lcd.clear(), Err(LcdError::NotInitialized));
        assert_eq!(lcd.show_barcode("x"), Err(LcdError::NotInitialized));
        assert_eq!(lcd.transport.raw_writes, 0);
    }

    #[test]
    fn test_write_line_pads() {
        let mut lcd = ready_lcd();
        lcd.write_line(1, "ABC").unwrap();
        assert_eq!(lcd.transport.commands, [0xC0]);
        assert_eq!(text(&lcd), "ABC             ");
    }

    #[test]
    fn test_write_line_truncates() {
        let mut lcd = ready_lcd();
        lcd.write_line(0, "0123456789ABCDEFGHIJ").unwrap();
        assert_eq!(lcd.transport.commands, [0x80]);
        assert_eq!(text(&lcd), "0123456789ABCDEF");
    }

    #[test]
    fn test_write_line_invalid_row_is_noop() {
        let mut lcd = ready_lcd();
        lcd.write_line(2, "nope").unwrap();
        assert!(lcd.transport.commands.is_empty());
        assert!(lcd.transport.text.is_empty());
    }

    #[test]
    fn test_write_line_replaces_non_ascii() {
        let mut lcd = ready_lcd();
        lcd.write_line(0, "Grüße").unwrap();
        assert_eq!(text(&lcd), "Gr??e           ");
    }

    #[test]
    fn test_show_barcode() {
        let mut lcd = ready_lcd();
        lcd.show_barcode("A1B2C3").unwrap();
        assert_eq!(lcd.transport.commands, [0x80, 0xC0]);
        assert_eq!(text(&lcd), "CODE:           A1B2C3          ");
    }

    #[test]
    fn test_set_cursor_with_column() {
        let mut lcd = ready_lcd();
        lcd.set_cursor(1, 5).unwrap();
        lcd.set_cursor(0, 40).unwrap();
        lcd.set_cursor(3, 0).unwrap();
        assert_eq!(lcd.transport.commands, [0xC5, 0x8F]);
    }

    #[test]
    fn test_clear_waits() {
        let mut lcd = ready_lcd();
        lcd.clear().unwrap();
        assert_eq!(lcd.transport.commands, [0x01]);
        assert_eq!(lcd.transport.waits, [2]);
    }

    #[test]
    fn test_character_nibbles_on_the_wire() {
        let log = mock::log();
        let transport = Pcf8574::new(MockI2c::new(&log), MockDelay::new(&log), 0x27);
        let mut lcd = Lcd1602::new(transport);
        lcd.init().unwrap();
        log.borrow_mut().clear();

        lcd.write_line(0, "A").unwrap();
        let bytes = mock::i2c_bytes(&log);

        // Cursor command 0x80: high nibble 0x8, low nibble 0x0, RS clear
        assert_eq!(&bytes[..6], &[0x88, 0x8C, 0x88, 0x08, 0x0C, 0x08]);
        // 'A' = 0x41: high nibble 0x4, low nibble 0x1, RS set
        assert_eq!(&bytes[6..12], &[0x49, 0x4D, 0x49, 0x19, 0x1D, 0x19]);
        // Cursor plus 16 cells, 2 nibbles each, 3 writes per nibble
        assert_eq!(bytes.len(), 17 * 2 * 3);
    }

    #[test]
    fn test_bus_error_surfaces() {
        let log = mock::log();
        let mut i2c = MockI2c::new(&log);
        i2c.fail = FailAfter(Some(0));
        let mut lcd = Lcd1602::new(Pcf8574::new(i2c, MockDelay::new(&log), 0x27));

        assert_eq!(lcd.init(), Err(LcdError::Bus(mock::MockError)));
        assert!(!lcd.is_ready());
        assert!(log.borrow().iter().all(|e| !matches!(e, Event::I2c { .. })));
    }

    #[test]
    fn test_reinit_allowed() {
        let mut lcd = ready_lcd();
        lcd.init().unwrap();
        assert!(lcd.is_ready());
        assert_eq!(lcd.transport.commands.len(), 8);
    }

    proptest! {
        #[test]
        fn prop_write_line_fills_exactly_one_row(
            row in 0u8..2,
            line in "[ -~]{0,40}",
        ) {
            let mut lcd = ready_lcd();
            lcd.write_line(row, &line).unwrap();

            let mut expected: String = line.chars().take(LCD_COLUMNS).collect();
            while expected.len() < LCD_COLUMNS {
                expected.push(' ');
            }
            let shown = text(&lcd);
            prop_assert_eq!(shown, expected);

            let row_command: u8 = if row == 0 { 0x80 } else { 0xC0 };
            prop_assert_eq!(lcd.transport.commands.as_slice(), &[row_command]);
        }
    }
}
