//! GPIO pin abstractions
//!
//! The bridge module's CFG/RST control lines and the status LED are plain
//! push-pull outputs, so only the output side is modelled here.

/// Push-pull output
///
/// Driving an RP2040 output cannot fail, so neither can these.
pub trait OutputPin {
    fn set_high(&mut self);

    fn set_low(&mut self);

    /// Drive high for `true`, low for `false`
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Last level written
    fn is_set_high(&self) -> bool;

    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
