//! Status LED
//!
//! Applies an [`ActivityDeadline`] to an active-high LED pin. The LED is
//! lit while idle; activity turns it off immediately and the periodic
//! [`service`](StatusLed::service) call relights it once the deadline passes.

use barlink_core::indicator::ActivityDeadline;
use barlink_hal::OutputPin;

/// Activity LED on a GPIO pin
pub struct StatusLed<P> {
    pin: P,
    deadline: ActivityDeadline,
}

impl<P: OutputPin> StatusLed<P> {
    /// Take the pin; the LED stays dark until the first `service` call
    pub fn new(mut pin: P) -> Self {
        pin.set_low();
        Self {
            pin,
            deadline: ActivityDeadline::new(),
        }
    }

    /// Turn the LED off now and keep it off for `ms` milliseconds
    pub fn request_off(&mut self, now_ms: u32, ms: u32) {
        self.deadline.request_off(now_ms, ms);
        self.pin.set_low();
    }

    /// Update the pin from the deadline
    pub fn service(&mut self, now_ms: u32) {
        self.pin.set_state(self.deadline.is_lit(now_ms));
    }

    pub fn is_lit(&self) -> bool {
        self.pin.is_set_high()
    }

    pub fn deadline(&self) -> &ActivityDeadline {
        &self.deadline
    }
}
