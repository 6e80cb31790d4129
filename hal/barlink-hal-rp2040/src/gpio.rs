//! GPIO outputs

use barlink_hal::OutputPin;
use embassy_rp::gpio::Output;

/// Push-pull output implementing the shared pin trait
pub struct GpioOutput<'d> {
    pin: Output<'d>,
}

impl<'d> GpioOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
