//! Activity LED task
//!
//! Applies suppress requests from the scanner task and relights the LED
//! once the deadline has passed.

use defmt::*;
use embassy_time::{Duration, Ticker};

use barlink_drivers::indicator::StatusLed;
use barlink_hal_rp2040::GpioOutput;

use super::uptime_ms;
use crate::channels::LED_SUPPRESS;

/// Service interval in milliseconds
pub const SERVICE_INTERVAL_MS: u64 = 10;

#[embassy_executor::task]
pub async fn indicator_task(mut led: StatusLed<GpioOutput<'static>>) {
    info!("Indicator task started");

    let mut ticker = Ticker::every(Duration::from_millis(SERVICE_INTERVAL_MS));

    loop {
        if let Some((requested_at, ms)) = LED_SUPPRESS.try_take() {
            trace!("LED off for {}ms", ms);
            led.request_off(requested_at, ms);
        }
        led.service(uptime_ms());

        ticker.next().await;
    }
}
