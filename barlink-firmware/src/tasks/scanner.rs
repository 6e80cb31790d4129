//! Barcode scanner task
//!
//! Owns the reassembler, the LCD and the bridge data channel. Reports are
//! processed one at a time in arrival order, so the reassembler needs no
//! locking.

use defmt::*;
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;

use barlink_core::hid::{KeyOutcome, Reassembler};
use barlink_core::traits::ActivityIndicator;
use barlink_drivers::bridge::Ch9121;
use barlink_drivers::lcd::{Lcd1602, Pcf8574};
use barlink_hal_rp2040::{GpioOutput, RpI2c, RpUartTx};

use super::uptime_ms;
use crate::channels::{HID_REPORTS, LED_SUPPRESS};

/// LCD1602 on I2C0
pub type Display = Lcd1602<Pcf8574<RpI2c<'static, I2C0>, Delay>>;

/// CH9121 on UART0 with CFG and RST outputs
pub type Bridge = Ch9121<RpUartTx<'static>, GpioOutput<'static>, GpioOutput<'static>, Delay>;

/// Forwards suppress requests to the indicator task
struct LedRequests;

impl ActivityIndicator for LedRequests {
    fn suppress_for_ms(&mut self, ms: u32) {
        LED_SUPPRESS.signal((uptime_ms(), ms));
    }
}

#[embassy_executor::task]
pub async fn scanner_task(mut display: Display, mut bridge: Bridge) {
    info!("Scanner task started");

    let mut reassembler = Reassembler::new();
    let mut indicator = LedRequests;

    loop {
        let report = HID_REPORTS.receive().await;
        let outcome = reassembler.process_report(&report, &mut display, &mut bridge, &mut indicator);

        for key in outcome.keys.iter() {
            match *key {
                KeyOutcome::Accepted(ch) => trace!("+ {}", ch as char),
                KeyOutcome::IgnoredNonPrintable(code) => trace!("Ignored key 0x{:02x}", code),
                _ => {}
            }
        }

        let dropped = outcome.dropped();
        if dropped > 0 {
            warn!("Barcode buffer full, dropped {} chars", dropped);
        }

        for (len, status) in outcome.finalized() {
            info!("Barcode complete: {} chars", len);
            if !status.displayed {
                warn!("LCD update failed");
            }
            if !status.sent {
                warn!("Network send failed (link {:?})", bridge.phase());
            }
        }
    }
}
