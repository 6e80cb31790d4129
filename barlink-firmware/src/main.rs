//! Barlink - Barcode Scanner Bridge Firmware
//!
//! Main firmware binary for a Raspberry Pi Pico with a CH9121 Ethernet hat
//! and an LCD1602 I2C backpack. A USB-HID barcode scanner types codes;
//! each completed code is shown on the LCD and sent to a remote host as one
//! line over Ethernet.
//!
//! Startup order matters: the CH9121 shares UART0 between configuration
//! frames and barcode data, so provisioning runs to completion here before
//! the scanner task is spawned.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::I2c;
use embassy_rp::uart::Uart;
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use barlink_core::config::{BridgeConfig, BridgeMode};
use barlink_drivers::bridge::Ch9121;
use barlink_drivers::indicator::StatusLed;
use barlink_drivers::lcd::{Lcd1602, Pcf8574};
use barlink_hal::i2c::I2cConfig;
use barlink_hal::uart::UartConfig;
use barlink_hal_rp2040::{i2c, pins, uart, GpioOutput, RpI2c, RpUartTx};
use barlink_protocol::{Command, Frame, CONFIG_BAUDRATE};

mod channels;
mod hid;
mod tasks;

include!(concat!(env!("OUT_DIR"), "/barlink_config.rs"));

/// Settle time after the UART switches to the data rate
const LINK_SETTLE_MS: u64 = 500;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Barlink: USB-HID barcode -> LCD + Ethernet (CH9121)");

    let p = embassy_rp::init(Default::default());
    let config = FIRMWARE_CONFIG;

    // Pins below are taken by name; they must match pins::PICO
    if let Err(e) = pins::PICO.check() {
        warn!("Board pin map problem: {:?}", e);
    }

    // Activity LED (GP25)
    let led = StatusLed::new(GpioOutput::new(Output::new(p.PIN_25, Level::Low)));

    // LCD on I2C0 (SDA GP4, SCL GP5)
    let i2c_config = i2c::embassy_config(&I2cConfig {
        frequency: config.lcd.i2c_frequency,
    });
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let mut display: tasks::Display = Lcd1602::new(Pcf8574::new(
        RpI2c::new(bus),
        Delay,
        config.lcd.i2c_address,
    ));
    match display.init() {
        Ok(()) => info!("LCD ready at 0x{:02x}", config.lcd.i2c_address),
        Err(e) => warn!("LCD init failed: {:?}", e),
    }

    // CH9121 on UART0 (TX GP0, RX GP1), CFG GP14, RST GP17
    let uart_config = uart::embassy_config(&UartConfig::with_baudrate(CONFIG_BAUDRATE));
    let serial = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let cfg_pin = GpioOutput::new(Output::new(p.PIN_14, Level::High));
    let rst_pin = GpioOutput::new(Output::new(p.PIN_17, Level::High));
    let mut bridge: tasks::Bridge = Ch9121::new(RpUartTx::new(serial), cfg_pin, rst_pin, Delay);

    provision_bridge(&mut bridge, &config.bridge);
    if !bridge.phase().is_provisioned() {
        warn!("Ethernet bridge unavailable, barcodes go to the LCD only");
    }

    Timer::after(Duration::from_millis(LINK_SETTLE_MS)).await;

    spawner.spawn(tasks::indicator_task(led)).unwrap();
    spawner.spawn(tasks::scanner_task(display, bridge)).unwrap();

    info!("All tasks spawned, waiting for scans");
}

/// Write the configuration record and switch the UART to the data rate
///
/// Failures are logged and the firmware keeps running: the LCD still
/// shows scans, sends are refused by the link phase gate.
fn provision_bridge(bridge: &mut tasks::Bridge, config: &BridgeConfig) {
    info!("Configuring CH9121...");

    match bridge.provision_with(config, log_field) {
        Ok(report) => info!(
            "CH9121 configuration saved ({} frames, {} bytes)",
            report.frames, report.bytes
        ),
        Err(e) => {
            error!("CH9121 configuration failed: {:?}", e);
            return;
        }
    }

    match bridge.enter_operational() {
        Ok(()) => info!("CH9121 data link at {} baud", config.baud_rate),
        Err(e) => error!("Failed to switch CH9121 link to data mode: {:?}", e),
    }
}

/// One progress line per provisioned field
fn log_field(frame: &Frame) {
    match (frame.command, frame.payload.as_slice()) {
        (Command::Mode, &[mode]) => match BridgeMode::from_byte(mode) {
            Some(mode) => info!("  - Mode: {:?}", mode),
            None => info!("  - Mode: {}", mode),
        },
        (Command::LocalPort | Command::TargetPort, &[lo, hi]) => {
            info!("  - {:?}: {}", frame.command, u16::from_le_bytes([lo, hi]))
        }
        (Command::BaudRate, &[a, b, c, d]) => {
            info!("  - Baud rate: {}", u32::from_le_bytes([a, b, c, d]))
        }
        (command, &[a, b, c, d]) => info!("  - {:?}: {}.{}.{}.{}", command, a, b, c, d),
        _ => debug!("  - {:?}", frame),
    }
}
