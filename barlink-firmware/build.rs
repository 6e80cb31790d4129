//! Build script for barlink-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates barlink.toml and compiles it into `barlink_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use barlink_core::config::check::write_boxed_line;
use barlink_core::config::FirmwareConfig;

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate barlink.toml
fn load_config() -> FirmwareConfig {
    println!("cargo:rerun-if-changed=barlink.toml");

    let config_path = Path::new("barlink.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: barlink.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a barlink.toml configuration file with    ║\n\
            ║  [bridge] and [lcd] tables in the barlink-firmware directory.    ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read barlink.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: FirmwareConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid barlink.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let issues = config.issues();
    if !issues.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in barlink.toml                    ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            issues
                .iter()
                .map(|issue| boxed_line(&format!("• {}", issue)))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=barlink.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines().map(boxed_line).collect::<Vec<_>>().join("\n")
}

fn boxed_line(line: &str) -> String {
    let mut row = String::new();
    write_boxed_line(&mut row, line).unwrap();
    row
}

/// Emit the validated record as a `const` for `main.rs` to include
fn generate_config(config: &FirmwareConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let bridge = &config.bridge;
    let lcd = &config.lcd;

    let source = format!(
        "/// Deployment configuration compiled from barlink.toml\n\
         pub const FIRMWARE_CONFIG: barlink_core::config::FirmwareConfig =\n    \
         barlink_core::config::FirmwareConfig {{\n        \
         bridge: barlink_core::config::BridgeConfig {{\n            \
         mode: barlink_core::config::BridgeMode::{:?},\n            \
         local_ip: {:?},\n            \
         gateway: {:?},\n            \
         subnet_mask: {:?},\n            \
         target_ip: {:?},\n            \
         local_port: {},\n            \
         target_port: {},\n            \
         baud_rate: {},\n        \
         }},\n        \
         lcd: barlink_core::config::LcdConfig {{\n            \
         i2c_address: {:#04x},\n            \
         i2c_frequency: {},\n        \
         }},\n    \
         }};\n",
        bridge.mode,
        bridge.local_ip,
        bridge.gateway,
        bridge.subnet_mask,
        bridge.target_ip,
        bridge.local_port,
        bridge.target_port,
        bridge.baud_rate,
        lcd.i2c_address,
        lcd.i2c_frequency,
    );

    fs::write(out_dir.join("barlink_config.rs"), source).unwrap();
}
