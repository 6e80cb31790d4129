//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod indicator;
pub mod scanner;

pub use indicator::indicator_task;
pub use scanner::{scanner_task, Bridge, Display};

use embassy_time::Instant;

/// Milliseconds since boot, wrapping every ~49 days
pub fn uptime_ms() -> u32 {
    Instant::now().as_millis() as u32
}
