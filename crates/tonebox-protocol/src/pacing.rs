//! Transfer timing configuration.
//!
//! The module has no acknowledgment channel, so the protocol substitutes
//! fixed delays for flow control: a settle delay after each command byte
//! (the firmware needs time to switch operating mode) and an inter-byte
//! delay during upload (its interrupt-driven receive buffer cannot keep up
//! with full-speed streaming at 115200 baud). Keeping the delays in one
//! struct lets a future acknowledgment-based scheme replace them without
//! touching call sites.

use std::time::Duration;

/// Fixed delays applied during a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after a command byte, giving the module time to switch into
    /// the requested mode.
    pub settle: Duration,
    /// Pause after each melody byte written during an upload.
    pub inter_byte: Duration,
}

impl Pacing {
    /// Delays matching the module firmware's known wake-up and per-byte
    /// consumption latency.
    pub const fn new() -> Self {
        Pacing {
            settle: Duration::from_millis(200),
            inter_byte: Duration::from_millis(5),
        }
    }

    /// Zero delays, for exercising the protocol against in-memory streams.
    pub const fn none() -> Self {
        Pacing {
            settle: Duration::ZERO,
            inter_byte: Duration::ZERO,
        }
    }

    /// Block for the post-command settle delay.
    pub fn settle_wait(&self) {
        std::thread::sleep(self.settle);
    }

    /// Block for the inter-byte pacing delay.
    pub fn inter_byte_wait(&self) {
        std::thread::sleep(self.inter_byte);
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new()
    }
}
