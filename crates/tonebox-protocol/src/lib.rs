//! Tonebox Serial Transfer Protocol
//!
//! This crate implements the half-duplex micro-protocol used to move RTTTL
//! melodies between a host and the tonebox music module over a 115200 baud
//! serial link. The module is a cooperative embedded peer with known wake-up
//! latency, so the protocol uses fixed delays instead of a negotiated
//! handshake:
//!
//! - **Upload** (host → module): command byte `0x65`, a settle delay, the
//!   melody bytes paced one at a time, then the `0x1B` terminator.
//! - **Download** (module → host): command byte `0x72`, a settle delay, then
//!   a NUL-terminated byte string from the module.
//!
//! Operations are synchronous, stream-agnostic, and strictly sequential:
//! exactly one transfer runs per port acquisition.
//!
//! # Example
//!
//! ```rust,ignore
//! use tonebox_protocol::{upload, Pacing};
//!
//! let mut port = open_serial_port()?;
//! upload(&mut port, "d=4,o=5,b=125,2a,8a#", &Pacing::default())?;
//! ```

mod constants;
mod error;
mod pacing;
mod transfer;

pub use constants::*;
pub use error::*;
pub use pacing::*;
pub use transfer::*;
