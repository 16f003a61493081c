//! Serial session acquisition.
//!
//! A session is an exclusively-owned handle to the module's serial port,
//! opened immediately before a single transfer and dropped right after.
//! Release is tied to ownership, so the port is closed on every exit path
//! including mid-transfer I/O failures.

use std::time::Duration;

use serialport::SerialPort;
use tonebox_protocol::BAUD_RATE;

use crate::error::CliError;

/// Read timeout applied to the port. The protocol itself has no timeout,
/// but the serial layer needs one; it is set long enough to behave as
/// effectively blocking while still surfacing a dead module as an error
/// instead of hanging the process forever.
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Open the module's serial port at the protocol baud rate (8N1 defaults).
pub fn open(path: &str) -> Result<Box<dyn SerialPort>, CliError> {
    tracing::debug!(path, baud = BAUD_RATE, "opening serial port");
    let port = serialport::new(path, BAUD_RATE)
        .timeout(READ_TIMEOUT)
        .open()?;
    Ok(port)
}
