//! Protocol error types.

use thiserror::Error;

/// Errors that can occur during a melody transfer.
///
/// Every error is terminal for the current operation: there is no retry and
/// no partial-success state. The serial session is always released before an
/// error surfaces to the caller.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Melody body is too short to be usable.
    #[error("melody body too small: {actual} bytes (minimum {min})")]
    PayloadTooSmall {
        /// Required minimum length.
        min: usize,
        /// Actual length of the body.
        actual: usize,
    },

    /// Melody body does not fit the module's EEPROM region.
    #[error("melody body too large for EEPROM: {actual} bytes (maximum {max})")]
    PayloadTooLarge {
        /// Maximum allowed length.
        max: usize,
        /// Actual length of the body.
        actual: usize,
    },

    /// The module returned nothing usable on a download request.
    #[error("no RTTTL data received from the music module")]
    NoData,

    /// Downloaded bytes were not valid UTF-8.
    #[error("received melody is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// The module kept sending bytes without ever terminating the melody.
    #[error("download exceeded {max} bytes without a terminator")]
    Overrun {
        /// Maximum accumulated bytes allowed.
        max: usize,
    },

    /// I/O failure on the underlying serial stream.
    #[error("serial I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for transfer operations.
pub type TransferResult<T> = Result<T, TransferError>;
