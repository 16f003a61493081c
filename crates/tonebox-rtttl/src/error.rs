//! Error types for tonebox-rtttl.

use thiserror::Error;

/// Errors that can occur while extracting an RTTTL record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no RTTTL data at all.
    #[error("no RTTTL data found in input")]
    Empty,
}
