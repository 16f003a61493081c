//! Error type for the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can terminate an invocation without a completed transfer.
#[derive(Debug, Error)]
pub enum CliError {
    /// The RTTTL file could not be read or written.
    #[error("file error for {path}: {source}")]
    File {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file's contents were not a usable RTTTL record.
    #[error(transparent)]
    Parse(#[from] tonebox_rtttl::ParseError),

    /// The transfer itself failed.
    #[error(transparent)]
    Transfer(#[from] tonebox_protocol::TransferError),

    /// The serial port could not be opened.
    #[error("serial port error: {0}")]
    Port(#[from] serialport::Error),
}
