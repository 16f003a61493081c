//! Protocol constants
//!
//! These constants define the command bytes, terminators, and payload bounds
//! used by the music module's serial transfer protocol.

// ============================================================================
// Command Bytes (host → module)
// ============================================================================

/// Request to store a melody: the module switches into receive mode and
/// writes the following bytes into its EEPROM region.
pub const CMD_UPLOAD_REQUEST: u8 = 0x65;
/// Request to read back the stored melody.
pub const CMD_DOWNLOAD_REQUEST: u8 = 0x72;

// ============================================================================
// Terminators
// ============================================================================

/// End-of-transfer marker sent by the host after the last melody byte of an
/// upload.
pub const EOT_UPLOAD: u8 = 0x1B;
/// Sentinel byte the module appends after the melody on a download. This is
/// the protocol's only message-boundary mechanism: a NUL-terminated byte
/// string, not a length prefix.
pub const EOT_DOWNLOAD: u8 = 0x00;

// ============================================================================
// Payload Bounds
// ============================================================================

/// Smallest melody body accepted for upload. One byte or less is never a
/// usable tone sequence.
pub const MIN_BODY_LEN: usize = 2;
/// Largest melody body that fits the module's EEPROM region (0xFE bytes).
pub const MAX_BODY_LEN: usize = 0xFE;

/// Cap on bytes accumulated while waiting for the download sentinel. A
/// module that never sends [`EOT_DOWNLOAD`] would otherwise grow the read
/// buffer without bound.
pub const MAX_DOWNLOAD_LEN: usize = 4096;

/// Baud rate the module's UART runs at (8N1).
pub const BAUD_RATE: u32 = 115_200;
