//! Upload and download operations.
//!
//! The transfer protocol is a two-command half-duplex exchange over an
//! unstructured byte stream:
//!
//! ```text
//! upload:    host → module   CMD_UPLOAD_REQUEST, <settle>,
//!                            body[0], <pace>, body[1], <pace>, ...,
//!                            EOT_UPLOAD
//! download:  host → module   CMD_DOWNLOAD_REQUEST, <settle>
//!            module → host   body[0..n], EOT_DOWNLOAD
//! ```
//!
//! Operations are generic over any `Read + Write` byte stream, so they run
//! identically over a serial port or an in-memory test double. The stream is
//! borrowed for a single operation; acquisition and release of the actual
//! port belong to the caller.

use std::io::{ErrorKind, Read, Write};

use bytes::BytesMut;
use tonebox_rtttl::RtttlRecord;

use crate::constants::*;
use crate::error::{TransferError, TransferResult};
use crate::pacing::Pacing;

/// Write a melody body into the module's EEPROM.
///
/// The body length must be within `[MIN_BODY_LEN, MAX_BODY_LEN]`; bounds are
/// checked before any byte touches the stream. Each payload byte is written
/// individually and paced with [`Pacing::inter_byte`] so the module's
/// byte-at-a-time receive loop is never overrun. The melody name is not
/// transmitted: the module has no concept of a title.
pub fn upload<S: Read + Write>(stream: &mut S, body: &str, pacing: &Pacing) -> TransferResult<()> {
    check_body_len(body)?;
    let payload = body.as_bytes();

    log::debug!("uploading {} melody bytes", payload.len());
    stream.write_all(&[CMD_UPLOAD_REQUEST])?;
    stream.flush()?;
    pacing.settle_wait();

    for &byte in payload {
        stream.write_all(&[byte])?;
        stream.flush()?;
        pacing.inter_byte_wait();
    }

    stream.write_all(&[EOT_UPLOAD])?;
    stream.flush()?;
    log::debug!("upload complete");
    Ok(())
}

/// Check that a melody body fits the upload bounds.
///
/// Callers that own the port can run this before acquiring it, so an
/// unusable file fails without any port access at all. [`upload`] repeats
/// the check itself.
pub fn check_body_len(body: &str) -> TransferResult<()> {
    let len = body.len();
    if len < MIN_BODY_LEN {
        return Err(TransferError::PayloadTooSmall {
            min: MIN_BODY_LEN,
            actual: len,
        });
    }
    if len > MAX_BODY_LEN {
        return Err(TransferError::PayloadTooLarge {
            max: MAX_BODY_LEN,
            actual: len,
        });
    }
    Ok(())
}

/// Read the stored melody back from the module.
///
/// The module answers a [`CMD_DOWNLOAD_REQUEST`] with the melody bytes
/// followed by a NUL sentinel. A response of two bytes or fewer means the
/// module holds nothing usable and fails with [`TransferError::NoData`].
/// The returned record carries the fixed placeholder name `untitled` since
/// the wire format has no name field.
pub fn download<S: Read + Write>(stream: &mut S, pacing: &Pacing) -> TransferResult<RtttlRecord> {
    log::debug!("requesting melody download");
    stream.write_all(&[CMD_DOWNLOAD_REQUEST])?;
    stream.flush()?;
    pacing.settle_wait();

    let mut data = read_until_terminator(stream, EOT_DOWNLOAD, MAX_DOWNLOAD_LEN)?;
    log::debug!("received {} bytes from module", data.len());

    if data.len() <= 2 {
        return Err(TransferError::NoData);
    }
    if data.last() == Some(&EOT_DOWNLOAD) {
        data.truncate(data.len() - 1);
    }

    let body = String::from_utf8(data.to_vec())?;
    Ok(RtttlRecord::untitled(body))
}

/// Accumulate bytes from `stream` until `terminator` is observed or the
/// stream is exhausted. The terminator, when seen, is included in the
/// returned buffer.
///
/// Accumulation is capped at `max_len` bytes; a module that babbles without
/// ever sending the terminator trips [`TransferError::Overrun`] instead of
/// growing the buffer forever.
fn read_until_terminator<R: Read>(
    stream: &mut R,
    terminator: u8,
    max_len: usize,
) -> TransferResult<BytesMut> {
    let mut buffer = BytesMut::with_capacity(MAX_BODY_LEN + 1);
    let mut byte = [0u8; 1];

    loop {
        match stream.read(&mut byte) {
            Ok(0) => break, // stream exhausted without a terminator
            Ok(_) => {
                if buffer.len() >= max_len {
                    return Err(TransferError::Overrun { max: max_len });
                }
                buffer.extend_from_slice(&byte);
                if byte[0] == terminator {
                    break;
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(TransferError::Io(e)),
        }
    }

    Ok(buffer)
}
