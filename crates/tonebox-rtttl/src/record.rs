//! RTTTL record extraction.
//!
//! An RTTTL file is a single line of `name:settings:notes`. The music module
//! only stores the part after the name, so extraction splits off the title
//! token and normalizes the remainder:
//!
//! - one extra leading `:` after the name is tolerated and stripped
//!   (some files carry a second separator; exactly one is removed, never more);
//! - one trailing `,` is stripped (files sometimes terminate the tone
//!   sequence with a separator that must not be transmitted).
//!
//! Extraction does not validate the body length. The 254-byte limit is a
//! property of the module's EEPROM, not of RTTTL syntax, so the transfer
//! layer enforces it.

use std::fmt;

use crate::error::ParseError;

/// A named RTTTL melody.
///
/// `name` is the title token preceding the first `:`; `body` is everything
/// after it (settings and notes), with separators normalized. The note and
/// duration grammar inside `body` is treated as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtttlRecord {
    /// Melody title. Never transmitted to the device.
    pub name: String,
    /// Settings and tone data, as stored in device EEPROM.
    pub body: String,
}

impl RtttlRecord {
    /// Build a record for a melody retrieved from the device.
    ///
    /// The wire format carries no name field, so downloads get a fixed
    /// placeholder title.
    pub fn untitled(body: impl Into<String>) -> Self {
        RtttlRecord {
            name: "untitled".to_string(),
            body: body.into(),
        }
    }
}

impl fmt::Display for RtttlRecord {
    /// Formats the record back into the `name:body` file form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.body)
    }
}

/// Extract the name and tone data from raw RTTTL text.
///
/// Fails with [`ParseError::Empty`] only when the trimmed input has zero
/// length. Input without a `:` separator yields the whole string as `name`
/// and an empty `body`; rejecting that as unusable is the caller's job.
pub fn extract(raw: &str) -> Result<RtttlRecord, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::Empty);
    }

    let (name, remainder) = match raw.find(':') {
        Some(pos) => (&raw[..pos], &raw[pos..]),
        None => (raw, ""),
    };

    // Drop the name separator itself, then tolerate exactly one extra colon.
    let mut body = remainder.strip_prefix(':').unwrap_or(remainder).trim();
    if let Some(rest) = body.strip_prefix(':') {
        body = rest.trim();
    }

    // Trailing tone separator is not part of the stored melody.
    let body = body.strip_suffix(',').unwrap_or(body);

    Ok(RtttlRecord {
        name: name.to_string(),
        body: body.to_string(),
    })
}
