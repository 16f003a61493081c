//! RTTTL record handling for the tonebox music module.
//!
//! RTTTL (Ring Tone Text Transfer Language) is a plain-text melody format of
//! `name:settings:notes`. This crate extracts the name and tone data from a
//! file's contents and rebuilds the file form for melodies read back from the
//! device. It performs no I/O and no note-grammar validation; the settings
//! and note tokens are opaque payload for the transfer layer.
//!
//! # Example
//!
//! ```rust
//! use tonebox_rtttl::extract;
//!
//! let record = extract("Axel F:d=4,o=5,b=125,2a,8a#,").unwrap();
//! assert_eq!(record.name, "Axel F");
//! assert_eq!(record.body, "d=4,o=5,b=125,2a,8a#");
//! ```

mod error;
mod record;

pub use error::*;
pub use record::*;
