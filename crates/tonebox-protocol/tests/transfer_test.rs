//! Integration tests for the transfer protocol against an in-memory stream.
//!
//! `MockModule` stands in for the music module: it serves a scripted byte
//! response and records every byte the host writes, so both directions of
//! the wire protocol can be checked exactly.

use std::io::{self, Read, Write};

use tonebox_protocol::{
    download, upload, Pacing, TransferError, CMD_DOWNLOAD_REQUEST, CMD_UPLOAD_REQUEST, EOT_UPLOAD,
};

/// In-memory duplex stream: reads come from a scripted response, writes are
/// captured for inspection.
struct MockModule {
    response: io::Cursor<Vec<u8>>,
    written: Vec<u8>,
}

impl MockModule {
    fn new(response: &[u8]) -> Self {
        MockModule {
            response: io::Cursor::new(response.to_vec()),
            written: Vec::new(),
        }
    }

    /// A module with nothing to say (upload-side tests).
    fn silent() -> Self {
        Self::new(&[])
    }
}

impl Read for MockModule {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.response.read(buf)
    }
}

impl Write for MockModule {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Upload
// ============================================================================

#[test]
fn test_upload_frames_body_between_command_and_terminator() {
    let body = "d=4,o=5,b=125,2a,8a#,8a,2f#,2a,8a#,8a,a,g,f#,2a,f#,d#,2b";
    let mut module = MockModule::silent();

    upload(&mut module, body, &Pacing::none()).unwrap();

    let mut expected = vec![CMD_UPLOAD_REQUEST];
    expected.extend_from_slice(body.as_bytes());
    expected.push(EOT_UPLOAD);
    assert_eq!(module.written, expected);
}

#[test]
fn test_upload_rejects_one_byte_body_without_port_io() {
    let mut module = MockModule::silent();

    let err = upload(&mut module, "x", &Pacing::none()).unwrap_err();
    assert!(matches!(err, TransferError::PayloadTooSmall { actual: 1, .. }));
    assert!(module.written.is_empty(), "no bytes may reach the port");
}

#[test]
fn test_upload_rejects_oversized_body_without_port_io() {
    let body = "c".repeat(255);
    let mut module = MockModule::silent();

    let err = upload(&mut module, &body, &Pacing::none()).unwrap_err();
    assert!(matches!(
        err,
        TransferError::PayloadTooLarge { max: 254, actual: 255 }
    ));
    assert!(module.written.is_empty(), "no bytes may reach the port");
}

#[test]
fn test_upload_accepts_boundary_lengths() {
    let mut module = MockModule::silent();
    upload(&mut module, "2a", &Pacing::none()).unwrap();

    let body = "c".repeat(254);
    let mut module = MockModule::silent();
    upload(&mut module, &body, &Pacing::none()).unwrap();
    assert_eq!(module.written.len(), 1 + 254 + 1);
}

#[test]
fn test_upload_surfaces_stream_failure() {
    struct BrokenPort;
    impl Read for BrokenPort {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Ok(0)
        }
    }
    impl Write for BrokenPort {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let err = upload(&mut BrokenPort, "2a,8b", &Pacing::none()).unwrap_err();
    assert!(matches!(err, TransferError::Io(_)));
}

// ============================================================================
// Download
// ============================================================================

#[test]
fn test_download_yields_untitled_record() {
    let mut module = MockModule::new(b"d=4,o=5,2a\x00");

    let record = download(&mut module, &Pacing::none()).unwrap();
    assert_eq!(record.name, "untitled");
    assert_eq!(record.body, "d=4,o=5,2a");
    assert_eq!(module.written, vec![CMD_DOWNLOAD_REQUEST]);
}

#[test]
fn test_download_lone_sentinel_is_no_data() {
    let mut module = MockModule::new(b"\x00");

    let err = download(&mut module, &Pacing::none()).unwrap_err();
    assert!(matches!(err, TransferError::NoData));
}

#[test]
fn test_download_empty_response_is_no_data() {
    let mut module = MockModule::new(b"");

    let err = download(&mut module, &Pacing::none()).unwrap_err();
    assert!(matches!(err, TransferError::NoData));
}

#[test]
fn test_download_tolerates_missing_sentinel_at_eof() {
    // A module that drops the link after the melody still yields the data.
    let mut module = MockModule::new(b"d=4,o=5,2a");

    let record = download(&mut module, &Pacing::none()).unwrap();
    assert_eq!(record.body, "d=4,o=5,2a");
}

#[test]
fn test_download_rejects_invalid_utf8() {
    let mut module = MockModule::new(b"d=4,\xFF\xFE,2a\x00");

    let err = download(&mut module, &Pacing::none()).unwrap_err();
    assert!(matches!(err, TransferError::InvalidEncoding(_)));
}

#[test]
fn test_download_overrun_guard_trips_on_babbling_module() {
    let endless = vec![b'a'; 8192];
    let mut module = MockModule::new(&endless);

    let err = download(&mut module, &Pacing::none()).unwrap_err();
    assert!(matches!(err, TransferError::Overrun { .. }));
}
