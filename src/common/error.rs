//! Error types for vmsim.

use std::path::PathBuf;

use crate::common::config::PAGE_SIZE;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All recoverable errors in vmsim.
///
/// Broken internal invariants (a victim frame without an owning page, a
/// physical address past the end of memory) are not represented here; they
/// panic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing store or the address file could not be opened.
    #[error("unable to open '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page read returned fewer than [`PAGE_SIZE`] bytes.
    ///
    /// Fatal: a partially loaded frame would corrupt every later read.
    #[error("backing store truncated at page {page}: read {read} of {} bytes", PAGE_SIZE)]
    TruncatedBackingStore { page: u8, read: usize },

    /// An input line did not hold a 16-bit unsigned integer.
    #[error("malformed address on line {line}: {text:?}")]
    MalformedAddress { line: usize, text: String },

    /// The simulator configuration cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::TruncatedBackingStore { page: 7, read: 12 };
        assert_eq!(
            format!("{}", err),
            "backing store truncated at page 7: read 12 of 256 bytes"
        );

        let err = Error::MalformedAddress {
            line: 3,
            text: "abc".into(),
        };
        assert_eq!(format!("{}", err), "malformed address on line 3: \"abc\"");
    }

    #[test]
    fn test_source_unavailable_display() {
        let err = Error::SourceUnavailable {
            path: PathBuf::from("BACKING_STORE.bin"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let display = format!("{}", err);
        assert!(display.contains("BACKING_STORE.bin"));
        assert!(display.contains("file not found"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
