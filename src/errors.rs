//! Defines application-specific error types.
//!
//! Almost every filesystem problem encountered during a transcription is
//! recovered locally and recorded inside the document itself, so the error
//! surface here is deliberately small: an unusable root is the only condition
//! the core reports to the caller.

use thiserror::Error;

/// A convenient `Result` alias used throughout `repo-scribe`.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `repo-scribe`.
#[derive(Error, Debug)]
pub enum Error {
    /// The root path cannot be transcribed at all: it does not exist, is not
    /// a directory, or its top-level listing was denied. This is the only
    /// fatal condition a transcription run can produce.
    #[error("cannot transcribe root '{path}': {source}")]
    RootUnavailable {
        /// The root path that could not be listed.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error writing the finished document to its destination (file creation
    /// or write failure).
    #[error("I/O error writing output to '{path}': {source}")]
    Output {
        /// The destination path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Generic error related to invalid configuration settings.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Helper to create an [`Error::RootUnavailable`] with path context.
pub fn root_unavailable<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::RootUnavailable {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_root_unavailable_helper() {
        let path = PathBuf::from("some/missing/root");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "No such directory");
        let err = root_unavailable(source_error, &path);

        match err {
            Error::RootUnavailable {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/missing/root"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::RootUnavailable"),
        }
    }

    #[test]
    fn test_display_messages() {
        let err = root_unavailable(
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
            "secret",
        );
        let msg = err.to_string();
        assert!(msg.contains("cannot transcribe root 'secret'"));

        let cfg = Error::Config("empty input path".to_string());
        assert_eq!(cfg.to_string(), "Invalid configuration: empty input path");
    }
}
