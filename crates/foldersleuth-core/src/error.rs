/// Error types for scan requests and root enumeration.
///
/// Only failures that stop a scan from enumerating its root surface as
/// errors. Per-file and per-directory problems inside the tree are handled
/// where they occur and never reach this type.
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a scan (or prevent one from starting).
#[derive(Debug, Error)]
pub enum ScanError {
    /// The request itself is malformed (e.g. an empty root path).
    #[error("Invalid scan request: {message}")]
    InvalidRequest { message: String },

    /// The root path does not exist.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// The root path exists but may not be listed.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// The root path is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Any other I/O failure while opening the root.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The background scanner thread could not be started.
    #[error("Failed to spawn scanner thread: {0}")]
    Spawn(#[source] std::io::Error),
}

impl ScanError {
    /// Classify an I/O error raised while opening `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_classifies_not_found() {
        let err = ScanError::io("/missing", Error::new(ErrorKind::NotFound, "gone"));
        assert!(matches!(err, ScanError::NotFound { .. }));
        assert_eq!(err.to_string(), "Path not found: /missing");
    }

    #[test]
    fn test_io_classifies_permission_denied() {
        let err = ScanError::io("/secret", Error::new(ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, ScanError::PermissionDenied { .. }));
    }

    #[test]
    fn test_io_keeps_source_for_other_kinds() {
        let err = ScanError::io("/dev/weird", Error::new(ErrorKind::Other, "boom"));
        match err {
            ScanError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("/dev/weird"));
                assert_eq!(source.to_string(), "boom");
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
