/// The caller's side of a scan: which root to size.
use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// An immutable request to scan one root directory.
///
/// Validation here is purely syntactic. Whether the path exists or can be
/// listed is only discovered by the scanner, which reports it as an
/// `Error` event rather than failing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    root: PathBuf,
}

impl ScanRequest {
    /// Build a request for `root`. Rejects an empty path.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let root = root.into();
        if root.as_os_str().is_empty() {
            return Err(ScanError::InvalidRequest {
                message: "root path cannot be empty".to_string(),
            });
        }
        Ok(Self { root })
    }

    /// The root directory to scan.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
