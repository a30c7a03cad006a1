/// Data model for FolderSleuth scans.
///
/// Re-exports the request and result types and the size helpers used by
/// frontends.
pub mod request;
pub mod result;
pub mod size;

pub use request::ScanRequest;
pub use result::{ResultEntry, ScanResult};
