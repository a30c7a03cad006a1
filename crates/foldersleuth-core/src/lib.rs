/// FolderSleuth Core — scanning engine, event channel, and data model.
///
/// This crate contains all business logic with zero presentation
/// dependencies. A frontend drives a scan through [`scanner::start_scan`]
/// and consumes the resulting events with a [`pump::EventPump`] or by
/// iterating the handle's event stream directly.
///
/// # Modules
///
/// - [`model`] — Scan request, result breakdown, and size helpers.
/// - [`scanner`] — Background scan: file counter, size accumulator,
///   orchestrator, and the progress messages they emit.
/// - [`channel`] — Unbounded FIFO carrying events from the scan thread.
/// - [`pump`] — Fixed-interval drain loop on the reporting thread.
/// - [`error`] — Error taxonomy for scan requests and root enumeration.
pub mod channel;
pub mod error;
pub mod model;
pub mod pump;
pub mod scanner;

pub use channel::{update_channel, UpdateReceiver, UpdateSender};
pub use error::ScanError;
pub use model::{ResultEntry, ScanRequest, ScanResult};
pub use pump::{EventPump, ScanReporter};
pub use scanner::progress::{ProgressEvent, ScanEvent};
pub use scanner::{start_scan, ScanHandle};
