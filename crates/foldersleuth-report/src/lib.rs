/// FolderSleuth report — terminal frontend.
///
/// This crate contains the reporting side of a scan: the state the event
/// pump feeds, and the ways that state is shown or exported. Scanning itself
/// lives in `foldersleuth-core`.
pub mod export;
pub mod live;
pub mod render;
pub mod state;

pub use live::{LiveProgress, TerminalReporter};
pub use state::{ReportPhase, ReportRow, ReportState};
