/// Scan progress reporting — messages sent from the scan thread to the
/// reporting thread through the update channel, plus the running counters
/// the scan thread keeps while producing them.
use crate::model::ScanResult;

/// Label of the progress event emitted before the file-count pre-pass.
pub const COUNTING_LABEL: &str = "counting files...";

/// Label of the 100% progress event that closes a successful scan.
pub const DONE_LABEL: &str = "done";

/// A progress snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    /// Fraction complete, in `[0, 100]`.
    pub percent: f64,
    /// Files counted as processed so far. Never decreases within one scan.
    pub files_processed: u64,
    /// Name of the directory being visited, or a phase label.
    pub current_label: String,
}

impl ProgressEvent {
    pub fn new(percent: f64, files_processed: u64, current_label: impl Into<String>) -> Self {
        Self {
            percent,
            files_processed,
            current_label: current_label.into(),
        }
    }

    /// Progress after `processed` of an estimated `total` files.
    ///
    /// The estimate is a snapshot taken before accumulation, so files created
    /// mid-scan can push `processed` past it; the percentage is capped at 100.
    pub fn measured(processed: u64, total: u64, current_label: impl Into<String>) -> Self {
        let total = total.max(1);
        let percent = (processed as f64 / total as f64 * 100.0).min(100.0);
        Self::new(percent, processed, current_label)
    }

    /// The initial 0% event, sent before counting starts.
    pub fn counting() -> Self {
        Self::new(0.0, 0, COUNTING_LABEL)
    }

    /// The closing 100% event of a successful scan.
    pub fn done(files_processed: u64) -> Self {
        Self::new(100.0, files_processed, DONE_LABEL)
    }
}

/// Events delivered from the scan thread to the reporting side.
///
/// A scan emits any number of `Progress` events and then terminates with
/// either one `Result` followed by a final `Progress` at 100%, or exactly
/// one `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    Progress(ProgressEvent),
    Result(ScanResult),
    /// The root could not be enumerated. Nothing follows this event.
    Error { message: String },
}

/// Running counters owned by the scan thread for the life of one scan.
///
/// Passed by `&mut` through the accumulator so every subdirectory shares a
/// single processed-file count against a single estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    /// Snapshot from the counting pre-pass. Never recomputed mid-scan.
    pub total_files_estimate: u64,
    pub files_processed: u64,
}

impl ScanState {
    pub fn new(total_files_estimate: u64) -> Self {
        Self {
            total_files_estimate,
            files_processed: 0,
        }
    }

    /// Count one more file and return the progress event describing it.
    pub fn record_file(&mut self, current_label: &str) -> ProgressEvent {
        self.files_processed += 1;
        ProgressEvent::measured(self.files_processed, self.total_files_estimate, current_label)
    }

    /// Count a file that was listed but could not be measured. No event.
    pub fn record_unmeasured(&mut self) {
        self.files_processed += 1;
    }
}

/// Orchestrator lifecycle. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Counting,
    Accumulating,
    Finalizing,
    Done,
    Failed,
}

impl ScanPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}
