/// Report state management.
///
/// Centralises everything the frontend shows about a scan. The scan thread
/// never touches it; all updates arrive through [`ScanReporter`] callbacks
/// made by the event pump on the reporting thread.
use compact_str::CompactString;
use foldersleuth_core::model::size::{bytes_to_mb, share_of_total};
use foldersleuth_core::{
    start_scan, EventPump, ProgressEvent, ScanError, ScanReporter, ScanRequest, ScanResult,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Number of entries the breakdown chart shows.
pub const TOP_ENTRIES: usize = 5;

/// The current phase of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPhase {
    /// Nothing scanned yet.
    Idle,
    /// Scanning — progress counters are live.
    Scanning,
    /// Scan complete — the breakdown is available.
    Results,
    /// The root could not be scanned; `error` holds the message.
    Failed,
}

/// One row of the size breakdown, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub name: CompactString,
    pub size_bytes: u64,
    pub size_mb: f64,
    #[serde(rename = "share_percent")]
    pub share: f64,
}

/// All reporting-side state for one scan at a time.
#[derive(Debug)]
pub struct ReportState {
    pub phase: ReportPhase,
    pub root: Option<PathBuf>,

    // ── Progress ───────────────────────────────────────
    pub percent: f64,
    pub files_processed: u64,
    pub current_label: String,
    /// Set once the closing 100% event after the result has arrived.
    final_progress_seen: bool,

    // ── Outcome ────────────────────────────────────────
    pub result: Option<ScanResult>,
    pub error: Option<String>,

    /// Whether a new scan may be started (disabled while one runs).
    pub trigger_enabled: bool,
}

impl Default for ReportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportState {
    pub fn new() -> Self {
        Self {
            phase: ReportPhase::Idle,
            root: None,
            percent: 0.0,
            files_processed: 0,
            current_label: String::new(),
            final_progress_seen: false,
            result: None,
            error: None,
            trigger_enabled: true,
        }
    }

    /// Start a scan of `path` and return the pump that feeds this state.
    ///
    /// Resets every counter from a previous scan. Fails only for requests the
    /// core rejects synchronously; filesystem problems arrive as errors
    /// through the pump.
    pub fn start_scan(&mut self, path: impl Into<PathBuf>) -> Result<EventPump, ScanError> {
        let request = ScanRequest::new(path)?;
        let root = request.root().to_path_buf();
        let handle = start_scan(request)?;
        self.begin(root);
        Ok(handle.into_pump())
    }

    /// Reset for a fresh scan of `root`.
    pub fn begin(&mut self, root: PathBuf) {
        info!("Scanning {}", root.display());
        *self = Self {
            phase: ReportPhase::Scanning,
            current_label: "Starting scan...".to_string(),
            root: Some(root),
            trigger_enabled: false,
            ..Self::new()
        };
    }

    /// `true` once the scan has delivered its terminal events.
    pub fn is_finished(&self) -> bool {
        match self.phase {
            ReportPhase::Failed => true,
            ReportPhase::Results => self.final_progress_seen,
            ReportPhase::Idle | ReportPhase::Scanning => false,
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Breakdown rows with sizes in MB and shares of the total.
    pub fn rows(&self) -> Vec<ReportRow> {
        let Some(result) = &self.result else {
            return Vec::new();
        };
        result
            .entries
            .iter()
            .map(|e| ReportRow {
                name: e.name.clone(),
                size_bytes: e.size_bytes,
                size_mb: bytes_to_mb(e.size_bytes),
                share: share_of_total(e.size_bytes, result.total_size_bytes),
            })
            .collect()
    }

    /// The `n` largest rows.
    pub fn top(&self, n: usize) -> Vec<ReportRow> {
        let mut rows = self.rows();
        rows.truncate(n);
        rows
    }
}

impl ScanReporter for ReportState {
    fn on_progress(&mut self, progress: &ProgressEvent) {
        match self.phase {
            ReportPhase::Failed | ReportPhase::Idle => {
                debug!("Ignoring progress outside of a scan");
                return;
            }
            ReportPhase::Results if progress.percent >= 100.0 => {
                self.final_progress_seen = true;
            }
            _ => {}
        }
        self.percent = progress.percent;
        self.files_processed = progress.files_processed;
        self.current_label.clone_from(&progress.current_label);
    }

    fn on_result(&mut self, result: &ScanResult) {
        self.result = Some(result.clone());
        self.phase = ReportPhase::Results;
        self.trigger_enabled = true;
    }

    fn on_error(&mut self, message: &str) {
        warn!("Scan failed: {message}");
        self.error = Some(message.to_string());
        self.current_label = format!("Error: {message}");
        self.phase = ReportPhase::Failed;
        self.trigger_enabled = true;
    }
}
