/// Live terminal progress bar, fed from the event pump.
use crate::state::{ReportPhase, ReportState};
use foldersleuth_core::model::size::format_count;
use foldersleuth_core::{ProgressEvent, ScanReporter, ScanResult};
use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "{bar:40.cyan/blue} {msg}";

/// Progress bar spanning 0–100% in tenths of a percent.
pub struct LiveProgress {
    bar: ProgressBar,
}

impl LiveProgress {
    /// A bar drawn to stderr.
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(1_000))
    }

    /// A bar that never draws (non-interactive output, tests).
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_length(1_000);
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        bar.set_style(style);
        Self { bar }
    }

    pub fn update(&self, progress: &ProgressEvent) {
        self.bar.set_position((progress.percent * 10.0).round() as u64);
        self.bar.set_message(format!(
            "{:.1}% | {} files | {}",
            progress.percent,
            format_count(progress.files_processed),
            progress.current_label
        ));
    }

    /// Current position in tenths of a percent.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn fail(&self, message: &str) {
        self.bar.abandon_with_message(format!("Error: {message}"));
    }
}

impl Default for LiveProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Reporter that keeps [`ReportState`] current and mirrors progress onto a
/// terminal bar.
pub struct TerminalReporter {
    pub state: ReportState,
    pub bar: LiveProgress,
}

impl TerminalReporter {
    pub fn new(state: ReportState, bar: LiveProgress) -> Self {
        Self { state, bar }
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }
}

impl ScanReporter for TerminalReporter {
    fn on_progress(&mut self, progress: &ProgressEvent) {
        self.state.on_progress(progress);
        // A failed scan keeps its abandoned bar where it stopped.
        if self.state.phase == ReportPhase::Failed {
            return;
        }
        self.bar.update(progress);
        if self.state.is_finished() {
            self.bar.finish();
        }
    }

    fn on_result(&mut self, result: &ScanResult) {
        self.state.on_result(result);
    }

    fn on_error(&mut self, message: &str) {
        self.state.on_error(message);
        self.bar.fail(message);
    }
}
