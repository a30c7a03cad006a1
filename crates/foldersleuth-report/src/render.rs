/// Plain-text rendering of report state: a progress line, the breakdown
/// table, and a top-N bar chart.
use crate::state::{ReportRow, ReportState};
use foldersleuth_core::model::size::{format_count, format_size};
use std::fmt::Write;

/// Width of the longest bar in [`bar_chart`].
pub const CHART_WIDTH: usize = 40;

/// One-line summary of the scan's progress.
pub fn progress_line(state: &ReportState) -> String {
    format!(
        "{:.1}% | Files analysed: {} | Current folder: {}",
        state.percent,
        format_count(state.files_processed),
        state.current_label
    )
}

/// The breakdown as an aligned table: Name, Size (MB), % of Total.
pub fn table(rows: &[ReportRow]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_width$}  {:>12}  {:>10}", "Name", "Size (MB)", "% of Total");
    let _ = writeln!(out, "{}", "-".repeat(name_width + 26));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>12.2}  {:>10.2}",
            row.name.as_str(),
            row.size_mb,
            row.share
        );
    }
    out
}

/// Horizontal bars for the given rows, scaled to the largest.
pub fn bar_chart(rows: &[ReportRow]) -> String {
    let largest = rows.iter().map(|r| r.size_bytes).max().unwrap_or(0);
    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let chart_width = CHART_WIDTH;

    let mut out = String::new();
    for row in rows {
        let len = if largest == 0 {
            0
        } else {
            (row.size_bytes as f64 / largest as f64 * chart_width as f64).round() as usize
        };
        let _ = writeln!(
            out,
            "{:<name_width$} {:<chart_width$} {} ({:.1}%)",
            row.name.as_str(),
            "█".repeat(len),
            format_size(row.size_bytes),
            row.share
        );
    }
    out
}

/// Closing summary once a scan has finished.
pub fn summary(state: &ReportState) -> String {
    if let Some(message) = &state.error {
        return format!("Error: {message}");
    }
    match &state.result {
        Some(result) => format!(
            "{} subdirectories, {} total, {} files in {:.2?}",
            result.entries.len(),
            format_size(result.total_size_bytes),
            format_count(result.files_processed),
            result.elapsed
        ),
        None => progress_line(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldersleuth_core::{ProgressEvent, ResultEntry, ScanReporter, ScanResult};
    use std::path::PathBuf;
    use std::time::Duration;

    fn finished_state() -> ReportState {
        let mut state = ReportState::new();
        state.begin(PathBuf::from("/root"));
        state.on_result(&ScanResult::from_entries(
            vec![ResultEntry::new("docs", 3_000), ResultEntry::new("media", 5_000)],
            3,
            Duration::from_millis(5),
        ));
        state.on_progress(&ProgressEvent::done(3));
        state
    }

    #[test]
    fn test_progress_line() {
        let mut state = ReportState::new();
        state.begin(PathBuf::from("/root"));
        state.on_progress(&ProgressEvent::measured(1_500, 2_000, "photos"));
        assert_eq!(
            progress_line(&state),
            "75.0% | Files analysed: 1,500 | Current folder: photos"
        );
    }

    #[test]
    fn test_table_lists_rows_in_order() {
        let state = finished_state();
        let text = table(&state.rows());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].starts_with("media"));
        assert!(lines[2].ends_with("62.50"));
        assert!(lines[3].starts_with("docs"));
        assert!(lines[3].ends_with("37.50"));
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let state = finished_state();
        let text = bar_chart(&state.top(5));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].matches('█').count(), CHART_WIDTH);
        assert_eq!(lines[1].matches('█').count(), 24);
    }

    #[test]
    fn test_bar_chart_all_zero() {
        let rows = vec![ReportRow {
            name: "empty".into(),
            size_bytes: 0,
            size_mb: 0.0,
            share: 0.0,
        }];
        assert_eq!(bar_chart(&rows).matches('█').count(), 0);
    }

    #[test]
    fn test_summary_reports_error_verbatim() {
        let mut state = ReportState::new();
        state.begin(PathBuf::from("/nope"));
        state.on_error("Path not found: /nope");
        assert_eq!(summary(&state), "Error: Path not found: /nope");
    }

    #[test]
    fn test_summary_after_result() {
        let text = summary(&finished_state());
        assert!(text.starts_with("2 subdirectories, 7.8 KB total, 3 files"));
    }
}
