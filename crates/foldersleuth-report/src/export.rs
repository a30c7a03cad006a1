/// Export of a finished breakdown as JSON or CSV.
use crate::state::{ReportRow, ReportState};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while exporting a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The report has no result yet (scan still running or failed).
    #[error("No scan result to export")]
    NoResult,

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    total_size_bytes: u64,
    files_processed: u64,
    elapsed_ms: u64,
    entries: &'a [ReportRow],
}

/// Pretty-printed JSON: root, totals, and every row.
pub fn to_json(state: &ReportState) -> Result<String, ExportError> {
    let result = state.result.as_ref().ok_or(ExportError::NoResult)?;
    let rows = state.rows();
    let report = JsonReport {
        root: state
            .root()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default(),
        total_size_bytes: result.total_size_bytes,
        files_processed: result.files_processed,
        elapsed_ms: u64::try_from(result.elapsed.as_millis()).unwrap_or(u64::MAX),
        entries: &rows,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// CSV with header `name,size_bytes,size_mb,share_percent`.
pub fn to_csv(state: &ReportState) -> Result<String, ExportError> {
    if state.result.is_none() {
        return Err(ExportError::NoResult);
    }
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in state.rows() {
        writer.serialize(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldersleuth_core::{ResultEntry, ScanReporter, ScanResult};
    use std::path::PathBuf;
    use std::time::Duration;

    fn finished_state() -> ReportState {
        let mut state = ReportState::new();
        state.begin(PathBuf::from("/data"));
        state.on_result(&ScanResult::from_entries(
            vec![ResultEntry::new("docs", 3_000), ResultEntry::new("media", 5_000)],
            3,
            Duration::from_millis(42),
        ));
        state
    }

    #[test]
    fn test_json_contains_sorted_entries() {
        let json = to_json(&finished_state()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["root"], "/data");
        assert_eq!(value["total_size_bytes"], 8_000);
        assert_eq!(value["elapsed_ms"], 42);
        assert_eq!(value["entries"][0]["name"], "media");
        assert_eq!(value["entries"][0]["share_percent"], 62.5);
        assert_eq!(value["entries"][1]["size_bytes"], 3_000);
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let csv = to_csv(&finished_state()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "name,size_bytes,size_mb,share_percent");
        assert!(lines[1].starts_with("media,5000,"));
        assert!(lines[1].ends_with(",62.5"));
        assert!(lines[2].starts_with("docs,3000,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_without_result_fails() {
        let state = ReportState::new();
        assert!(matches!(to_json(&state), Err(ExportError::NoResult)));
        assert!(matches!(to_csv(&state), Err(ExportError::NoResult)));
    }
}
