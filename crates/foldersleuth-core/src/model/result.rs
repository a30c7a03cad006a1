/// Final per-subdirectory breakdown produced once at the end of a scan.
use compact_str::CompactString;
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Aggregate size of one immediate subdirectory of the scan root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    /// Directory name only (not the full path).
    pub name: CompactString,
    /// Sum of the byte lengths of every measured file beneath it.
    pub size_bytes: u64,
}

impl ResultEntry {
    pub fn new(name: impl Into<CompactString>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

/// The terminal success payload of a scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    /// Sorted by `size_bytes` descending; equal sizes keep enumeration order.
    pub entries: Vec<ResultEntry>,
    /// Sum of every entry's `size_bytes`.
    pub total_size_bytes: u64,
    /// Files counted as processed over the whole scan.
    pub files_processed: u64,
    /// Wall-clock time from scan start to result.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl ScanResult {
    /// Build a result from entries in enumeration order.
    ///
    /// `sort_by` is stable, so directories of equal size stay in the order
    /// they were listed.
    pub fn from_entries(
        mut entries: Vec<ResultEntry>,
        files_processed: u64,
        elapsed: Duration,
    ) -> Self {
        entries.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
        let total_size_bytes = entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.size_bytes));
        Self {
            entries,
            total_size_bytes,
            files_processed,
            elapsed,
        }
    }

    /// The `n` largest entries.
    pub fn top(&self, n: usize) -> &[ResultEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn serialize_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
