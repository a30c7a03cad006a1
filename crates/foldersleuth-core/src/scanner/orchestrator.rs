/// Scan orchestrator — drives one scan from count to result on the scan
/// thread.
///
/// ```text
/// Idle → Counting → Accumulating → Finalizing → Done
///                         │
///                         └──────────────→ Failed
/// ```
///
/// Only a root that cannot be listed at all moves the scan to `Failed`; that
/// emits a single `Error` event and nothing else. Everything below the root
/// is handled by the accumulator without failing the scan.
///
/// Files directly under the root are counted in the progress estimate but
/// are not part of any entry or of the total size. A symlink among the root's
/// children that points at a directory is sized like a real subdirectory;
/// links further down are never followed.
use crate::channel::UpdateSender;
use crate::error::ScanError;
use crate::model::{ResultEntry, ScanRequest, ScanResult};
use crate::scanner::accumulator::accumulate_dir;
use crate::scanner::counter::count_files;
use crate::scanner::progress::{ProgressEvent, ScanEvent, ScanPhase, ScanState};
use compact_str::CompactString;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run a complete scan, sending every event to `sink`.
///
/// Returns the terminal phase (`Done` or `Failed`).
pub fn run_scan(request: &ScanRequest, sink: &UpdateSender) -> ScanPhase {
    let start = Instant::now();
    let root = request.root();
    info!("Starting scan of {}", root.display());

    match scan_root(root, sink, start) {
        Ok(result) => {
            let processed = result.files_processed;
            info!(
                "Scan of {} complete: {} subdirectories, {} bytes, {} files in {:?}",
                root.display(),
                result.entries.len(),
                result.total_size_bytes,
                processed,
                result.elapsed
            );
            sink.push(ScanEvent::Result(result));
            sink.push(ScanEvent::Progress(ProgressEvent::done(processed)));
            transition(ScanPhase::Finalizing, ScanPhase::Done)
        }
        Err(err) => {
            warn!("Scan of {} failed: {err}", root.display());
            sink.push(ScanEvent::Error {
                message: err.to_string(),
            });
            ScanPhase::Failed
        }
    }
}

/// Counting → Accumulating → Finalizing. Errors out only when the root
/// cannot be listed.
fn scan_root(root: &Path, sink: &UpdateSender, start: Instant) -> Result<ScanResult, ScanError> {
    let phase = transition(ScanPhase::Idle, ScanPhase::Counting);
    sink.push(ScanEvent::Progress(ProgressEvent::counting()));
    let mut state = ScanState::new(count_files(root));
    debug!("File estimate: {}", state.total_files_estimate);

    let phase = transition(phase, ScanPhase::Accumulating);
    let listing = fs::read_dir(root).map_err(|e| ScanError::io(root, e))?;

    let mut entries: Vec<ResultEntry> = Vec::new();
    for entry_result in listing {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                warn!("Skipping unreadable entry in {}: {err}", root.display());
                continue;
            }
        };

        // Follows links: a top-level symlink to a directory is an entry.
        let path = entry.path();
        let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }

        let name = CompactString::new(entry.file_name().to_string_lossy());
        let size = accumulate_dir(&path, &mut state, sink);
        debug!("{name}: {size} bytes");
        entries.push(ResultEntry::new(name, size));
    }

    transition(phase, ScanPhase::Finalizing);
    Ok(ScanResult::from_entries(
        entries,
        state.files_processed,
        start.elapsed(),
    ))
}

fn transition(from: ScanPhase, to: ScanPhase) -> ScanPhase {
    debug_assert!(!from.is_terminal(), "no transitions out of {from:?}");
    debug!("Scan phase {from:?} -> {to:?}");
    to
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::update_channel;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_fails_with_single_error() {
        let (tx, rx) = update_channel();
        let req = ScanRequest::new("/path/does/not/exist").unwrap();
        assert_eq!(run_scan(&req, &tx), ScanPhase::Failed);

        let events = rx.drain_all();
        let errors: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, ScanEvent::Error { .. }))
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(matches!(events.last(), Some(ScanEvent::Error { .. })));
        assert!(!events.iter().any(|e| matches!(e, ScanEvent::Result(_))));
    }

    #[test]
    fn test_file_root_fails() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "not a dir").unwrap();

        let (tx, rx) = update_channel();
        let req = ScanRequest::new(&file).unwrap();
        assert_eq!(run_scan(&req, &tx), ScanPhase::Failed);
        assert!(matches!(rx.drain_all().last(), Some(ScanEvent::Error { .. })));
    }

    #[test]
    fn test_event_sequence_for_successful_scan() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("f"), "abc").unwrap();

        let (tx, rx) = update_channel();
        let req = ScanRequest::new(tmp.path()).unwrap();
        assert_eq!(run_scan(&req, &tx), ScanPhase::Done);

        let events = rx.drain_all();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], ScanEvent::Progress(ProgressEvent::counting()));
        assert!(matches!(&events[1], ScanEvent::Progress(p) if p.files_processed == 1));
        match &events[2] {
            ScanEvent::Result(r) => {
                assert_eq!(r.entries, vec![ResultEntry::new("sub", 3)]);
                assert_eq!(r.total_size_bytes, 3);
            }
            other => panic!("expected Result, got {other:?}"),
        }
        assert_eq!(events[3], ScanEvent::Progress(ProgressEvent::done(1)));
    }

    #[test]
    fn test_empty_root_yields_empty_result() {
        let tmp = TempDir::new().unwrap();
        let (tx, rx) = update_channel();
        let req = ScanRequest::new(tmp.path()).unwrap();
        run_scan(&req, &tx);

        let events = rx.drain_all();
        let result = events.iter().find_map(|e| match e {
            ScanEvent::Result(r) => Some(r),
            _ => None,
        });
        let result = result.expect("empty root still produces a result");
        assert!(result.is_empty());
        assert_eq!(result.total_size_bytes, 0);
        assert_eq!(events.last(), Some(&ScanEvent::Progress(ProgressEvent::done(0))));
    }

    #[cfg(unix)]
    #[test]
    fn test_top_level_dir_symlink_becomes_entry() {
        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("f"), vec![0u8; 500]).unwrap();
        std::os::unix::fs::symlink(outside.path(), tmp.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(outside.path().join("f"), tmp.path().join("file_link")).unwrap();

        let (tx, rx) = update_channel();
        let req = ScanRequest::new(tmp.path()).unwrap();
        assert_eq!(run_scan(&req, &tx), ScanPhase::Done);

        let result = rx
            .drain_all()
            .into_iter()
            .find_map(|e| match e {
                ScanEvent::Result(r) => Some(r),
                _ => None,
            })
            .unwrap();
        assert_eq!(result.entries, vec![ResultEntry::new("linked", 500)]);
    }
}
