/// Size accumulator — sums one subdirectory's tree depth-first.
///
/// Walks with `jwalk` in serial mode so files are visited in a stable
/// depth-first order on the scan thread. Every measured file bumps the shared
/// [`ScanState`] and sends one progress event, so the reporting side sees the
/// scan advance file by file.
///
/// # Error containment
///
/// - A symlink, or a file that vanished between listing and stat, is skipped
///   outright: no bytes, not counted.
/// - Any other stat failure (permission denied, transient I/O) counts the
///   file as processed with 0 bytes but sends no event; the next measured
///   file, or the closing 100% event, carries the count forward.
/// - A directory that cannot be listed contributes nothing; its siblings are
///   unaffected.
use crate::channel::UpdateSender;
use crate::scanner::progress::{ScanEvent, ScanState};
use jwalk::{Parallelism, WalkDir};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Outcome of stat-ing one listed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileSize {
    Measured(u64),
    Vanished,
    Unreadable,
}

/// Recursively total the byte sizes of every file under `dir`.
///
/// `dir` itself may be a symlink to a directory; links below it are never
/// followed. The sum saturates at `u64::MAX` rather than wrapping.
pub fn accumulate_dir(dir: &Path, state: &mut ScanState, sink: &UpdateSender) -> u64 {
    let walker = WalkDir::new(dir)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::Serial);

    let mut total: u64 = 0;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                debug!("Skipping unreadable entry under {}: {err}", dir.display());
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() || file_type.is_symlink() {
            continue;
        }

        match file_size(entry.metadata()) {
            FileSize::Measured(len) => {
                total = total.saturating_add(len);
                let label = dir_label(entry.parent_path());
                sink.push(ScanEvent::Progress(state.record_file(&label)));
            }
            FileSize::Vanished => {}
            FileSize::Unreadable => state.record_unmeasured(),
        }
    }

    total
}

fn file_size(stat: Result<fs::Metadata, jwalk::Error>) -> FileSize {
    match stat {
        Ok(meta) => FileSize::Measured(meta.len()),
        Err(err) if err.io_error().map(|e| e.kind()) == Some(ErrorKind::NotFound) => {
            debug!("File vanished before stat: {err}");
            FileSize::Vanished
        }
        Err(err) => {
            debug!("Could not stat file: {err}");
            FileSize::Unreadable
        }
    }
}

/// Base name of the directory holding a file, for progress labels.
fn dir_label(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string_lossy().into_owned())
}
