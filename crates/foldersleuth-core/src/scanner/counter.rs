/// File-count pre-pass — the denominator for progress percentages.
///
/// Uses `jwalk`'s rayon-backed parallel traversal. The count finishes before
/// accumulation starts, so its parallelism never overlaps the sequential
/// size walk. The result is a snapshot: files created or removed afterwards
/// are not reflected.
use jwalk::{Parallelism, WalkDir};
use std::path::Path;
use tracing::debug;

/// Count the non-directory entries reachable from `root`.
///
/// Symlinks are never followed into directories. A symlink whose target is a
/// directory is not counted; a symlink to a file, or a dangling one, is.
/// Unreadable directories contribute nothing and the walk moves on.
///
/// Always returns at least 1 so the count can be used as a divisor, even
/// when `root` does not exist.
pub fn count_files(root: &Path) -> u64 {
    let walker = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::RayonNewPool(num_cpus::get()));

    let mut count: u64 = 0;
    let mut skipped: u64 = 0;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                skipped += 1;
                debug!("count: skipping unreadable entry: {err}");
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        if file_type.is_symlink() && entry.path().is_dir() {
            continue;
        }
        count += 1;
    }

    debug!(
        "Counted {} files under {} ({} unreadable entries skipped)",
        count,
        root.display(),
        skipped
    );
    count.max(1)
}
