// crates/nearby-core/src/loader/content.rs
use crate::common::LoadReport;
use crate::error::{NearbyError, Result};
use crate::store::{GeoStore, Partition};
use crate::text::key_from_filename;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores every record file in `dir` verbatim under the content partition.
///
/// Files are visited in name order; each is keyed by
/// [`key_from_filename`]. Subdirectories and dotfiles are ignored. Only a
/// failure to list `dir` itself is fatal.
pub fn load_content_dir(store: &GeoStore, dir: impl AsRef<Path>) -> Result<LoadReport> {
    let dir = dir.as_ref();
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && !is_hidden(path))
        .collect();
    files.sort();

    let mut report = LoadReport::default();
    store_files(&files, &mut report, |key, bytes| {
        store.put_raw(Partition::ContentRecords, key, bytes)
    });

    tracing::info!(
        dir = %dir.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        failed = report.failed,
        "loaded content records"
    );
    Ok(report)
}

/// Reads each file and hands its bytes to `put` under the filename key.
/// Unreadable files and rejected writes are logged and counted as failed.
fn store_files<F>(files: &[PathBuf], report: &mut LoadReport, mut put: F)
where
    F: FnMut(&str, &[u8]) -> Result<()>,
{
    for path in files {
        let Some(key) = key_from_filename(path) else {
            tracing::warn!(path = %path.display(), "skipping file without a usable name");
            report.skipped += 1;
            continue;
        };

        let stored = fs::read(path)
            .map_err(NearbyError::from)
            .and_then(|bytes| put(&key, &bytes));
        match stored {
            Ok(()) => report.loaded += 1,
            Err(e) => {
                tracing::warn!(path = %path.display(), key = %key, error = %e, "failed to store content record");
                report.failed += 1;
            }
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
