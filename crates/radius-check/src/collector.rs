//! File collection
//!
//! Walks the configured directories under a scan root and returns the files
//! whose extension is in the allow-list, followed by any extra root-level
//! files that exist. Entries are visited in sorted name order so results are
//! stable across platforms and runs.

use crate::config::ScanConfig;
use crate::error::{CheckError, CheckResult};
use std::path::{Path, PathBuf};

/// A directory entry resolved for the walk
#[derive(Debug)]
struct WalkEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

/// Collect every candidate file under `root`.
///
/// A missing root, or a missing scan directory, yields no files rather than an
/// error. A directory that exists but cannot be listed is an error: skipping
/// it would let violations inside it pass unreported.
pub fn collect_files(root: &Path, config: &ScanConfig) -> CheckResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for dir in &config.scan_dirs {
        walk(&root.join(dir), config, &mut files)?;
    }

    for extra in &config.extra_files {
        let path = root.join(extra);
        if path.is_file() && !files.contains(&path) {
            files.push(path);
        }
    }

    tracing::debug!(root = %root.display(), count = files.len(), "collected files");
    Ok(files)
}

/// Depth-first walk using an explicit stack of pending directory listings.
fn walk(dir: &Path, config: &ScanConfig, files: &mut Vec<PathBuf>) -> CheckResult<()> {
    let mut stack = vec![read_sorted(dir)?.into_iter()];

    while let Some(entries) = stack.last_mut() {
        let Some(entry) = entries.next() else {
            stack.pop();
            continue;
        };

        if entry.is_dir {
            if config.ignores_dir(&entry.name) {
                tracing::debug!(dir = %entry.path.display(), "skipping ignored directory");
                continue;
            }
            stack.push(read_sorted(&entry.path)?.into_iter());
            continue;
        }

        let included = entry
            .path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| config.includes_extension(ext));
        if included {
            tracing::trace!(file = %entry.path.display(), "collected");
            files.push(entry.path);
        }
    }

    Ok(())
}

/// List a directory, sorted by file name.
///
/// Symlinked directories are reported as non-directories and never descended
/// into; symlinks to files are kept only if their target is a regular file.
fn read_sorted(dir: &Path) -> CheckResult<Vec<WalkEntry>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(CheckError::io(dir, e)),
    };

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CheckError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| CheckError::io(&path, e))?;
        if file_type.is_symlink() && !path.is_file() {
            continue;
        }
        out.push(WalkEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: file_type.is_dir(),
            path,
        });
    }

    out.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(out)
}
