//! Recursive template copy.
//!
//! Mirrors a source tree into an existing destination directory, depth-first
//! and pre-order. Failures are contained per entry: a file that cannot be
//! copied is recorded and its siblings are still processed; a directory that
//! cannot be created or listed drops only its own branch. Nothing is rolled
//! back, so the caller decides what a partial copy means.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What went wrong with a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Directory could not be listed or entry metadata could not be read
    List,
    /// Destination directory could not be created
    CreateDir,
    /// File contents could not be copied
    CopyFile,
}

/// A template entry that could not be reproduced in the destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryFailure {
    /// Path relative to the template root
    pub path: PathBuf,
    pub kind: FailureKind,
    pub message: String,
}

/// Outcome of a clone, success and failure alike
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloneReport {
    pub dirs_created: usize,
    pub files_copied: usize,
    pub bytes_copied: u64,
    pub failures: Vec<EntryFailure>,
}

impl CloneReport {
    /// True when every entry made it across
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record_failure(&mut self, path: PathBuf, kind: FailureKind, message: String) {
        tracing::warn!("Failed to copy {}: {}", path.display(), message);
        self.failures.push(EntryFailure {
            path,
            kind,
            message,
        });
    }
}

/// Copy every entry under `source` into `destination`.
///
/// `destination` must already exist. Entry order follows the filesystem.
/// Symlinks are not followed when deciding whether an entry is a directory,
/// so a link is copied as the file it points to.
pub fn clone_tree(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> CloneReport {
    let source = source.as_ref();
    let destination = destination.as_ref();
    let mut report = CloneReport::default();

    tracing::debug!(
        "Cloning {} into {}",
        source.display(),
        destination.display()
    );

    let mut walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(false)
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| relative_to(p, source))
                    .unwrap_or_default();
                report.record_failure(path, FailureKind::List, e.to_string());
                continue;
            }
        };

        let rel_path = relative_to(entry.path(), source);
        let target = destination.join(&rel_path);

        if entry.file_type().is_dir() {
            match fs::create_dir(&target) {
                Ok(()) => {
                    tracing::debug!("Created {}", rel_path.display());
                    report.dirs_created += 1;
                }
                Err(e) => {
                    report.record_failure(rel_path, FailureKind::CreateDir, e.to_string());
                    walker.skip_current_dir();
                }
            }
        } else {
            match fs::copy(entry.path(), &target) {
                Ok(bytes) => {
                    tracing::debug!("Copied {} ({} bytes)", rel_path.display(), bytes);
                    report.files_copied += 1;
                    report.bytes_copied += bytes;
                }
                Err(e) => {
                    report.record_failure(rel_path, FailureKind::CopyFile, e.to_string());
                }
            }
        }
    }

    report
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
