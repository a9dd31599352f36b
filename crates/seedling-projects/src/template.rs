//! Template tree location.
//!
//! The template is looked up in order:
//! 1. An explicit directory (`--template` or `SEEDLING_TEMPLATE_DIR`)
//! 2. `<exe_dir>/../share/seedling/template` (installed layout)
//! 3. `<exe_dir>/template` (unpacked archive layout)
//! 4. The copy compiled into the binary
//!
//! An explicit directory that does not exist is an error; the installed
//! locations are only checked.

use crate::clone::{clone_tree, CloneReport, FailureKind};
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Template tree compiled into the binary
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../template/"]
pub struct EmbeddedTemplate;

/// Where the template tree is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum TemplateSource {
    /// A directory on disk
    Directory(Utf8PathBuf),
    /// The embedded copy
    Embedded,
}

impl TemplateSource {
    /// Pick the template source, preferring an explicit directory
    pub fn resolve(explicit: Option<&Utf8Path>) -> Result<Self> {
        if let Some(dir) = explicit {
            if !dir.is_dir() {
                return Err(Error::template_not_found(dir.as_str()));
            }
            return Ok(Self::Directory(dir.to_path_buf()));
        }

        if let Some(dir) = Self::installed_dir() {
            tracing::debug!("Using installed template at {}", dir);
            return Ok(Self::Directory(dir));
        }

        tracing::debug!("No installed template found, using embedded copy");
        Ok(Self::Embedded)
    }

    /// First installed template directory next to the running executable
    pub fn installed_dir() -> Option<Utf8PathBuf> {
        let exe = std::env::current_exe().ok()?;
        let exe = Utf8PathBuf::from_path_buf(exe).ok()?;
        let exe_dir = exe.parent()?;

        installed_candidates(exe_dir)
            .into_iter()
            .find(|candidate| candidate.is_dir())
    }

    /// Copy the template into `destination`, which must already exist
    pub fn copy_into(&self, destination: impl AsRef<Path>) -> CloneReport {
        match self {
            Self::Directory(dir) => clone_tree(dir, destination),
            Self::Embedded => clone_embedded(destination),
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(dir) => write!(f, "{}", dir),
            Self::Embedded => write!(f, "built-in template"),
        }
    }
}

fn installed_candidates(exe_dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let mut candidates = Vec::new();
    if let Some(prefix) = exe_dir.parent() {
        candidates.push(prefix.join("share").join("seedling").join("template"));
    }
    candidates.push(exe_dir.join("template"));
    candidates
}

/// Write the embedded template into `destination`.
///
/// Same containment rules as [`clone_tree`]. Empty directories cannot be
/// embedded, so only directories that hold files are reproduced.
pub fn clone_embedded(destination: impl AsRef<Path>) -> CloneReport {
    let destination = destination.as_ref();
    let mut report = CloneReport::default();

    for file in EmbeddedTemplate::iter() {
        let rel_path = PathBuf::from(&*file);

        if let Err((dir, e)) = ensure_parent_dirs(destination, &rel_path, &mut report) {
            report.record_failure(dir, FailureKind::CreateDir, e.to_string());
            continue;
        }

        let Some(content) = EmbeddedTemplate::get(&file) else {
            report.record_failure(
                rel_path,
                FailureKind::CopyFile,
                "embedded file disappeared".to_string(),
            );
            continue;
        };

        match fs::write(destination.join(&rel_path), &*content.data) {
            Ok(()) => {
                tracing::debug!("Wrote {}", rel_path.display());
                report.files_copied += 1;
                report.bytes_copied += content.data.len() as u64;
            }
            Err(e) => report.record_failure(rel_path, FailureKind::CopyFile, e.to_string()),
        }
    }

    report
}

/// Create each missing ancestor of `rel_path` under `root`, counting new ones
fn ensure_parent_dirs(
    root: &Path,
    rel_path: &Path,
    report: &mut CloneReport,
) -> std::result::Result<(), (PathBuf, std::io::Error)> {
    let Some(parent) = rel_path.parent() else {
        return Ok(());
    };

    let mut current = PathBuf::new();
    for component in parent.components() {
        current.push(component);
        let target = root.join(&current);
        if target.is_dir() {
            continue;
        }
        fs::create_dir(&target).map_err(|e| (current.clone(), e))?;
        tracing::debug!("Created {}", current.display());
        report.dirs_created += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;
    use walkdir::WalkDir;

    fn bundled_dir() -> Utf8PathBuf {
        Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../template")
    }

    fn files_under(root: &Path) -> BTreeSet<PathBuf> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn test_embedded_has_manifest() {
        assert!(EmbeddedTemplate::get("package.json").is_some());
    }

    #[test]
    fn test_embedded_matches_bundled_dir() {
        let from_disk = TempDir::new().unwrap();
        let from_binary = TempDir::new().unwrap();

        let disk = TemplateSource::Directory(bundled_dir()).copy_into(from_disk.path());
        let embedded = TemplateSource::Embedded.copy_into(from_binary.path());

        assert!(disk.is_complete());
        assert!(embedded.is_complete());
        assert_eq!(disk.files_copied, embedded.files_copied);
        let files = files_under(from_disk.path());
        assert_eq!(files, files_under(from_binary.path()));
        for rel in files {
            assert_eq!(
                fs::read(from_disk.path().join(&rel)).unwrap(),
                fs::read(from_binary.path().join(&rel)).unwrap(),
                "{} differs",
                rel.display()
            );
        }
    }

    #[test]
    fn test_embedded_into_blocked_dir() {
        let dst = TempDir::new().unwrap();
        fs::write(dst.path().join("src"), b"not a dir").unwrap();

        let report = clone_embedded(dst.path());

        assert!(report
            .failures
            .iter()
            .any(|f| f.kind == FailureKind::CreateDir && f.path == Path::new("src")));
        assert!(dst.path().join("package.json").is_file());
    }

    #[test]
    fn test_resolve_explicit_dir() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

        let source = TemplateSource::resolve(Some(path.as_path())).unwrap();

        assert_eq!(source, TemplateSource::Directory(path));
    }

    #[test]
    fn test_resolve_missing_explicit_dir() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent")).unwrap();

        let err = TemplateSource::resolve(Some(path.as_path())).unwrap_err();

        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn test_installed_candidates_order() {
        let candidates = installed_candidates(Utf8Path::new("/opt/seedling/bin"));
        assert_eq!(
            candidates,
            vec![
                Utf8PathBuf::from("/opt/seedling/share/seedling/template"),
                Utf8PathBuf::from("/opt/seedling/bin/template"),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TemplateSource::Embedded.to_string(), "built-in template");
        assert_eq!(
            TemplateSource::Directory(Utf8PathBuf::from("/t")).to_string(),
            "/t"
        );
    }
}
