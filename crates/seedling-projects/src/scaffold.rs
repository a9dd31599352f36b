//! Project creation pipeline.
//!
//! Runs the stages in order:
//! 1. Check that `<parent>/<name>` does not exist and is not inside the
//!    template directory
//! 2. Create it (non-recursively, so a concurrent creation still fails)
//! 3. Clone the template into it
//! 4. Patch the manifest name
//!
//! Only stages 1 and 2 can fail the run. Copy and manifest problems are
//! contained and returned in the [`ScaffoldReport`].

use crate::clone::CloneReport;
use crate::error::{Error, Result};
use crate::manifest::{patch_name, MANIFEST_FILE};
use crate::name::ProjectName;
use crate::template::TemplateSource;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;

/// Pipeline position, reported in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NameResolved,
    DestinationChecked,
    DirectoryCreated,
    Cloned,
    Patched,
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NameResolved => "name resolved",
            Self::DestinationChecked => "destination checked",
            Self::DirectoryCreated => "directory created",
            Self::Cloned => "cloned",
            Self::Patched => "patched",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

/// What happened to the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ManifestOutcome {
    Patched { previous: Option<String> },
    Failed { message: String },
}

impl ManifestOutcome {
    pub fn is_patched(&self) -> bool {
        matches!(self, Self::Patched { .. })
    }
}

/// Everything a caller needs to report on a finished run
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub name: ProjectName,
    pub project_dir: Utf8PathBuf,
    pub template: TemplateSource,
    pub copy: CloneReport,
    pub manifest: ManifestOutcome,
}

impl ScaffoldReport {
    /// True when every entry was copied and the manifest was patched
    pub fn is_clean(&self) -> bool {
        self.copy.is_complete() && self.manifest.is_patched()
    }
}

/// Creates projects from one template source
#[derive(Debug, Clone)]
pub struct Scaffolder {
    template: TemplateSource,
}

impl Scaffolder {
    pub fn new(template: TemplateSource) -> Self {
        Self { template }
    }

    /// Create `<parent>/<name>` from the template
    pub fn create(&self, parent: &Utf8Path, name: &ProjectName) -> Result<ScaffoldReport> {
        advance(Stage::NameResolved, name.as_str());

        let project_dir = parent.join(name.as_str());
        ensure_absent(&project_dir)?;
        ensure_outside_template(&self.template, parent, name)?;
        advance(Stage::DestinationChecked, project_dir.as_str());

        fs::create_dir(&project_dir).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::project_exists(project_dir.as_str()),
            _ => Error::Io(e),
        })?;
        advance(Stage::DirectoryCreated, project_dir.as_str());

        let copy = self.template.copy_into(&project_dir);
        if !copy.is_complete() {
            tracing::warn!(
                "{} template entries could not be copied",
                copy.failures.len()
            );
        }
        advance(Stage::Cloned, &self.template.to_string());

        let manifest = match patch_name(&project_dir, name.as_str()) {
            Ok(outcome) => ManifestOutcome::Patched {
                previous: outcome.previous,
            },
            Err(e) => {
                tracing::warn!("Could not update {}: {}", MANIFEST_FILE, e);
                ManifestOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };
        advance(Stage::Patched, MANIFEST_FILE);
        advance(Stage::Done, name.as_str());

        Ok(ScaffoldReport {
            name: name.clone(),
            project_dir,
            template: self.template.clone(),
            copy,
            manifest,
        })
    }
}

fn advance(stage: Stage, detail: &str) {
    tracing::debug!("Stage {}: {}", stage, detail);
}

/// Fail if anything, including a dangling symlink, sits at `path`
fn ensure_absent(path: &Utf8Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(_) => Err(Error::project_exists(path.as_str())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Io(e)),
    }
}

/// Refuse a project directory that would sit inside the template tree.
///
/// The copy walks the template while writing, so such a target would be
/// copied into itself until the path length limit.
fn ensure_outside_template(
    template: &TemplateSource,
    parent: &Utf8Path,
    name: &ProjectName,
) -> Result<()> {
    let TemplateSource::Directory(dir) = template else {
        return Ok(());
    };

    let template_dir = dir.canonicalize_utf8()?;
    let target = parent.canonicalize_utf8()?.join(name.as_str());
    if target.starts_with(&template_dir) {
        return Err(Error::target_inside_template(
            target.as_str(),
            template_dir.as_str(),
        ));
    }
    Ok(())
}
