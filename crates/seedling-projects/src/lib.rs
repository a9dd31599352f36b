//! # seedling-projects
//!
//! Project scaffolding library for the seedling CLI providing:
//! - Project name resolution and validation
//! - Recursive template copy with per-entry failure containment
//! - `package.json` name patching
//! - Template lookup (explicit, installed, or embedded)
//!
//! # Examples
//!
//! ## Create a project from the bundled template
//!
//! ```no_run
//! use seedling_projects::{ProjectName, Scaffolder, TemplateSource};
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let name = ProjectName::parse("my-app")?;
//! let scaffolder = Scaffolder::new(TemplateSource::resolve(None)?);
//! let report = scaffolder.create(Utf8Path::new("/tmp"), &name)?;
//!
//! for failure in &report.copy.failures {
//!     eprintln!("skipped {}", failure.path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Copy a tree without the rest of the pipeline
//!
//! ```no_run
//! use seedling_projects::clone::clone_tree;
//!
//! let report = clone_tree("/path/to/template", "/path/to/empty-dir");
//! assert!(report.is_complete());
//! ```

pub mod clone;
pub mod error;
pub mod manifest;
pub mod name;
pub mod scaffold;
pub mod template;

pub use error::{Error, Result};

pub use clone::{clone_tree, CloneReport, EntryFailure, FailureKind};
pub use manifest::{patch_name, PatchOutcome, MANIFEST_FILE};
pub use name::{resolve_project_name, NamePrompt, ProjectName};
pub use scaffold::{ManifestOutcome, ScaffoldReport, Scaffolder, Stage};
pub use template::TemplateSource;
