//! `package.json` name patching.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Manifest location relative to the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Result of a successful patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// The `name` the template shipped with, when it was a string
    pub previous: Option<String>,
}

/// Replace the top-level `name` of `<target_dir>/package.json`.
///
/// The key is added when missing. Every other field keeps its value and
/// position; whitespace is normalized to two-space indentation.
pub fn patch_name(target_dir: impl AsRef<Path>, new_name: &str) -> Result<PatchOutcome> {
    let path = target_dir.as_ref().join(MANIFEST_FILE);
    let display = path.display().to_string();

    let text = fs::read_to_string(&path).map_err(|source| Error::ManifestRead {
        path: display.clone(),
        source,
    })?;

    let mut doc: Value = serde_json::from_str(&text).map_err(|source| Error::ManifestParse {
        path: display.clone(),
        source,
    })?;

    let fields = doc
        .as_object_mut()
        .ok_or_else(|| Error::ManifestNotObject {
            path: display.clone(),
        })?;

    let previous = fields
        .insert("name".to_string(), Value::String(new_name.to_string()))
        .and_then(|old| old.as_str().map(str::to_string));

    let mut rendered = serde_json::to_string_pretty(&doc)?;
    rendered.push('\n');

    fs::write(&path, rendered).map_err(|source| Error::ManifestWrite {
        path: display,
        source,
    })?;

    tracing::debug!(
        "Patched manifest name {:?} -> {:?}",
        previous.as_deref().unwrap_or(""),
        new_name
    );

    Ok(PatchOutcome { previous })
}
