//! Error types for seedling-projects

use thiserror::Error;

/// Result type alias using seedling-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project directory already exists
    #[error("Target directory already exists: {path}")]
    ProjectExists { path: String },

    /// Invalid project name
    #[error("Invalid project name: {name}. Project name should not contain special characters (including space) except hyphens (-)")]
    InvalidProjectName { name: String },

    /// Project name points at the current directory
    #[error("Cannot use current folder as project directory")]
    InvalidTarget,

    /// Project name would place the project outside the working directory
    #[error("Project name must stay inside the current folder: {name}")]
    TargetOutsideParent { name: String },

    /// Project directory would land inside the template being copied
    #[error("Project directory {target} is inside the template directory {template}")]
    TargetInsideTemplate { target: String, template: String },

    /// No name given and nobody to ask
    #[error("No project name given and stdin is not interactive. Pass the project name as an argument")]
    NotInteractive,

    /// Template directory not found
    #[error("Template directory not found: {path}")]
    TemplateNotFound { path: String },

    /// Manifest could not be read
    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid JSON
    #[error("Failed to parse manifest {path}: {source}")]
    ManifestParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest is valid JSON but not an object
    #[error("Manifest {path} is not a JSON object")]
    ManifestNotObject { path: String },

    /// Manifest could not be written back
    #[error("Failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Invalid path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create a template not found error
    pub fn template_not_found(path: impl Into<String>) -> Self {
        Self::TemplateNotFound { path: path.into() }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt(message.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create a target outside parent error
    pub fn target_outside_parent(name: impl Into<String>) -> Self {
        Self::TargetOutsideParent { name: name.into() }
    }

    /// Create a target inside template error
    pub fn target_inside_template(target: impl Into<String>, template: impl Into<String>) -> Self {
        Self::TargetInsideTemplate {
            target: target.into(),
            template: template.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_inside_template_message() {
        let err = Error::target_inside_template("/work/app", "/work");
        let msg = err.to_string();
        assert!(msg.contains("/work/app"));
        assert!(msg.contains("inside the template"));
    }

    #[test]
    fn test_invalid_name_message() {
        let err = Error::invalid_project_name("my@project");
        let msg = err.to_string();
        assert!(msg.contains("my@project"));
        assert!(msg.contains("hyphens"));
    }
}
