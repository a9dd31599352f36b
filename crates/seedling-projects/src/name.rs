//! Project name resolution.
//!
//! A project name is used twice: as the leaf of the target directory and as
//! the `name` field of the generated manifest. It comes from one of two
//! places:
//! - the positional CLI argument, taken verbatim (only `.` is refused)
//! - an interactive prompt, normalized and validated until it is accepted

use crate::error::{Error, Result};
use camino::{Utf8Component, Utf8Path};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").expect("project name regex is valid"));

/// Name offered when the user just presses enter
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Question shown by the interactive prompt
pub const NAME_PROMPT: &str = "What's your project name?";

/// Resolved project name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a name against the allowed character set
    pub fn parse(name: &str) -> Result<Self> {
        if is_valid_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::invalid_project_name(name))
        }
    }

    /// Take a name from the command line as-is.
    ///
    /// The current-directory marker is refused, and so is anything that
    /// would resolve outside the parent directory (absolute paths, `..`).
    pub fn from_arg(arg: &str) -> Result<Self> {
        let path = Utf8Path::new(arg);
        if path.components().all(|c| c == Utf8Component::CurDir) {
            return Err(Error::InvalidTarget);
        }
        if path
            .components()
            .any(|c| !matches!(c, Utf8Component::Normal(_) | Utf8Component::CurDir))
        {
            return Err(Error::target_outside_parent(arg));
        }
        Ok(Self(arg.to_string()))
    }

    /// Normalize free-form input and validate the result
    pub fn from_input(input: &str) -> Result<Self> {
        Self::parse(&normalize(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lower-case the input and turn every space into a hyphen.
///
/// Runs of spaces become runs of hyphens; nothing is collapsed or trimmed.
pub fn normalize(input: &str) -> String {
    input.to_lowercase().replace(' ', "-")
}

/// Check a name against `[a-zA-Z0-9-]+`
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Source of interactive answers for name resolution
pub trait NamePrompt {
    /// Ask for a project name, offering `default` when the answer is empty
    fn ask(&mut self, message: &str, default: &str) -> Result<String>;

    /// Tell the user why the last answer was refused
    fn reject(&mut self, reason: &str);
}

/// Resolve the project name from an optional argument, prompting when absent
pub fn resolve_project_name(arg: Option<&str>, prompt: &mut dyn NamePrompt) -> Result<ProjectName> {
    match arg {
        Some(arg) => ProjectName::from_arg(arg),
        None => prompt_for_name(prompt),
    }
}

/// Keep asking until the normalized answer is a valid name
pub fn prompt_for_name(prompt: &mut dyn NamePrompt) -> Result<ProjectName> {
    loop {
        let answer = prompt.ask(NAME_PROMPT, DEFAULT_PROJECT_NAME)?;
        match ProjectName::from_input(&answer) {
            Ok(name) => {
                tracing::debug!("Resolved project name: {}", name);
                return Ok(name);
            }
            Err(e) => {
                tracing::debug!("Rejected project name {:?}", answer);
                prompt.reject(&e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Prompt that replays canned answers and records rejections
    struct ScriptedPrompt {
        answers: VecDeque<String>,
        rejections: Vec<String>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                rejections: Vec::new(),
            }
        }
    }

    impl NamePrompt for ScriptedPrompt {
        fn ask(&mut self, _message: &str, default: &str) -> Result<String> {
            match self.answers.pop_front() {
                Some(a) if a.is_empty() => Ok(default.to_string()),
                Some(a) => Ok(a),
                None => Err(Error::prompt("no more answers")),
            }
        }

        fn reject(&mut self, reason: &str) {
            self.rejections.push(reason.to_string());
        }
    }

    #[test]
    fn test_valid_names() {
        for name in ["foo", "foo-bar", "Foo123", "123", "-", "a-B-c-9"] {
            assert!(is_valid_name(name), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "my project", "my@project", "foo_bar", "a/b", "..", "café"] {
            assert!(!is_valid_name(name), "{:?} should be invalid", name);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("My Project"), "my-project");
        assert_eq!(normalize("a  b"), "a--b");
        assert_eq!(normalize("already-fine"), "already-fine");
    }

    #[test]
    fn test_from_arg_preserves_value() {
        for name in ["foo-bar", "MyApp", "x1"] {
            assert_eq!(ProjectName::from_arg(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_from_arg_rejects_current_dir() {
        assert!(matches!(
            ProjectName::from_arg("."),
            Err(Error::InvalidTarget)
        ));
    }

    #[test]
    fn test_from_arg_rejects_escaping_paths() {
        for arg in ["/tmp/escaped", "../sibling", "a/../../b", "/"] {
            assert!(
                matches!(
                    ProjectName::from_arg(arg),
                    Err(Error::TargetOutsideParent { .. })
                ),
                "{} should be refused",
                arg
            );
        }
        assert!(matches!(
            ProjectName::from_arg("./"),
            Err(Error::InvalidTarget)
        ));
    }

    #[test]
    fn test_from_input_normalizes() {
        let name = ProjectName::from_input("My Project").unwrap();
        assert_eq!(name.as_str(), "my-project");
    }

    #[test]
    fn test_prompt_reprompts_on_invalid() {
        let mut prompt = ScriptedPrompt::new(&["my@project", "Good Name"]);
        let name = resolve_project_name(None, &mut prompt).unwrap();
        assert_eq!(name.as_str(), "good-name");
        assert_eq!(prompt.rejections.len(), 1);
        assert!(prompt.rejections[0].contains("my@project"));
    }

    #[test]
    fn test_prompt_default() {
        let mut prompt = ScriptedPrompt::new(&[""]);
        let name = prompt_for_name(&mut prompt).unwrap();
        assert_eq!(name.as_str(), DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn test_prompt_error_propagates() {
        let mut prompt = ScriptedPrompt::new(&["bad!"]);
        assert!(matches!(
            prompt_for_name(&mut prompt),
            Err(Error::Prompt(_))
        ));
    }

    #[test]
    fn test_argument_skips_prompt() {
        let mut prompt = ScriptedPrompt::new(&[]);
        let name = resolve_project_name(Some("cli-name"), &mut prompt).unwrap();
        assert_eq!(name.as_str(), "cli-name");
    }
}
