//! Failure model
//!
//! A [`Failure`] records one policy violation. It is created by a leaf check
//! with an empty name path, and every execution layer it passes through on
//! the way out prepends its own check name.
//!
//! # Examples
//!
//! ```
//! use repo_conformance::core::models::Failure;
//!
//! let failure = Failure::new("Repo has no setup.py").of("setuppy").of("worktree");
//! assert_eq!(failure.names, vec!["worktree", "setuppy"]);
//! assert_eq!(failure.name(), "[worktree][setuppy]");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// An individual conformance check failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Human-readable description of the violation
    pub detail: String,

    /// Check names from the outermost check to the innermost
    #[serde(default)]
    pub names: Vec<String>,
}

impl Failure {
    /// Create a leaf failure with an empty name path
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            names: Vec::new(),
        }
    }

    /// Return this failure nested inside the check `name`
    ///
    /// The receiver is left untouched; the returned failure has `name`
    /// prepended to its path.
    #[must_use]
    pub fn of(&self, name: &str) -> Self {
        let mut names = Vec::with_capacity(self.names.len() + 1);
        names.push(name.to_string());
        names.extend(self.names.iter().cloned());
        Self {
            detail: self.detail.clone(),
            names,
        }
    }

    /// The full failure name, e.g. `[worktree][ruff]`
    #[must_use]
    pub fn name(&self) -> String {
        self.names.iter().map(|n| format!("[{n}]")).collect()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            write!(f, "{}", self.detail)
        } else {
            write!(f, "{} {}", self.name(), self.detail)
        }
    }
}

/// A conformance error signalled by a check
///
/// Carries one or more failures. A check returns it to end its own
/// execution; sibling checks keep running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckError {
    failures: Vec<Failure>,
}

/// Outcome of running a single check
pub type CheckResult = Result<(), CheckError>;

impl CheckError {
    /// The failures carried by this error
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Consume the error, returning its failures
    #[must_use]
    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }
}

impl From<&str> for CheckError {
    fn from(detail: &str) -> Self {
        Self::from(Failure::new(detail))
    }
}

impl From<String> for CheckError {
    fn from(detail: String) -> Self {
        Self::from(Failure::new(detail))
    }
}

impl From<Failure> for CheckError {
    fn from(failure: Failure) -> Self {
        Self {
            failures: vec![failure],
        }
    }
}

impl From<Vec<Failure>> for CheckError {
    fn from(failures: Vec<Failure>) -> Self {
        Self { failures }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details: Vec<String> = self.failures.iter().map(ToString::to_string).collect();
        write!(f, "{}", details.join("; "))
    }
}

impl std::error::Error for CheckError {}
