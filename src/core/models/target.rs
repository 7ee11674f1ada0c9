//! Check targets
//!
//! Each registry is parameterized by the kind of thing its checks inspect.
//! Repo-level checks see a [`RepoTarget`]; checks over a checked-out working
//! tree see a [`WorktreeTarget`].

use std::path::{Path, PathBuf};

use super::{CheckConfig, Repo};

/// Something a registry of checks can run against
pub trait Target {
    /// Short description used in log output
    fn describe(&self) -> String;
}

/// A repository from the manifest, with its effective check config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    /// The repository under check
    pub repo: Repo,

    /// Global, per-repo and command line overrides merged together
    pub config: CheckConfig,
}

impl RepoTarget {
    /// Create a repo target
    #[must_use]
    pub const fn new(repo: Repo, config: CheckConfig) -> Self {
        Self { repo, config }
    }
}

impl Target for RepoTarget {
    fn describe(&self) -> String {
        self.repo.to_string()
    }
}

/// A repository together with a local checkout of its main branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeTarget {
    /// The repository under check
    pub repo: Repo,

    /// Root of the working tree
    pub path: PathBuf,
}

impl WorktreeTarget {
    /// Create a worktree target
    #[must_use]
    pub fn new(repo: Repo, path: impl Into<PathBuf>) -> Self {
        Self {
            repo,
            path: path.into(),
        }
    }

    /// Root of the working tree
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.path
    }

    /// Path of `relative` inside the working tree
    #[must_use]
    pub fn file(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

impl Target for WorktreeTarget {
    fn describe(&self) -> String {
        format!("{} ({})", self.repo, self.path.display())
    }
}
