//! Working tree port
//!
//! Supplies a local checkout of a repository's main branch. The checkout
//! lives exactly as long as the returned [`Worktree`] guard.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use thiserror::Error;

use crate::core::models::Repo;

/// Errors acquiring a working tree
#[derive(Debug, Error)]
pub enum WorktreeError {
    /// A bound local path is missing or not a directory
    #[error("worktree is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The origin remote could not be created or reached
    #[error("Failure to setup repo origin: {0}")]
    Origin(String),

    /// The remote has no `main` branch
    #[error("Git repo does not have main branch")]
    NoMainBranch,

    /// The fresh checkout has modified files
    #[error("Local clone of repository is dirty")]
    Dirty,

    /// The fresh checkout has untracked files
    #[error("Local clone of repository has untracked files")]
    Untracked,

    /// Any other git failure
    #[error("git error: {0}")]
    Git(String),

    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A checked-out working tree
///
/// Temporary checkouts are removed when the guard is dropped. Bound local
/// directories are left untouched.
#[derive(Debug)]
pub struct Worktree {
    path: PathBuf,
    checkout: Option<TempDir>,
}

impl Worktree {
    /// Bind an existing local directory
    #[must_use]
    pub fn bound(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            checkout: None,
        }
    }

    /// Take ownership of a temporary checkout
    #[must_use]
    pub fn temporary(dir: TempDir) -> Self {
        Self {
            path: dir.path().to_path_buf(),
            checkout: Some(dir),
        }
    }

    /// Root of the working tree
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the tree is deleted when the guard drops
    #[must_use]
    pub const fn is_temporary(&self) -> bool {
        self.checkout.is_some()
    }
}

/// Source of working trees
pub trait WorktreeProvider: Send + Sync {
    /// Acquire a working tree for `repo`
    fn open(&self, repo: &Repo) -> Result<Worktree, WorktreeError>;
}
