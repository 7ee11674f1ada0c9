//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the check engine and the
//! systems the rule bodies read from (git checkouts, the GitHub API).
//!
//! Implementations live in the `adapters` module. Tests substitute their
//! own implementations so no check needs network access to be exercised.

mod github;
mod worktree;

pub use github::{GithubApi, GithubError, RepoSettings};
pub use worktree::{Worktree, WorktreeError, WorktreeProvider};
