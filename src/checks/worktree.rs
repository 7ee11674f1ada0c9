//! Run the worktree checks against a checkout of the repository
//!
//! The working tree is acquired for the duration of one call and released
//! on every return path when the [`Worktree`](crate::core::ports::Worktree)
//! guard drops.

use log::{debug, info};

use crate::core::models::{CheckConfig, CheckResult, RepoTarget, WorktreeTarget};
use crate::core::ports::WorktreeProvider;
use crate::core::services::CheckRegistry;

/// Name of the check
pub const NAME: &str = "worktree";

/// Open a working tree for the repo and run `registry` against it
///
/// Names in the target's config that belong to the repo level are dropped
/// before the inner run. Inner failures are returned as one error, so each
/// of them ends up nested under this check's name.
pub fn check(
    provider: &dyn WorktreeProvider,
    registry: &CheckRegistry<WorktreeTarget>,
    target: &RepoTarget,
) -> CheckResult {
    let repo = &target.repo;
    let worktree = provider
        .open(repo)
        .map_err(|e| format!("Unable to open working tree of {repo}: {e}"))?;
    info!("Checking working tree of {repo} at {}", worktree.path().display());

    let inner = WorktreeTarget::new(repo.clone(), worktree.path());
    let config: CheckConfig = target.config.restricted_to(|n| registry.knows(n));
    let failures = registry
        .run_checks(&inner, &config)
        .map_err(|e| format!("Invalid worktree check configuration: {e}"))?;

    debug!("{} worktree failure(s) for {repo}", failures.len());
    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.into())
    }
}
