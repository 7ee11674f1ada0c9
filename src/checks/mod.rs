//! Conformance checks
//!
//! Two registries are built here. The repo-level registry runs against a
//! manifest entry; its `worktree` check opens a checkout and runs the
//! worktree-level registry against it, so failures from file-based rules
//! are reported as `[worktree][<rule>]`.

pub mod cruft;
pub mod flake8;
pub mod github;
pub mod pydantic;
pub mod python_version;
pub mod renovate;
pub mod ruff;
pub mod setupcfg;
pub mod setuppy;
pub mod support;
pub mod worktree;

use std::sync::Arc;

use crate::core::error::ConfigError;
use crate::core::models::{Repo, RepoTarget, WorktreeTarget};
use crate::core::ports::{
    GithubApi, GithubError, RepoSettings, Worktree, WorktreeError, WorktreeProvider,
};
use crate::core::services::CheckRegistry;

/// Build the registry of checks over a working tree
pub fn worktree_registry(api: Arc<dyn GithubApi>) -> Result<CheckRegistry<WorktreeTarget>, ConfigError> {
    let mut registry = CheckRegistry::new();
    registry.register(cruft::NAME, false, move |t: &WorktreeTarget| cruft::check(api.as_ref(), t))?;
    registry.register(flake8::NAME, false, flake8::check)?;
    registry.register(pydantic::NAME, false, pydantic::check)?;
    registry.register(python_version::NAME, true, python_version::check)?;
    registry.register(renovate::NAME, true, renovate::check)?;
    registry.register(ruff::NAME, true, ruff::check)?;
    registry.register(setupcfg::NAME, true, setupcfg::check)?;
    registry.register(setuppy::NAME, true, setuppy::check)?;
    Ok(registry)
}

/// Build the registry of checks over a manifest repo
///
/// `inner` becomes the registry run by the `worktree` check. Its names may
/// be used in any exclude/include list handed to the returned registry.
pub fn repo_registry_with(
    api: Arc<dyn GithubApi>,
    worktrees: Arc<dyn WorktreeProvider>,
    inner: CheckRegistry<WorktreeTarget>,
) -> Result<CheckRegistry<RepoTarget>, ConfigError> {
    let mut registry = CheckRegistry::new();
    registry.register(github::NAME, true, move |t: &RepoTarget| github::check(api.as_ref(), t))?;

    let inner_names = inner.known_names();
    registry.register_nested(worktree::NAME, true, inner_names, move |t: &RepoTarget| {
        worktree::check(worktrees.as_ref(), &inner, t)
    })?;
    Ok(registry)
}

/// Build the full two-level registry
pub fn repo_registry(
    api: Arc<dyn GithubApi>,
    worktrees: Arc<dyn WorktreeProvider>,
) -> Result<CheckRegistry<RepoTarget>, ConfigError> {
    let inner = worktree_registry(Arc::clone(&api))?;
    repo_registry_with(api, worktrees, inner)
}

/// Where a check runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Against a manifest repo
    Repo,
    /// Against a checkout of the repo
    Worktree,
}

impl Level {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repo => "repo",
            Self::Worktree => "worktree",
        }
    }
}

/// A registered check and its default state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Check name
    pub name: String,
    /// Registry the check belongs to
    pub level: Level,
    /// Whether it runs without an explicit include
    pub default_enabled: bool,
}

/// Stands in for both collaborators when registries are only inspected
#[derive(Debug)]
struct Detached;

impl GithubApi for Detached {
    fn repository(&self, owner: &str, name: &str) -> Result<RepoSettings, GithubError> {
        Err(GithubError::NotFound(format!("{owner}/{name}")))
    }

    fn latest_commit(&self, full_name: &str) -> Result<String, GithubError> {
        Err(GithubError::NotFound(full_name.to_string()))
    }

    fn user_repositories(&self, _: &str) -> Result<Vec<RepoSettings>, GithubError> {
        Ok(Vec::new())
    }
}

impl WorktreeProvider for Detached {
    fn open(&self, repo: &Repo) -> Result<Worktree, WorktreeError> {
        Err(WorktreeError::Git(format!("no working tree for {repo}")))
    }
}

fn entries<T>(registry: &CheckRegistry<T>, level: Level) -> Vec<CatalogEntry> {
    registry
        .names()
        .map(|name| CatalogEntry {
            name: name.to_string(),
            level,
            default_enabled: registry.is_default_enabled(name).unwrap_or_default(),
        })
        .collect()
}

/// Every check in execution order: repo level first, then worktree level
///
/// Nothing is contacted; the registries are built over detached
/// collaborators and only inspected.
pub fn catalog() -> Result<Vec<CatalogEntry>, ConfigError> {
    let inner = worktree_registry(Arc::new(Detached))?;
    let worktree_entries = entries(&inner, Level::Worktree);
    let outer = repo_registry_with(Arc::new(Detached), Arc::new(Detached), inner)?;

    let mut catalog = entries(&outer, Level::Repo);
    catalog.extend(worktree_entries);
    Ok(catalog)
}
