//! Manifest-wide check runs
//!
//! Selects repos from the manifest, validates every selected repo's
//! effective configuration, then runs the repo-level registry over each repo
//! in manifest order. Configuration problems abort before any check runs.

use std::path::Path;

use log::{debug, info};

use crate::core::error::ConfigError;
use crate::core::models::{CheckConfig, Failure, Manifest, Repo, RepoTarget};
use crate::core::services::CheckRegistry;

/// A failure attributed to the repo it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFailure {
    /// The failing repo
    pub repo: Repo,
    /// What failed
    pub failure: Failure,
}

/// Outcome of a manifest-wide run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of repos checked
    pub repos_checked: usize,
    /// Every failure, in repo then check order
    pub failures: Vec<RepoFailure>,
}

impl RunSummary {
    /// True when no check failed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Split a comma or whitespace separated list of check names
#[must_use]
pub fn split_names(list: &str) -> Vec<String> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|n| !n.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Repos to check
///
/// With `name`, the first repo so named, optionally bound to a local
/// `worktree`. Without it, every manifest repo that is not ignored.
pub fn select_repos(
    manifest: &Manifest,
    name: Option<&str>,
    worktree: Option<&Path>,
) -> Result<Vec<Repo>, ConfigError> {
    let Some(name) = name else {
        return Ok(manifest
            .repos
            .iter()
            .filter(|r| {
                let ignored = manifest.is_ignored(&r.name);
                if ignored {
                    debug!("Skipping ignored repo {r}");
                }
                !ignored
            })
            .cloned()
            .collect());
    };

    let mut repo = manifest
        .find_repo(name)
        .cloned()
        .ok_or_else(|| ConfigError::UnknownRepo(name.to_string()))?;
    if let Some(path) = worktree {
        repo.worktree_override = Some(path.to_path_buf());
    }
    Ok(vec![repo])
}

/// Run `registry` over `repos`
///
/// Each repo's config is the manifest's global config, merged with the
/// repo's own, merged with `overrides`. All configs are validated first.
pub fn run_repos(
    registry: &CheckRegistry<RepoTarget>,
    manifest: &Manifest,
    repos: Vec<Repo>,
    overrides: &CheckConfig,
) -> Result<RunSummary, ConfigError> {
    let targets: Vec<RepoTarget> = repos
        .into_iter()
        .map(|repo| {
            let config = manifest.effective_config(&repo).merge(overrides);
            RepoTarget::new(repo, config)
        })
        .collect();
    for target in &targets {
        registry.validate(&target.config)?;
    }

    let mut summary = RunSummary {
        repos_checked: targets.len(),
        failures: Vec::new(),
    };
    for target in &targets {
        info!("Checking {}", target.repo);
        let failures = registry.run_checks(target, &target.config)?;
        summary.failures.extend(failures.into_iter().map(|failure| RepoFailure {
            repo: target.repo.clone(),
            failure,
        }));
    }
    Ok(summary)
}
