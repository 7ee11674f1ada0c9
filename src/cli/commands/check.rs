//! Check manifest repositories for conformance

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use repo_conformance::adapters::{GitWorktreeProvider, RestGithub};
use repo_conformance::checks;
use repo_conformance::core::models::CheckConfig;
use repo_conformance::core::services::{run_repos, select_repos, split_names};
use repo_conformance::output::{CheckReport, FailureReport, OutputMode};

/// Arguments of the `check` command
#[derive(Debug, Default)]
pub struct CheckArgs {
    /// Only check the repo with this name
    pub repo: Option<String>,
    /// Raw `--exclude` values
    pub exclude: Vec<String>,
    /// Raw `--include` values
    pub include: Vec<String>,
    /// Local working tree for `repo`
    pub worktree: Option<PathBuf>,
}

fn names(values: &[String]) -> Vec<String> {
    values.iter().flat_map(|v| split_names(v)).collect()
}

/// Run every selected check and exit 1 if any fail
pub fn check(args: &CheckArgs, manifest: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (settings, manifest) = super::load(manifest)?;
    let token = settings.github_token();

    let github = Arc::new(RestGithub::new(&settings.github.api_url, token.clone())?);
    let worktrees =
        Arc::new(GitWorktreeProvider::new(&settings.git.clone_url_format).with_token(token));
    let registry = checks::repo_registry(github, worktrees)?;
    debug!("Registry: {registry:?}");

    let overrides = CheckConfig::new(names(&args.exclude), names(&args.include));
    let repos = select_repos(&manifest, args.repo.as_deref(), args.worktree.as_deref())?;
    let summary = run_repos(&registry, &manifest, repos, &overrides)?;

    let failures = summary
        .failures
        .iter()
        .map(|f| FailureReport::new(&f.repo, &f.failure))
        .collect();
    let report = CheckReport::new(summary.repos_checked, failures);
    report.render(mode);

    if !report.passed {
        std::process::exit(1);
    }
    Ok(())
}
