//! List the GitHub repositories of the manifest user

use std::path::Path;

use repo_conformance::adapters::RestGithub;
use repo_conformance::core::services::remote_repos;
use repo_conformance::output::{OutputMode, RepoEntry, RepoList};

/// Print public, non-fork, non-archived repos, marking the managed ones
pub fn list_repos(manifest: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (settings, manifest) = super::load(manifest)?;
    let github = RestGithub::new(&settings.github.api_url, settings.github_token())?;

    let repos = remote_repos(&github, &manifest)?
        .into_iter()
        .map(|repo| RepoEntry {
            name: repo.name,
            user: repo.owner,
            managed: Some(repo.managed),
        })
        .collect();
    RepoList { repos }.render(mode);
    Ok(())
}
