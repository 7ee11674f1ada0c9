//! List the repositories in the manifest

use std::path::Path;

use repo_conformance::output::{OutputMode, RepoEntry, RepoList};

/// Print every manifest repo with its owner
pub fn list(manifest: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (_, manifest) = super::load(manifest)?;

    let result = RepoList {
        repos: manifest
            .repos
            .iter()
            .map(|repo| RepoEntry {
                name: repo.name.clone(),
                user: repo.owner().to_string(),
                managed: None,
            })
            .collect(),
    };
    result.render(mode);
    Ok(())
}
