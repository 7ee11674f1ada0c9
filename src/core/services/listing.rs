//! Repository listings
//!
//! Compares what GitHub holds for the manifest user against what the
//! manifest manages.

use log::debug;

use crate::core::models::Manifest;
use crate::core::ports::{GithubApi, GithubError};

/// A GitHub repository of the manifest user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepo {
    /// Repository name
    pub name: String,
    /// Owner login
    pub owner: String,
    /// Whether the manifest lists it
    pub managed: bool,
}

/// Public, non-fork, non-archived repos of the manifest user
///
/// Repos named in `ignored_repos` are left out. Order follows GitHub.
pub fn remote_repos(api: &dyn GithubApi, manifest: &Manifest) -> Result<Vec<RemoteRepo>, GithubError> {
    let mut repos = Vec::new();
    for repo in api.user_repositories(&manifest.default_user)? {
        if repo.fork || repo.archived || repo.private {
            debug!("Skipping {}/{}", repo.owner, repo.name);
            continue;
        }
        if manifest.is_ignored(&repo.name) {
            debug!("Skipping ignored {}/{}", repo.owner, repo.name);
            continue;
        }
        repos.push(RemoteRepo {
            managed: manifest.is_managed(&repo.name),
            name: repo.name,
            owner: repo.owner,
        });
    }
    Ok(repos)
}
