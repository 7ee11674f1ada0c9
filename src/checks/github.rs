//! Verify the GitHub repository settings

use log::debug;

use crate::core::models::{CheckResult, RepoTarget};
use crate::core::ports::{GithubApi, GithubError};

/// Name of the check
pub const NAME: &str = "github";

/// The repository exists and has wiki and projects turned off
pub fn check(github: &dyn GithubApi, target: &RepoTarget) -> CheckResult {
    let repo = &target.repo;
    let settings = match github.repository(repo.owner(), &repo.name) {
        Ok(settings) => settings,
        Err(e @ GithubError::NotFound(_)) => {
            return Err(format!("Github repo does not exist: {}: {e}", repo.full_name()).into());
        }
        Err(e) => return Err(format!("Unable to fetch Github repo {}: {e}", repo.full_name()).into()),
    };
    debug!("{} settings: {settings:?}", repo.full_name());

    if settings.has_wiki {
        return Err("Repo has wiki enabled".into());
    }
    if settings.has_projects {
        return Err("Repo has projects enabled".into());
    }
    Ok(())
}
