//! Verify the project is up to date with its cruft template

use serde::Deserialize;

use crate::checks::support::read_text;
use crate::core::models::{CheckResult, WorktreeTarget};
use crate::core::ports::GithubApi;

/// Name of the check
pub const NAME: &str = "cruft";

#[derive(Debug, Deserialize)]
struct CruftConfig {
    template: String,
    commit: String,
}

/// `owner/name` of a template URL such as `https://github.com/o/t.git`
fn template_repo(url: &str) -> Option<String> {
    let mut parts = url.trim_end_matches('/').trim_end_matches(".git").rsplit('/');
    let name = parts.next().filter(|s| !s.is_empty())?;
    let owner = parts.next().filter(|s| !s.is_empty() && !s.ends_with(':'))?;
    Some(format!("{owner}/{name}"))
}

/// The recorded template commit is the template's latest commit
pub fn check(github: &dyn GithubApi, target: &WorktreeTarget) -> CheckResult {
    let path = target.file(".cruft.json");
    if !path.exists() {
        return Err("Repo has no .cruft.json configuration file".into());
    }

    let config: CruftConfig = serde_json::from_str(&read_text(&path)?)
        .map_err(|e| format!("Unable to parse .cruft.json: {e}"))?;
    let full_name = template_repo(&config.template)
        .ok_or_else(|| format!("Unable to determine template repo from {}", config.template))?;
    let latest = github
        .latest_commit(&full_name)
        .map_err(|e| format!("Unable to get latest commit of {full_name}: {e}"))?;

    if config.commit != latest {
        return Err(format!("Repo is out of date, expected {latest}, got {}", config.commit).into());
    }
    Ok(())
}
