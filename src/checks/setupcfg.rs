//! Verify python project setup.cfg conformance

use log::debug;

use crate::checks::support::read_setup_cfg;
use crate::core::models::{CheckResult, WorktreeTarget};

/// Name of the check
pub const NAME: &str = "setupcfg";

const URL_FORMAT: &str = "https://github.com/{user}/{repo}";

/// Project metadata matches the repository
pub fn check(target: &WorktreeTarget) -> CheckResult {
    let config = read_setup_cfg(target)?;
    let repo = &target.repo;

    let metadata = config
        .section(Some("metadata"))
        .ok_or("setup.cfg does not have 'metadata'")?;
    let name = metadata.get("name").ok_or("setup.cfg does not have 'metadata.name'")?;
    debug!("setup.cfg metadata.name: {name}");
    if name.replace('-', "_") != repo.name.replace('-', "_") {
        return Err(format!("Python project name does not match repo name: {name} != {}", repo.name).into());
    }

    let expected_url = URL_FORMAT.replace("{user}", repo.owner()).replace("{repo}", &repo.name);
    let url = metadata.get("url").ok_or("setup.cfg does not have 'metadata.url'")?;
    if url != expected_url {
        return Err(format!("Python project url does not match repo url: {url} != {expected_url}").into());
    }

    if config.section(Some("flake8")).is_some() {
        return Err("Found flake8 config in setup.cfg; switch to ruff".into());
    }
    Ok(())
}
