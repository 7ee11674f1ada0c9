//! Verify flake8 conformance
//!
//! Opt-in for projects that have not moved to ruff yet.

use crate::checks::support::read_setup_cfg;
use crate::core::models::{CheckResult, WorktreeTarget};

/// Name of the check
pub const NAME: &str = "flake8";

/// `setup.cfg` carries a well-formed `[flake8]` section
pub fn check(target: &WorktreeTarget) -> CheckResult {
    let config = read_setup_cfg(target)?;

    let flake8 = config
        .section(Some("flake8"))
        .ok_or("flake8 configuration missing from setup.cfg")?;
    if let Some(ignore) = flake8.get("ignore")
        && ignore.contains('#')
    {
        return Err(format!("flake8 ignore content has invalid format: {ignore}").into());
    }
    Ok(())
}
