//! Verify supported python version conformance

use crate::checks::support::read_setup_cfg;
use crate::core::models::{CheckResult, WorktreeTarget};

/// Name of the check
pub const NAME: &str = "python_version";

/// Required `options.python_requires` value
pub const REQUIRES: &str = ">= 3.9";

const WORKFLOW: &str = ".github/workflows/python-package.yaml";

/// `python_requires` is pinned and the package workflow exists
pub fn check(target: &WorktreeTarget) -> CheckResult {
    let config = read_setup_cfg(target)?;

    let options = config.section(Some("options")).ok_or("setup.cfg does not have 'options'")?;
    let Some(requires) = options.get("python_requires") else {
        let present: Vec<String> = options.iter().map(|(k, v)| format!("{k}={v}")).collect();
        return Err(format!(
            "setup.cfg does not have 'options.python_requires': [{}]",
            present.join(", ")
        )
        .into());
    };
    if requires != REQUIRES {
        return Err(
            format!("setup.cfg 'options.python_requires' does not match: {requires} != {REQUIRES}").into()
        );
    }

    if !target.file(WORKFLOW).is_file() {
        return Err(format!("Repo has no {WORKFLOW}").into());
    }
    Ok(())
}
