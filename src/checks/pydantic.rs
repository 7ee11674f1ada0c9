//! Verify pydantic conformance
//!
//! Libraries default to pydantic v2 in their pinned requirements while
//! still declaring and testing v1 compatibility.

use log::debug;

use crate::checks::support::{any_contains, read_requirements, read_setup_cfg, read_text};
use crate::core::models::{CheckResult, WorktreeTarget};

/// Name of the check
pub const NAME: &str = "pydantic";

const WANT_DEPS: &[&str] = &["pydantic==2"];
const AVOID_DEPS: &[&str] = &["pydantic==1"];
const PACKAGE_FILES: &[&str] = &[
    ".github/workflows/python-package.yaml",
    ".github/workflows/python-app.yaml",
];
const WANT_VERSIONS: &[&str] = &["pydantic==1"];

/// Requirements pin v2, `install_requires` allows v1, and CI tests v1
pub fn check(target: &WorktreeTarget) -> CheckResult {
    let config = read_setup_cfg(target)?;

    debug!("Checking requirements for unwanted deps {AVOID_DEPS:?}");
    let requirements = read_requirements(target)?;
    for dep in WANT_DEPS {
        if !any_contains(&requirements, dep) {
            return Err(format!("Missing {dep} dependencies in requirements files").into());
        }
    }
    for dep in AVOID_DEPS {
        if any_contains(&requirements, dep) {
            return Err(format!("Found unwanted {dep} dependencies in requirements files").into());
        }
    }

    let options = config.section(Some("options")).ok_or("setup.cfg does not have 'options'")?;
    let requires = options
        .get("install_requires")
        .ok_or("setup.cfg does not have 'options.install_requires'")?;
    if !requires.contains("pydantic") {
        return Err(format!(
            "setup.cfg 'options.install_requires' does not contain 'pydantic': {requires}"
        )
        .into());
    }
    if !requires.contains("pydantic>=1") {
        return Err(format!(
            "setup.cfg 'options.install_requires' does not support 'pydantic' v1: {requires}"
        )
        .into());
    }

    let mut workflows = Vec::new();
    for file in PACKAGE_FILES {
        let path = target.file(file);
        if path.is_file() {
            workflows.push(read_text(&path)?);
        }
    }
    if workflows.is_empty() {
        return Err(format!("Repo has no {}", PACKAGE_FILES.join(" or ")).into());
    }
    for version in WANT_VERSIONS {
        if !any_contains(&workflows, version) {
            return Err(format!("Missing pydantic '{version}' in workflow {}", PACKAGE_FILES.join(", ")).into());
        }
    }
    Ok(())
}
