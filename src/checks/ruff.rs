//! Verify ruff conformance
//!
//! ruff replaces isort, flake8 and pylint: it must be configured in
//! requirements, pre-commit and CI, and the tools it replaces must be gone.

use log::debug;
use serde_yaml::Value;

use crate::checks::support::{any_contains, ndiff, read_requirements, read_setup_cfg, read_text, read_workflows};
use crate::core::models::{CheckError, CheckResult, WorktreeTarget};

/// Name of the check
pub const NAME: &str = "ruff";

/// Upstream pre-commit hook repository
pub const PRE_COMMIT_URL: &str = "https://github.com/charliermarsh/ruff-pre-commit";

const EXPECTED_PRECOMMIT: &str = "\
repo: https://github.com/charliermarsh/ruff-pre-commit
hooks:
- id: ruff
  args:
  - --fix
  - --exit-non-zero-on-fix
";

const WANT_DEPS: &[&str] = &["ruff"];
const AVOID_DEPS: &[&str] = &["isort", "flake8", "pylint"];
const RUFF_ACTION: &str = "chartboost/ruff-action@";

fn expected_precommit() -> Result<Value, CheckError> {
    serde_yaml::from_str(EXPECTED_PRECOMMIT).map_err(|e| CheckError::from(format!("Invalid expected config: {e}")))
}

/// Hook repositories from `.pre-commit-config.yaml`, with `rev` removed
///
/// Versions are kept fresh by renovate, so they are not compared.
fn precommit_repos(target: &WorktreeTarget) -> Result<Vec<Value>, CheckError> {
    let path = target.file(".pre-commit-config.yaml");
    if !path.exists() {
        return Err("Missing .pre-commit-config.yaml".into());
    }
    let config: Value = serde_yaml::from_str(&read_text(&path)?)
        .map_err(|e| format!("Unable to parse .pre-commit-config.yaml: {e}"))?;

    let mut repos: Vec<Value> = config
        .get("repos")
        .and_then(Value::as_sequence)
        .cloned()
        .unwrap_or_default();
    for repo in &mut repos {
        if let Some(mapping) = repo.as_mapping_mut() {
            mapping.remove("rev");
        }
    }
    Ok(repos)
}

fn repo_url(repo: &Value) -> &str {
    repo.get("repo").and_then(Value::as_str).unwrap_or_default()
}

fn check_requirements(target: &WorktreeTarget) -> CheckResult {
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
    Ok(())
}

fn check_precommit(target: &WorktreeTarget) -> CheckResult {
    let repos = precommit_repos(target)?;
    let expected = expected_precommit()?;

    let actual = repos
        .iter()
        .find(|r| repo_url(r) == PRE_COMMIT_URL)
        .cloned()
        .unwrap_or_else(|| Value::Mapping(serde_yaml::Mapping::new()));
    if actual != expected {
        let render = |v: &Value| serde_yaml::to_string(&vec![v.clone()]).unwrap_or_default();
        return Err(format!(
            "Ruff pre-commit configuration mismatch:\n{}",
            ndiff(&render(&actual), &render(&expected))
        )
        .into());
    }

    debug!("Checking pre-commit for unwanted deps {AVOID_DEPS:?}");
    for dep in AVOID_DEPS {
        if repos.iter().any(|r| repo_url(r).contains(dep)) {
            return Err(format!("Found unwanted {dep} dependencies in pre-commit files").into());
        }
    }
    Ok(())
}

fn check_workflows(target: &WorktreeTarget) -> CheckResult {
    debug!("Checking workflows for unwanted deps {AVOID_DEPS:?}");
    let workflows = read_workflows(target)?;
    for dep in WANT_DEPS {
        if !any_contains(&workflows, dep) {
            return Err(format!("Missing {dep} dependencies in workflows files").into());
        }
    }
    for dep in AVOID_DEPS {
        if any_contains(&workflows, dep) {
            return Err(format!("Found unwanted {dep} dependencies in workflows files").into());
        }
    }
    if any_contains(&workflows, "--format") {
        return Err("Deprecated flag --format found in workflows files".into());
    }
    if !any_contains(&workflows, RUFF_ACTION) {
        return Err("Missing 'chartboost/ruff-action' in workflows files".into());
    }
    Ok(())
}

/// ruff is wired up everywhere and its predecessors are gone
pub fn check(target: &WorktreeTarget) -> CheckResult {
    let config = read_setup_cfg(target)?;
    if config.section(Some("flake8")).is_some() {
        return Err("Found flake8 config in setup.cfg; switch to ruff".into());
    }

    check_requirements(target)?;
    check_precommit(target)?;

    if target.file(".pylintrc").exists() {
        return Err("Found unwanted .pylintrc".into());
    }

    let renovate = target.file("renovate.json5");
    if renovate.exists() {
        debug!("Checking renovate config for unwanted deps {AVOID_DEPS:?}");
        let data = read_text(&renovate)?;
        if let Some(dep) = AVOID_DEPS.iter().find(|dep| data.contains(**dep)) {
            return Err(format!("Found unwanted {dep} dependencies in renovate config").into());
        }
    }

    check_workflows(target)
}
