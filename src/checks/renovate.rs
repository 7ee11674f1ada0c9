//! Verify renovate conformance
//!
//! The renovate config must be JSON5, extend the base preset, assign the
//! repo owner and keep pre-commit updates enabled.

use std::collections::BTreeSet;

use log::debug;
use serde_json::{Value, json};

use crate::checks::support::{ndiff, read_text};
use crate::core::models::{CheckResult, WorktreeTarget};

/// Name of the check
pub const NAME: &str = "renovate";

const EXTENDS: &str = "extends";
const EXPECTED_EXTENDS: &[&str] = &["config:base"];
const ASSIGNEES: &str = "assignees";
const PRECOMMIT: &str = "pre-commit";
const DEPENDENCY_DASHBOARD: &str = "dependencyDashboard";

/// Pretty JSON of `{key: value}`
fn keyed(key: &str, value: &Value) -> String {
    let mut object = serde_json::Map::new();
    object.insert(key.to_string(), value.clone());
    serde_json::to_string_pretty(&Value::Object(object)).unwrap_or_default()
}

fn mismatch(key: &str, actual: &Value, expected: &Value) -> String {
    format!(
        "Renovate '{key}' configuration mismatch:\n{}",
        ndiff(&keyed(key, actual), &keyed(key, expected))
    )
}

fn strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(ToString::to_string).collect())
        .unwrap_or_default()
}

/// `renovate.json5` follows the shared conventions
pub fn check(target: &WorktreeTarget) -> CheckResult {
    if target.file("renovate.json").exists() {
        return Err("Found renovate.json but prefer renovate.json5".into());
    }

    let config_file = [target.file("renovate.json5"), target.file(".github/renovate.json5")]
        .into_iter()
        .find(|p| p.exists())
        .ok_or("No renovate.json5 configuration file found")?;
    debug!("Reading {}", config_file.display());

    let renovate: Value = json5::from_str(&read_text(&config_file)?)
        .map_err(|e| format!("Unable to parse {}: {e}", config_file.display()))?;

    let extends: BTreeSet<String> = strings(renovate.get(EXTENDS)).into_iter().collect();
    let mut wanted = extends.clone();
    wanted.extend(EXPECTED_EXTENDS.iter().map(ToString::to_string));
    if extends != wanted {
        return Err(mismatch(EXTENDS, &json!(extends), &json!(wanted)).into());
    }

    let assignees = strings(renovate.get(ASSIGNEES));
    let owner = target.repo.owner();
    if !assignees.iter().any(|a| a == owner) {
        let mut wanted = assignees.clone();
        wanted.push(owner.to_string());
        return Err(mismatch(ASSIGNEES, &json!(assignees), &json!(wanted)).into());
    }

    let expected_precommit = json!({"enabled": true});
    let precommit = renovate.get(PRECOMMIT).cloned().unwrap_or_else(|| json!([]));
    if precommit != expected_precommit {
        return Err(mismatch(PRECOMMIT, &precommit, &expected_precommit).into());
    }

    if renovate.get(DEPENDENCY_DASHBOARD).is_some() {
        return Err(format!("Renovate '{DEPENDENCY_DASHBOARD}' is unnecessary").into());
    }
    Ok(())
}
