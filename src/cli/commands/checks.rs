//! List the available checks

use repo_conformance::checks;
use repo_conformance::output::{CheckInfo, CheckList, OutputMode};

/// Print every registered check in execution order
pub fn checks(mode: OutputMode) -> anyhow::Result<()> {
    let list = CheckList {
        checks: checks::catalog()?
            .into_iter()
            .map(|entry| CheckInfo {
                name: entry.name,
                level: entry.level.as_str().to_string(),
                default_enabled: entry.default_enabled,
            })
            .collect(),
    };
    list.render(mode);
    Ok(())
}
