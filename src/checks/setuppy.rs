//! Verify python project setup.py conformance
//!
//! Packaging metadata belongs in `setup.cfg`; `setup.py` must be the bare
//! `setup()` shim.

use crate::checks::support::read_text;
use crate::core::models::{CheckResult, WorktreeTarget};

/// Name of the check
pub const NAME: &str = "setuppy";

/// `setup.py` exists and only calls `setup()`
pub fn check(target: &WorktreeTarget) -> CheckResult {
    let setuppy = target.file("setup.py");
    if !setuppy.exists() {
        return Err("Repo has no setup.py".into());
    }

    let contents = read_text(&setuppy)?;
    if !contents.contains("setup()") {
        if contents.contains("setup(") {
            return Err("Repo has setup.py that is not minimal".into());
        }
        return Err("Repo setup.py does not contain setup()".into());
    }
    Ok(())
}
