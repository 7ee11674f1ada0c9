//! Configuration errors
//!
//! These indicate a setup problem (a bad manifest entry, a typo in a check
//! name, a registry wired twice), never a policy violation. They abort the
//! whole run.

use thiserror::Error;

/// Errors in how checks are registered or selected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A check name was registered twice
    #[error("check '{0}' is already registered")]
    DuplicateCheck(String),

    /// Exclude/include lists reference checks that do not exist
    #[error("unknown check(s): {}", .0.join(", "))]
    UnknownChecks(Vec<String>),

    /// A repository named on the command line is not in the manifest
    #[error("repo '{0}' not found in manifest")]
    UnknownRepo(String),
}
