//! Check selection
//!
//! Decides which registered checks run for a given [`CheckConfig`]:
//!
//! - default-enabled checks run unless excluded
//! - default-disabled checks run only when included
//! - exclude always wins over include

use crate::core::models::CheckConfig;

/// Whether a check with the given default state runs under `config`
#[must_use]
pub fn is_enabled(name: &str, default_enabled: bool, config: &CheckConfig) -> bool {
    if config.is_excluded(name) {
        return false;
    }
    default_enabled || config.is_included(name)
}

/// Names referenced by `config` that `known` does not accept, sorted
#[must_use]
pub fn unknown_names(config: &CheckConfig, known: impl Fn(&str) -> bool) -> Vec<String> {
    let mut unknown: Vec<String> =
        config.referenced().filter(|n| !known(n)).map(ToString::to_string).collect();
    unknown.sort();
    unknown.dedup();
    unknown
}
