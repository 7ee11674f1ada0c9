//! Centralized path definitions for repo-conformance
//!
//! ## Layout
//!
//! ```text
//! ~/.config/repo-conformance/
//! └── config.toml               # User settings
//!
//! ./manifest.yaml               # Repository manifest (default location)
//! ```

use std::path::PathBuf;

use crate::adapters::MANIFEST_FILE;

/// Application directory name under `~/.config`
const APP_DIR: &str = "repo-conformance";

/// Settings filename
const CONFIG_FILE: &str = "config.toml";

/// Get the settings directory.
///
/// Returns `~/.config/repo-conformance/`.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".config")
        .join(APP_DIR)
}

/// Get the settings file path.
///
/// Returns `~/.config/repo-conformance/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Manifest used when neither settings nor the command line name one
#[must_use]
pub fn default_manifest() -> PathBuf {
    PathBuf::from(MANIFEST_FILE)
}
