//! User settings
//!
//! Settings are stored at `~/.config/repo-conformance/config.toml`. Every key
//! is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::{API_URL, CLONE_URL_FORMAT};
use crate::paths;

/// Environment variable holding the GitHub token by default
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Errors loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file exists but could not be read
    #[error("Unable to read settings {path}: {source}")]
    Read {
        /// Settings path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid TOML or has the wrong shape
    #[error("Unable to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// User settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Manifest path; `manifest.yaml` in the working directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// GitHub API settings
    #[serde(default)]
    pub github: GithubSettings,

    /// Git clone settings
    #[serde(default)]
    pub git: GitSettings,
}

/// GitHub API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GithubSettings {
    /// Base URL of the REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Environment variable to read the API token from
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_api_url() -> String {
    API_URL.to_string()
}

fn default_token_env() -> String {
    TOKEN_ENV.to_string()
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token_env: default_token_env(),
        }
    }
}

/// Git clone settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitSettings {
    /// Clone URL template with `{user}` and `{repo}` placeholders
    #[serde(default = "default_clone_url_format")]
    pub clone_url_format: String,
}

fn default_clone_url_format() -> String {
    CLONE_URL_FORMAT.to_string()
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            clone_url_format: default_clone_url_format(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load settings from disk
    ///
    /// A missing, unreadable or invalid file yields defaults; the latter two
    /// are logged as warnings.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("{e}; using default settings");
            Self::default()
        })
    }

    /// Load settings from `path`, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            debug!("No settings at {}", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Manifest to load: the command line wins over settings
    #[must_use]
    pub fn manifest_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.manifest.clone())
            .unwrap_or_else(paths::default_manifest)
    }

    /// GitHub token from the configured environment variable
    #[must_use]
    pub fn github_token(&self) -> Option<String> {
        std::env::var(&self.github.token_env).ok().filter(|t| !t.is_empty())
    }
}
