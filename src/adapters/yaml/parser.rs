//! YAML parser for the repository manifest
//!
//! Deserializes the manifest document, validates what serde cannot express,
//! and backfills each repo's owner from the manifest's default `user`.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::core::models::Manifest;

/// Conventional manifest filename
pub const MANIFEST_FILE: &str = "manifest.yaml";

/// Errors loading the manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The file could not be read
    #[error("Unable to read manifest {path}: {source}")]
    Read {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the schema
    #[error("Unable to parse manifest: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed but holds invalid values
    #[error("Invalid manifest: {0}")]
    Invalid(String),
}

/// Parse a manifest document held in memory
///
/// # Errors
///
/// Returns an error if the document is malformed, misses a required field,
/// has a field of the wrong type or an unknown field, or contains an empty
/// user or repo name.
pub fn parse_manifest(content: &str) -> Result<Manifest, ManifestError> {
    let mut manifest: Manifest = serde_yaml::from_str(content)?;

    if manifest.default_user.trim().is_empty() {
        return Err(ManifestError::Invalid("'user' must not be empty".to_string()));
    }
    if let Some(index) = manifest.repos.iter().position(|r| r.name.trim().is_empty()) {
        return Err(ManifestError::Invalid(format!("repos[{index}] has an empty name")));
    }
    if let Some(index) = manifest.ignored_repos.iter().position(|r| r.name.trim().is_empty()) {
        return Err(ManifestError::Invalid(format!("ignored_repos[{index}] has an empty name")));
    }

    manifest.apply_defaults();
    debug!(
        "Loaded manifest for {} ({} repos, {} ignored)",
        manifest.default_user,
        manifest.repos.len(),
        manifest.ignored_repos.len()
    );
    Ok(manifest)
}

/// Read and parse the manifest at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_manifest`].
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&content)
}
