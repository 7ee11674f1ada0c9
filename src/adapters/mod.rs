//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `yaml/` - `manifest.yaml` loading
//! - `git/` - Working trees via git2 (`WorktreeProvider`)
//! - `github/` - GitHub REST API via reqwest (`GithubApi`)

pub mod git;
pub mod github;
pub mod yaml;

pub use git::{CLONE_URL_FORMAT, GitWorktreeProvider};
pub use github::{API_URL, RestGithub};
pub use yaml::{MANIFEST_FILE, ManifestError, load_manifest, parse_manifest};
