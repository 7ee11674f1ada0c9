//! GitHub port
//!
//! The subset of the GitHub API the repo-level checks and the `list-repos`
//! command need.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors talking to GitHub
#[derive(Debug, Error)]
pub enum GithubError {
    /// The requested repository or resource does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// GitHub answered with an unexpected status
    #[error("GitHub returned {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The request never completed
    #[error("request failed: {0}")]
    Http(String),

    /// The response body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Repository settings relevant to conformance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSettings {
    /// Repository name
    pub name: String,
    /// Login of the owner
    pub owner: String,
    /// Whether the wiki is enabled
    pub has_wiki: bool,
    /// Whether classic projects are enabled
    pub has_projects: bool,
    /// Whether the repository is a fork
    pub fork: bool,
    /// Whether the repository is archived
    pub archived: bool,
    /// Whether the repository is private
    pub private: bool,
}

/// Read access to GitHub
pub trait GithubApi: Send + Sync {
    /// Settings of `owner/name`
    fn repository(&self, owner: &str, name: &str) -> Result<RepoSettings, GithubError>;

    /// SHA of the newest commit on the default branch of `full_name`
    fn latest_commit(&self, full_name: &str) -> Result<String, GithubError>;

    /// Every repository owned by `user`
    fn user_repositories(&self, user: &str) -> Result<Vec<RepoSettings>, GithubError>;
}
