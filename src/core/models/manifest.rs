//! Manifest model
//!
//! The manifest declares which repositories are checked and how the check
//! set is adjusted, globally and per repository.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// Exclude/include overrides applied on top of each check's default state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Checks that never run, whatever their default or `include`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exclude: BTreeSet<String>,

    /// Checks disabled by default that should run
    #[serde(default, deserialize_with = "null_as_empty")]
    pub include: BTreeSet<String>,
}

impl CheckConfig {
    /// Build a config from exclude and include name lists
    pub fn new<E, I>(exclude: E, include: I) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            exclude: exclude.into_iter().map(Into::into).collect(),
            include: include.into_iter().map(Into::into).collect(),
        }
    }

    /// Union of this config and `other`
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            exclude: self.exclude.union(&other.exclude).cloned().collect(),
            include: self.include.union(&other.include).cloned().collect(),
        }
    }

    /// Whether `name` is excluded
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }

    /// Whether `name` is explicitly included
    #[must_use]
    pub fn is_included(&self, name: &str) -> bool {
        self.include.contains(name)
    }

    /// Every name referenced by either list
    pub fn referenced(&self) -> impl Iterator<Item = &str> {
        self.exclude.union(&self.include).map(String::as_str)
    }

    /// Keep only the names accepted by `known`
    #[must_use]
    pub fn restricted_to(&self, known: impl Fn(&str) -> bool) -> Self {
        Self {
            exclude: self.exclude.iter().filter(|n| known(n)).cloned().collect(),
            include: self.include.iter().filter(|n| known(n)).cloned().collect(),
        }
    }

    /// True when neither list names anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.include.is_empty()
    }
}

/// A git repository to check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Repo {
    /// Name of the repository
    pub name: String,

    /// Owner of the repository; the manifest's `user` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Local working tree to check instead of a fresh clone
    ///
    /// The directory is only read, never modified.
    #[serde(default, rename = "worktree", skip_serializing_if = "Option::is_none")]
    pub worktree_override: Option<PathBuf>,

    /// Per-repository check overrides
    #[serde(default, rename = "checks", deserialize_with = "null_as_empty")]
    pub check_config: CheckConfig,
}

impl Repo {
    /// Create a repo with no owner, override or check config
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user: None,
            worktree_override: None,
            check_config: CheckConfig::default(),
        }
    }

    /// Set the owner
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set a local working tree override
    #[must_use]
    pub fn with_worktree(mut self, path: impl Into<PathBuf>) -> Self {
        self.worktree_override = Some(path.into());
        self
    }

    /// Set the per-repository check config
    #[must_use]
    pub fn with_checks(mut self, check_config: CheckConfig) -> Self {
        self.check_config = check_config;
        self
    }

    /// The owner, or an empty string when it was never resolved
    #[must_use]
    pub fn owner(&self) -> &str {
        self.user.as_deref().unwrap_or_default()
    }

    /// `owner/name` as used by the GitHub API
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner(), self.name)
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user {
            Some(user) => write!(f, "{user}/{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A repository deliberately left out of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IgnoredRepo {
    /// Name of the repository
    pub name: String,
}

/// The repository manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Default owner of the repositories
    #[serde(rename = "user")]
    pub default_user: String,

    /// Repositories to check, in check order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repos: Vec<Repo>,

    /// Check overrides applied to every repository
    #[serde(default, rename = "checks", deserialize_with = "null_as_empty")]
    pub global_check_config: CheckConfig,

    /// Repositories that are known but intentionally unmanaged
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ignored_repos: Vec<IgnoredRepo>,
}

impl Manifest {
    /// Create an empty manifest owned by `default_user`
    #[must_use]
    pub fn new(default_user: impl Into<String>) -> Self {
        Self {
            default_user: default_user.into(),
            repos: Vec::new(),
            global_check_config: CheckConfig::default(),
            ignored_repos: Vec::new(),
        }
    }

    /// Give every repo without an owner the manifest's default user
    pub fn apply_defaults(&mut self) {
        for repo in &mut self.repos {
            if repo.user.is_none() {
                repo.user = Some(self.default_user.clone());
            }
        }
    }

    /// First repo named `name`
    #[must_use]
    pub fn find_repo(&self, name: &str) -> Option<&Repo> {
        self.repos.iter().find(|r| r.name == name)
    }

    /// Whether `name` is listed under `ignored_repos`
    #[must_use]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_repos.iter().any(|r| r.name == name)
    }

    /// Whether `name` is listed under `repos`
    #[must_use]
    pub fn is_managed(&self, name: &str) -> bool {
        self.find_repo(name).is_some()
    }

    /// Global config merged with the repo's own config
    #[must_use]
    pub fn effective_config(&self, repo: &Repo) -> CheckConfig {
        self.global_check_config.merge(&repo.check_config)
    }
}

/// Treat an explicit YAML `null` like a missing key
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
