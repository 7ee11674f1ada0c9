//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::collections::BTreeSet;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Failure, Repo};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One failure, attributed to the repo it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// `user/name` of the repo
    pub repo: String,
    /// Check names from outermost to innermost
    pub names: Vec<String>,
    /// Bracketed name path, e.g. `[worktree][ruff]`
    pub path: String,
    /// Failure message
    pub detail: String,
}

impl FailureReport {
    /// Attribute `failure` to `repo`
    #[must_use]
    pub fn new(repo: &Repo, failure: &Failure) -> Self {
        Self {
            repo: repo.to_string(),
            names: failure.names.clone(),
            path: failure.name(),
            detail: failure.detail.clone(),
        }
    }
}

/// Result of a check run
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether every repo conforms
    pub passed: bool,
    /// Number of repos checked
    pub repos_checked: usize,
    /// When the run finished (RFC3339)
    pub checked_at: String,
    /// Every failure, in repo then check order
    pub failures: Vec<FailureReport>,
}

impl CheckReport {
    /// Build a report for a run over `repos_checked` repos
    #[must_use]
    pub fn new(repos_checked: usize, failures: Vec<FailureReport>) -> Self {
        Self {
            passed: failures.is_empty(),
            repos_checked,
            checked_at: chrono::Utc::now().to_rfc3339(),
            failures,
        }
    }

    /// Number of distinct repos with at least one failure
    #[must_use]
    pub fn failing_repos(&self) -> usize {
        self.failures.iter().map(|f| f.repo.as_str()).collect::<BTreeSet<_>>().len()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable text: each failure as its name path then its detail
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out: String = self
            .failures
            .iter()
            .map(|f| format!("  {} {}\n{}\n\n", f.repo, f.path, f.detail))
            .collect();

        let summary = if self.passed {
            format!("{} {} repo(s) checked\n", "PASSED".green().bold(), self.repos_checked)
        } else {
            format!(
                "{} {} failure(s) in {} of {} repo(s)\n",
                "FAILED".red().bold(),
                self.failures.len(),
                self.failing_repos(),
                self.repos_checked
            )
        };
        out.push_str(&summary);
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// A repository line in `list` or `list-repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoEntry {
    /// Repository name
    pub name: String,
    /// Owner
    pub user: String,
    /// Whether the manifest manages the repo; only set by `list-repos`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,
}

/// Result of a listing command
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RepoList {
    /// Entries in display order
    pub repos: Vec<RepoEntry>,
}

impl RepoList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable text, one repo per line
    #[must_use]
    pub fn to_human(&self) -> String {
        self.repos
            .iter()
            .map(|repo| {
                let prefix = match repo.managed {
                    Some(true) => "* ",
                    Some(false) => "  ",
                    None => "",
                };
                format!("{prefix}name: {} user: {}\n", repo.name, repo.user)
            })
            .collect()
    }
}

/// A check known to the registries, for the `checks` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInfo {
    /// Check name
    pub name: String,
    /// `repo` or `worktree`
    pub level: String,
    /// Whether it runs without an explicit include
    pub default_enabled: bool,
}

/// Result of the `checks` command
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CheckList {
    /// Checks in execution order
    pub checks: Vec<CheckInfo>,
}

impl CheckList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable text, one check per line
    #[must_use]
    pub fn to_human(&self) -> String {
        self.checks
            .iter()
            .map(|check| {
                let state = if check.default_enabled { "on" } else { "off" };
                format!("{:<9} {:<16} {state}\n", check.level, check.name)
            })
            .collect()
    }
}
