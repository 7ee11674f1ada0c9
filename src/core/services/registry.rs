//! Check registry and execution
//!
//! A [`CheckRegistry`] holds named check functions over one kind of
//! [`Target`], each with a default-enabled flag. Running it against a target
//! executes the selected checks in registration order and collects every
//! failure; a failing check never stops the ones after it.
//!
//! # Examples
//!
//! ```
//! use repo_conformance::core::models::{CheckConfig, Repo, RepoTarget};
//! use repo_conformance::core::services::CheckRegistry;
//!
//! let mut registry = CheckRegistry::<RepoTarget>::new();
//! registry.register("named", true, |t: &RepoTarget| {
//!     if t.repo.name.is_empty() { Err("repo has no name".into()) } else { Ok(()) }
//! }).unwrap();
//! registry.register("strict", false, |_: &RepoTarget| Err("always fails".into())).unwrap();
//!
//! let target = RepoTarget::new(Repo::new("demo"), CheckConfig::default());
//! let failures = registry.run_checks(&target, &CheckConfig::default()).unwrap();
//! assert!(failures.is_empty());
//! ```

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use super::selection::{is_enabled, unknown_names};
use crate::core::error::ConfigError;
use crate::core::models::{CheckConfig, CheckResult, Failure, Target};

/// A boxed check function
pub type CheckFn<T> = Box<dyn Fn(&T) -> CheckResult>;

struct Entry<T> {
    name: String,
    default_enabled: bool,
    check: CheckFn<T>,
}

/// Registry of checks over targets of type `T`
pub struct CheckRegistry<T> {
    entries: Vec<Entry<T>>,
    /// Names owned by registries nested beneath one of our checks
    delegated: BTreeSet<String>,
}

impl<T> CheckRegistry<T> {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            delegated: BTreeSet::new(),
        }
    }

    /// Register a check
    ///
    /// Fails if `name` is already registered here or in a nested registry.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        default_enabled: bool,
        check: F,
    ) -> Result<(), ConfigError>
    where
        F: Fn(&T) -> CheckResult + 'static,
    {
        let name = name.into();
        if self.knows(&name) {
            return Err(ConfigError::DuplicateCheck(name));
        }
        self.entries.push(Entry {
            name,
            default_enabled,
            check: Box::new(check),
        });
        Ok(())
    }

    /// Register a check that runs a nested registry
    ///
    /// `inner_names` are the names known to the nested registry. They become
    /// valid in exclude/include lists given to this registry, so one config
    /// can address both levels. Names must be unique across the levels.
    pub fn register_nested<F, I>(
        &mut self,
        name: impl Into<String>,
        default_enabled: bool,
        inner_names: I,
        check: F,
    ) -> Result<(), ConfigError>
    where
        F: Fn(&T) -> CheckResult + 'static,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let name = name.into();
        let inner: BTreeSet<String> = inner_names.into_iter().map(Into::into).collect();
        if let Some(clash) = inner.iter().find(|n| self.knows(n) || **n == name) {
            return Err(ConfigError::DuplicateCheck(clash.clone()));
        }
        self.register(name, default_enabled, check)?;
        self.delegated.extend(inner);
        Ok(())
    }

    /// Names of the checks registered here, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Every name a config given to this registry may reference
    #[must_use]
    pub fn known_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names().map(ToString::to_string).collect();
        names.extend(self.delegated.iter().cloned());
        names
    }

    /// Whether `name` is registered here
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Whether `name` is registered here or in a nested registry
    #[must_use]
    pub fn knows(&self, name: &str) -> bool {
        self.contains(name) || self.delegated.contains(name)
    }

    /// Default state of a registered check
    #[must_use]
    pub fn is_default_enabled(&self, name: &str) -> Option<bool> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.default_enabled)
    }

    /// Number of checks registered here
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no check is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Verify every name in `config` is known
    pub fn validate(&self, config: &CheckConfig) -> Result<(), ConfigError> {
        let unknown = unknown_names(config, |n| self.knows(n));
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::UnknownChecks(unknown))
        }
    }

    /// Checks that would run under `config`, in registration order
    #[must_use]
    pub fn enabled(&self, config: &CheckConfig) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| is_enabled(&e.name, e.default_enabled, config))
            .map(|e| e.name.as_str())
            .collect()
    }
}

impl<T: Target> CheckRegistry<T> {
    /// Run the checks selected by `config` against `target`
    ///
    /// Returns every failure, each nested under the name of the check that
    /// produced it. An unknown name in `config` fails the whole run before
    /// any check executes.
    pub fn run_checks(&self, target: &T, config: &CheckConfig) -> Result<Vec<Failure>, ConfigError> {
        self.validate(config)?;

        debug!(
            "Checking {} (exclude={:?}, include={:?})",
            target.describe(),
            config.exclude,
            config.include
        );

        let mut failures = Vec::new();
        for entry in &self.entries {
            if !is_enabled(&entry.name, entry.default_enabled, config) {
                debug!("Skipping {} on {}", entry.name, target.describe());
                continue;
            }

            debug!("Checking {} on {}", entry.name, target.describe());
            if let Err(err) = (entry.check)(target) {
                failures.extend(err.into_failures().iter().map(|f| f.of(&entry.name)));
            }
        }
        Ok(failures)
    }
}

impl<T> Default for CheckRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CheckRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checks: Vec<(&str, bool)> =
            self.entries.iter().map(|e| (e.name.as_str(), e.default_enabled)).collect();
        f.debug_struct("CheckRegistry")
            .field("checks", &checks)
            .field("delegated", &self.delegated)
            .finish()
    }
}
