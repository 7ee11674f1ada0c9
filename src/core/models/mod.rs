//! Domain models for repo-conformance
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Manifest`] - The repositories to check and their check overrides
//! - [`CheckConfig`] - Exclude/include lists
//! - [`Failure`] - A nestable record of one violation
//! - [`CheckError`] - What a failing check returns
//! - [`RepoTarget`], [`WorktreeTarget`] - What checks run against

mod failure;
mod manifest;
mod target;

pub use failure::{CheckError, CheckResult, Failure};
pub use manifest::{CheckConfig, IgnoredRepo, Manifest, Repo};
pub use target::{RepoTarget, Target, WorktreeTarget};
