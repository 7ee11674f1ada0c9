//! Core services: check registries and their execution

pub mod listing;
pub mod registry;
pub mod runner;
pub mod selection;

pub use listing::{RemoteRepo, remote_repos};
pub use registry::{CheckFn, CheckRegistry};
pub use runner::{RepoFailure, RunSummary, run_repos, select_repos, split_names};
pub use selection::{is_enabled, unknown_names};
