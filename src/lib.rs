//! repo-conformance - check a manifest of GitHub repositories against shared
//! project policies
//!
//! This library provides the check registry and execution engine, the
//! concrete repo-level and worktree-level checks, and the git and GitHub
//! adapters they rely on.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod checks;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
