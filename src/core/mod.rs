//! Core domain logic for repo-conformance
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Manifest, Repo, CheckConfig, Failure, targets)
//! - `services/` - Check registry, selection and execution
//! - `ports/` - Trait definitions for git and GitHub access
//! - `error` - Configuration errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::ConfigError;
