//! Command implementations

mod check;
mod checks;
mod list;
mod list_repos;

use std::path::Path;

use anyhow::Context;
use repo_conformance::adapters::load_manifest;
use repo_conformance::config::Settings;
use repo_conformance::core::models::Manifest;

pub use check::{CheckArgs, check};
pub use checks::checks;
pub use list::list;
pub use list_repos::list_repos;

/// Load settings, then the manifest they (or the command line) point at
fn load(manifest: Option<&Path>) -> anyhow::Result<(Settings, Manifest)> {
    let settings = Settings::load();
    let path = settings.manifest_path(manifest);
    let manifest = load_manifest(&path).with_context(|| format!("loading {}", path.display()))?;
    Ok((settings, manifest))
}
