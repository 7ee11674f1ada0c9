//! Tests for manifest parsing and the manifest model

use std::path::PathBuf;

use repo_conformance::adapters::{ManifestError, load_manifest, parse_manifest};
use repo_conformance::core::models::CheckConfig;

const MANIFEST: &str = "\
user: alice
checks:
  exclude: [cruft]
repos:
  - name: project-a
  - name: project-b
    user: bob
    worktree: /src/project-b
    checks:
      include: [flake8]
      exclude: [renovate]
  - name: project-a
    user: carol
ignored_repos:
  - name: old-fork
";

#[test]
fn test_user_defaults_to_manifest_user() {
    let manifest = parse_manifest("user: alice\nrepos:\n  - name: x\n").unwrap();
    assert_eq!(manifest.repos[0].user.as_deref(), Some("alice"));
    assert_eq!(manifest.repos[0].to_string(), "alice/x");
}

#[test]
fn test_full_document() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    assert_eq!(manifest.default_user, "alice");
    assert_eq!(manifest.repos.len(), 3);

    let b = manifest.find_repo("project-b").unwrap();
    assert_eq!(b.owner(), "bob");
    assert_eq!(b.full_name(), "bob/project-b");
    assert_eq!(b.worktree_override, Some(PathBuf::from("/src/project-b")));

    assert!(manifest.is_ignored("old-fork"));
    assert!(!manifest.is_ignored("project-a"));
    assert!(manifest.is_managed("project-b"));
    assert!(!manifest.is_managed("old-fork"));
}

#[test]
fn test_first_match_wins() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    assert_eq!(manifest.find_repo("project-a").unwrap().owner(), "alice");
}

#[test]
fn test_effective_config_merges_global_and_repo() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    let b = manifest.find_repo("project-b").unwrap();
    assert_eq!(
        manifest.effective_config(b),
        CheckConfig::new(["cruft", "renovate"], ["flake8"])
    );
}

#[test]
fn test_wrong_type_is_parse_error() {
    let err = parse_manifest("user: alice\nrepos: project-a\n").unwrap_err();
    assert!(matches!(err, ManifestError::Parse(_)));
}

#[test]
fn test_unknown_repo_field_is_parse_error() {
    let err = parse_manifest("user: alice\nrepos:\n  - name: x\n    owner: bob\n").unwrap_err();
    assert!(matches!(err, ManifestError::Parse(_)));
}

#[test]
fn test_empty_user_is_invalid() {
    let err = parse_manifest("user: ''\n").unwrap_err();
    assert!(matches!(err, ManifestError::Invalid(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_manifest(&dir.path().join("manifest.yaml")).unwrap_err();
    assert!(matches!(err, ManifestError::Read { .. }));
}

#[test]
fn test_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manifest.yaml");
    std::fs::write(&path, MANIFEST).unwrap();
    let manifest = load_manifest(&path).unwrap();
    assert_eq!(manifest.ignored_repos.len(), 1);
}
