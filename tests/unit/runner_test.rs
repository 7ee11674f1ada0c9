//! Tests for manifest-wide runs

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use repo_conformance::adapters::parse_manifest;
use repo_conformance::core::ConfigError;
use repo_conformance::core::models::{CheckConfig, RepoTarget};
use repo_conformance::core::services::{CheckRegistry, run_repos, select_repos};

const MANIFEST: &str = "\
user: alice
checks:
  exclude: [slow]
repos:
  - name: one
  - name: two
    checks:
      include: [slow]
      exclude: [fast]
  - name: three
    user: bob
ignored_repos:
  - name: three
";

/// Registry recording which check ran on which repo
fn recording(seen: &Rc<RefCell<Vec<String>>>) -> CheckRegistry<RepoTarget> {
    let mut registry = CheckRegistry::new();
    for (name, default) in [("fast", true), ("slow", true), ("optional", false)] {
        let seen = Rc::clone(seen);
        registry
            .register(name, default, move |t: &RepoTarget| {
                seen.borrow_mut().push(format!("{name}:{}", t.repo.name));
                if t.repo.name == "one" { Err(format!("{name} failed").into()) } else { Ok(()) }
            })
            .unwrap();
    }
    registry
}

#[test]
fn test_select_all_skips_ignored() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    let repos = select_repos(&manifest, None, None).unwrap();
    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["one", "two"]);
}

#[test]
fn test_select_by_name_with_worktree() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    let repos = select_repos(&manifest, Some("two"), Some(Path::new("/tmp/two"))).unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].worktree_override.as_deref(), Some(Path::new("/tmp/two")));
}

#[test]
fn test_select_unknown_repo() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    let err = select_repos(&manifest, Some("four"), None).unwrap_err();
    assert_eq!(err, ConfigError::UnknownRepo("four".to_string()));
}

#[test]
fn test_run_merges_global_repo_and_cli_config() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let registry = recording(&seen);
    let manifest = parse_manifest(MANIFEST).unwrap();
    let repos = select_repos(&manifest, None, None).unwrap();

    let overrides = CheckConfig::new(Vec::<String>::new(), ["optional"]);
    let summary = run_repos(&registry, &manifest, repos, &overrides).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec!["fast:one", "optional:one", "optional:two"]
    );
    assert_eq!(summary.repos_checked, 2);
    assert!(!summary.passed());
    let failing: Vec<String> = summary
        .failures
        .iter()
        .map(|f| format!("{} {}", f.repo, f.failure))
        .collect();
    assert_eq!(failing, vec!["alice/one [fast] fast failed", "alice/one [optional] optional failed"]);
}

#[test]
fn test_invalid_config_aborts_before_any_repo_runs() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let registry = recording(&seen);
    let manifest = parse_manifest(
        "user: alice\nrepos:\n  - name: one\n  - name: two\n    checks:\n      exclude: [typo]\n",
    )
    .unwrap();
    let repos = select_repos(&manifest, None, None).unwrap();

    let err = run_repos(&registry, &manifest, repos, &CheckConfig::default()).unwrap_err();
    assert_eq!(err, ConfigError::UnknownChecks(vec!["typo".to_string()]));
    assert!(seen.borrow().is_empty());
}
