//! Integration tests for the `check` command

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::{MANIFEST, Workspace, write_conforming_tree};

#[test]
fn test_conforming_worktree_passes() {
    let ws = Workspace::new(MANIFEST);
    let tree = TempDir::new().unwrap();
    write_conforming_tree(tree.path());

    ws.cmd()
        .args(["check", "sample-project", "--exclude", "github", "--worktree"])
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED 1 repo(s) checked"));
}

#[test]
fn test_violation_exits_one() {
    let ws = Workspace::new(MANIFEST);
    let tree = TempDir::new().unwrap();
    write_conforming_tree(tree.path());
    fs::remove_file(tree.path().join("setup.py")).unwrap();

    ws.cmd()
        .args(["check", "sample-project", "--exclude", "github", "--worktree"])
        .arg(tree.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "  alice/sample-project [worktree][setuppy]\nRepo has no setup.py\n",
        ))
        .stdout(predicate::str::contains("FAILED 1 failure(s) in 1 of 1 repo(s)"));
}

#[test]
fn test_exclude_inner_check() {
    let ws = Workspace::new(MANIFEST);
    let tree = TempDir::new().unwrap();
    write_conforming_tree(tree.path());
    fs::remove_file(tree.path().join("setup.py")).unwrap();

    ws.cmd()
        .args(["check", "sample-project", "--exclude", "github,setuppy", "--worktree"])
        .arg(tree.path())
        .assert()
        .success();
}

#[test]
fn test_include_disabled_check() {
    let ws = Workspace::new(MANIFEST);
    let tree = TempDir::new().unwrap();
    write_conforming_tree(tree.path());

    ws.cmd()
        .args(["check", "sample-project", "--exclude", "github", "--include", "flake8", "--worktree"])
        .arg(tree.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[worktree][flake8]"));
}

#[test]
fn test_manifest_worktree_and_checks() {
    let tree = TempDir::new().unwrap();
    write_conforming_tree(tree.path());
    fs::remove_file(tree.path().join("setup.py")).unwrap();
    let manifest = format!(
        "user: alice\nchecks:\n  exclude: [github]\nrepos:\n  - name: sample-project\n    worktree: {}\n    checks:\n      exclude: [setuppy]\n",
        tree.path().display()
    );

    let ws = Workspace::new(&manifest);
    ws.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED 1 repo(s) checked"));
}

#[test]
fn test_json_report() {
    let ws = Workspace::new(MANIFEST);
    let tree = TempDir::new().unwrap();
    write_conforming_tree(tree.path());
    fs::remove_file(tree.path().join("setup.py")).unwrap();

    let output = ws
        .cmd()
        .args(["--json", "check", "sample-project", "--exclude", "github", "--worktree"])
        .arg(tree.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["repos_checked"], 1);
    assert_eq!(json["failures"][0]["path"], "[worktree][setuppy]");
    assert_eq!(json["failures"][0]["detail"], "Repo has no setup.py");
}

#[test]
fn test_unknown_check_is_usage_error() {
    let ws = Workspace::new(MANIFEST);
    ws.cmd()
        .args(["check", "--exclude", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown check(s): nope"));
}

#[test]
fn test_unknown_repo_is_usage_error() {
    let ws = Workspace::new(MANIFEST);
    ws.cmd()
        .args(["check", "missing-project"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing-project"));
}

#[test]
fn test_worktree_requires_repo() {
    let ws = Workspace::new(MANIFEST);
    ws.cmd().args(["check", "--worktree", "/tmp"]).assert().code(2);
}

#[test]
fn test_missing_worktree_is_failure() {
    let ws = Workspace::new(MANIFEST);
    ws.cmd()
        .args([
            "check",
            "sample-project",
            "--exclude",
            "github",
            "--worktree",
            "/nonexistent/repo-conformance/tree",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[worktree]"))
        .stdout(predicate::str::contains("Unable to open working tree"));
}
