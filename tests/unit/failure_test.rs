//! Tests for the failure model

use repo_conformance::core::models::{CheckError, Failure};

#[test]
fn test_leaf_failure_has_empty_path() {
    let failure = Failure::new("Repo has no setup.py");
    assert!(failure.names.is_empty());
    assert_eq!(failure.name(), "");
    assert_eq!(failure.to_string(), "Repo has no setup.py");
}

#[test]
fn test_nesting_prepends_outermost_last() {
    let leaf = Failure::new("detail").of("x");
    let nested = leaf.of("a").of("b");
    assert_eq!(nested.names, vec!["b", "a", "x"]);
    assert_eq!(nested.name(), "[b][a][x]");
    assert_eq!(leaf.names, vec!["x"]);
}

#[test]
fn test_check_error_conversions() {
    assert_eq!(CheckError::from("plain").failures(), &[Failure::new("plain")]);
    assert_eq!(
        CheckError::from(format!("formatted {}", 1)).failures(),
        &[Failure::new("formatted 1")]
    );

    let many = vec![Failure::new("a"), Failure::new("b")];
    let err = CheckError::from(many.clone());
    assert_eq!(err.to_string(), "a; b");
    assert_eq!(err.into_failures(), many);
}

#[test]
fn test_failure_serializes_names() {
    let failure = Failure::new("bad").of("ruff").of("worktree");
    let json = serde_json::to_value(&failure).unwrap();
    assert_eq!(json["detail"], "bad");
    assert_eq!(json["names"], serde_json::json!(["worktree", "ruff"]));
}
