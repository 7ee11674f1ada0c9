//! Tests for the check registry and execution engine

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use repo_conformance::core::ConfigError;
use repo_conformance::core::models::{CheckConfig, CheckError, Failure, Repo, RepoTarget};
use repo_conformance::core::services::CheckRegistry;

fn target() -> RepoTarget {
    RepoTarget::new(Repo::new("demo").with_user("alice"), CheckConfig::default())
}

fn none() -> Vec<String> {
    Vec::new()
}

// =============================================================================
// REGISTRATION
// =============================================================================

#[test]
fn test_register_same_name_twice_fails() {
    let mut registry = CheckRegistry::<RepoTarget>::new();
    registry.register("setuppy", true, |_| Ok(())).unwrap();

    let err = registry.register("setuppy", true, |_| Ok(())).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateCheck("setuppy".to_string()));
    assert_eq!(err.to_string(), "check 'setuppy' is already registered");
}

#[test]
fn test_distinct_names_both_run_in_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut registry = CheckRegistry::<RepoTarget>::new();
    for name in ["first", "second"] {
        let order = Rc::clone(&order);
        registry
            .register(name, true, move |_| {
                order.borrow_mut().push(name);
                Ok(())
            })
            .unwrap();
    }

    let failures = registry.run_checks(&target(), &CheckConfig::default()).unwrap();
    assert!(failures.is_empty());
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn test_names_and_defaults() {
    let mut registry = CheckRegistry::<RepoTarget>::new();
    registry.register("a", true, |_| Ok(())).unwrap();
    registry.register("b", false, |_| Ok(())).unwrap();

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(registry.is_default_enabled("a"), Some(true));
    assert_eq!(registry.is_default_enabled("b"), Some(false));
    assert_eq!(registry.is_default_enabled("c"), None);
    assert!(!registry.is_empty());
}

// =============================================================================
// SELECTION
// =============================================================================

#[test]
fn test_exclude_everything_returns_empty() {
    let mut registry = CheckRegistry::<RepoTarget>::new();
    registry.register("a", true, |_| Err("a failed".into())).unwrap();
    registry.register("b", false, |_| Err("b failed".into())).unwrap();

    let config = CheckConfig::new(["a", "b"], ["b"]);
    let failures = registry.run_checks(&target(), &config).unwrap();
    assert!(failures.is_empty());
}

#[test]
fn test_disabled_check_never_executes() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut registry = CheckRegistry::<RepoTarget>::new();
    registry
        .register("optional", false, move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        })
        .unwrap();

    registry.run_checks(&target(), &CheckConfig::default()).unwrap();
    assert_eq!(calls.get(), 0);

    registry.run_checks(&target(), &CheckConfig::new(none(), ["optional"])).unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_include_runs_opt_in_check() {
    let mut registry = CheckRegistry::<RepoTarget>::new();
    registry.register("a", true, |_| Ok(())).unwrap();
    registry.register("b", false, |_| Err("bad".into())).unwrap();

    let config = CheckConfig::new(none(), ["b"]);
    let failures = registry.run_checks(&target(), &config).unwrap();
    assert_eq!(
        failures,
        vec![Failure {
            detail: "bad".to_string(),
            names: vec!["b".to_string()],
        }]
    );
}

#[test]
fn test_unknown_include_fails_before_any_check() {
    let calls = Rc::new(Cell::new(0));
    let mut registry = CheckRegistry::<RepoTarget>::new();
    for name in ["a", "b"] {
        let counter = Rc::clone(&calls);
        registry
            .register(name, name == "a", move |_| {
                counter.set(counter.get() + 1);
                Ok(())
            })
            .unwrap();
    }

    let err = registry.run_checks(&target(), &CheckConfig::new(none(), ["c"])).unwrap_err();
    assert_eq!(err, ConfigError::UnknownChecks(vec!["c".to_string()]));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_unknown_exclude_is_also_fatal() {
    let mut registry = CheckRegistry::<RepoTarget>::new();
    registry.register("a", true, |_| Ok(())).unwrap();

    let config = CheckConfig::new(["rufff", "a", "flake9"], none());
    let err = registry.validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "unknown check(s): flake9, rufff");
}

// =============================================================================
// FAULT ISOLATION
// =============================================================================

#[test]
fn test_one_failure_does_not_stop_others() {
    let calls = Rc::new(Cell::new(0));
    let mut registry = CheckRegistry::<RepoTarget>::new();
    for name in ["one", "two", "three", "four"] {
        let counter = Rc::clone(&calls);
        registry
            .register(name, true, move |_| {
                counter.set(counter.get() + 1);
                if name == "two" { Err("two is broken".into()) } else { Ok(()) }
            })
            .unwrap();
    }

    let failures = registry.run_checks(&target(), &CheckConfig::default()).unwrap();
    assert_eq!(calls.get(), 4);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].names, vec!["two"]);
}

#[test]
fn test_check_reporting_many_failures() {
    let mut registry = CheckRegistry::<RepoTarget>::new();
    registry
        .register("multi", true, |_| {
            Err(CheckError::from(vec![Failure::new("first"), Failure::new("second").of("inner")]))
        })
        .unwrap();

    let failures = registry.run_checks(&target(), &CheckConfig::default()).unwrap();
    let rendered: Vec<String> = failures.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["[multi] first", "[multi][inner] second"]);
}
