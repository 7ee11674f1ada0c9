//! Tests for user settings

use std::fs;

use repo_conformance::config::{Settings, SettingsError, TOKEN_ENV};
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_missing_file_is_default() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"manifest = "/srv/manifest.yaml"

[github]
api_url = "https://github.example.com/api/v3"
token_env = "GHE_TOKEN"

[git]
clone_url_format = "git@github.example.com:{user}/{repo}.git"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.manifest_path(None).to_string_lossy(), "/srv/manifest.yaml");
    assert_eq!(settings.github.api_url, "https://github.example.com/api/v3");
    assert_eq!(settings.github.token_env, "GHE_TOKEN");
    assert_eq!(settings.git.clone_url_format, "git@github.example.com:{user}/{repo}.git");
}

#[test]
fn test_invalid_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[github\n").unwrap();
    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Parse(_))));
}

#[test]
#[serial]
fn test_token_from_configured_env() {
    let settings = Settings::parse("[github]\ntoken_env = \"REPO_CONFORMANCE_TEST_TOKEN\"\n").unwrap();

    // SAFETY: serialized with the other env tests
    unsafe { std::env::remove_var("REPO_CONFORMANCE_TEST_TOKEN") };
    assert_eq!(settings.github_token(), None);

    unsafe { std::env::set_var("REPO_CONFORMANCE_TEST_TOKEN", "secret") };
    assert_eq!(settings.github_token().as_deref(), Some("secret"));

    unsafe { std::env::set_var("REPO_CONFORMANCE_TEST_TOKEN", "") };
    assert_eq!(settings.github_token(), None);

    unsafe { std::env::remove_var("REPO_CONFORMANCE_TEST_TOKEN") };
}

#[test]
fn test_default_token_env() {
    assert_eq!(Settings::default().github.token_env, TOKEN_ENV);
}
