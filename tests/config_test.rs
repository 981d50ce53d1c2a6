// tests/config_test.rs
use docs_publish::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.tools.mkdocs, "mkdocs");
    assert_eq!(config.tools.mike, "mike");
    assert_eq!(config.deploy.alias, "latest");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[tools]
mkdocs = "/opt/docs/bin/mkdocs"

[deploy]
push = false
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.tools.mkdocs, "/opt/docs/bin/mkdocs");
    // Unspecified keys keep their defaults
    assert_eq!(config.tools.mike, "mike");
    assert_eq!(config.deploy.push, false);
    assert_eq!(config.deploy.update_aliases, true);
    assert_eq!(config.deploy.alias, "latest");
}

#[test]
fn test_load_empty_file_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[tools\nmkdocs = ").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
fn test_default_values() {
    let config = Config::default();
    // Defaults reproduce the standard deploy invocation
    assert_eq!(config.deploy.push, true);
    assert_eq!(config.deploy.update_aliases, true);
}

#[test]
fn test_tools_config_from_fixture_file() {
    let config =
        load_config(Some("tests/fixtures/config_with_tools.toml")).expect("Failed to load test config");
    assert_eq!(config.tools.mkdocs, "mkdocs-custom");
    assert_eq!(config.tools.mike, "/usr/local/bin/mike");
    assert_eq!(config.deploy.alias, "stable");
}
