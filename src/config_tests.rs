//! Tests for config

use super::*;
use std::io::Write;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.session.username, "anonymous");
    assert_eq!(config.session.account_id, None);
    assert_eq!(config.session.project_id, None);
    assert!(config.session.write_permissions.is_empty());
    assert!(!config.panel.start_in_advanced);
    assert!(config.saved_filters.is_empty());
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(&dir.path().join("absent.toml"));
    assert!(result.warning.is_none());
    assert_eq!(result.config.session.username, "anonymous");
}

#[test]
fn test_valid_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[session]
username = "jdoe"
account_id = 42
project_id = 7
write_permissions = ["crm-lead"]

[panel]
start_in_advanced = true
"#,
    );

    let result = load_config_from_path(&path);
    assert!(result.warning.is_none());
    assert_eq!(result.config.session.username, "jdoe");
    assert_eq!(result.config.session.account_id, Some(42));
    assert_eq!(result.config.session.project_id, Some(7));
    assert!(result.config.panel.start_in_advanced);
}

#[test]
fn test_malformed_toml_returns_defaults_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[session\nusername = \"jdoe\"");

    let result = load_config_from_path(&path);
    assert_eq!(result.config.session.username, "anonymous");
    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Invalid config"), "got: {}", warning);
}

#[test]
fn test_bare_date_value_keeps_rest_of_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[session]
username = "jdoe"
account_id = 42

[[saved_filters]]
name = "Overdue"
entity = "task"
fields = [{ key = "task-duedate", op = "before", value = 2024-06-30 }]
"#,
    );

    let result = load_config_from_path(&path);
    assert!(result.warning.is_none(), "got: {:?}", result.warning);
    assert_eq!(result.config.session.username, "jdoe");
    assert_eq!(result.config.session.account_id, Some(42));
    assert_eq!(result.config.saved_filters.len(), 1);
}

#[test]
fn test_malformed_toml_missing_quotes() {
    let toml = "[session]\nusername = jdoe";
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err(), "Malformed TOML should fail to parse");
}

#[test]
fn test_config_path_consistency() {
    let path1 = get_config_path();
    let path2 = get_config_path();

    assert_eq!(path1, path2, "Config path should be consistent");

    let path_str = path1.to_string_lossy();
    assert!(
        path_str.ends_with("crmfind/config.toml") || path_str.ends_with("crmfind\\config.toml"),
        "Config path should end with crmfind/config.toml, got: {}",
        path_str
    );
}
