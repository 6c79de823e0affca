//! Tests for the config module

use super::loader::with_overrides_from;
use super::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.storage.data_dir, None);
    assert_eq!(config.storage.camps_path(), Path::new("./camps.json"));
    assert_eq!(config.storage.victims_path(), Path::new("./victims.json"));
    assert_eq!(config.log.level, "warn");
    assert_eq!(config.output.format, OutputFormat::Table);
}

#[test]
fn test_config_parse_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(
        &path,
        r#"
[storage]
data_dir = "/srv/relief"
camps_file = "sites.json"

[log]
level = "debug"

[output]
format = "json"
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.storage.camps_path(), PathBuf::from("/srv/relief/sites.json"));
    assert_eq!(
        config.storage.victims_path(),
        PathBuf::from("/srv/relief/victims.json")
    );
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[storage]\ndata_dri = \"/tmp\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.storage.data_dir, None);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "data_dri");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("data_dir"));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_load_or_default_prefers_working_dir_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[storage]\nvictims_file = \"people.json\"\n",
    )
    .unwrap();

    let (config, warnings) = load_or_default(Some(dir.path())).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.storage.victims_file, "people.json");
}

#[test]
fn test_env_overrides() {
    let config = with_overrides_from(Config::default(), |key| match key {
        "RELIEF_DATA_DIR" => Some("/data".to_string()),
        "RELIEF_OUTPUT" => Some("JSON".to_string()),
        "RELIEF_LOG_LEVEL" => Some("info".to_string()),
        _ => None,
    });

    assert_eq!(config.storage.data_dir, Some(PathBuf::from("/data")));
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.log.level, "info");
}

#[test]
fn test_empty_env_values_are_ignored() {
    let config = with_overrides_from(Config::default(), |_| Some(String::new()));

    assert_eq!(config.storage.data_dir, None);
    assert_eq!(config.output.format, OutputFormat::Table);
    assert_eq!(config.log.level, "warn");
}
