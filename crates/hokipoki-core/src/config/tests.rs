//! Tests for configuration loading

use super::*;
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AdapterConfig::default();
    assert_eq!(config.program, "hokipoki");
    assert_eq!(config.timeout(), Some(Duration::from_secs(600)));
    assert!(config.working_dir.is_none());
}

#[test]
fn test_zero_timeout_disables() {
    let config = AdapterConfig {
        timeout_secs: 0,
        ..Default::default()
    };
    assert_eq!(config.timeout(), None);
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = ConfigLoader::new()
        .with_search_paths(Vec::new())
        .load()
        .unwrap();
    assert_eq!(config, AdapterConfig::default());
}

#[test]
fn test_load_partial_file() {
    let file = config_file("timeout_secs = 30\n");
    let config = ConfigLoader::new().with_file(file.path()).load().unwrap();

    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.program, "hokipoki");
}

#[test]
fn test_search_paths_pick_first_existing() {
    let file = config_file("program = \"/usr/local/bin/hokipoki\"\n");
    let config = ConfigLoader::new()
        .with_search_paths(vec![
            PathBuf::from("/definitely/not/here.toml"),
            file.path().to_path_buf(),
        ])
        .load()
        .unwrap();
    assert_eq!(config.program, "/usr/local/bin/hokipoki");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let err = ConfigLoader::new()
        .with_file("/definitely/not/here.toml")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = config_file("timeout_secs = \"soon\"\n");
    let err = ConfigLoader::new().with_file(file.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_env_overrides() {
    let overrides = ConfigOverrides::from_lookup(lookup_from(&[
        (env::PROGRAM, "hp"),
        (env::TIMEOUT_SECS, " 45 "),
        (env::WORKING_DIR, "/repo"),
    ]))
    .unwrap();

    assert_eq!(overrides.program.as_deref(), Some("hp"));
    assert_eq!(overrides.timeout_secs, Some(45));
    assert_eq!(overrides.working_dir, Some(PathBuf::from("/repo")));
}

#[test]
fn test_env_invalid_timeout() {
    let err = ConfigOverrides::from_lookup(lookup_from(&[(env::TIMEOUT_SECS, "ten")]))
        .unwrap_err();
    match err {
        ConfigError::InvalidValue { key, value } => {
            assert_eq!(key, env::TIMEOUT_SECS);
            assert_eq!(value, "ten");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_later_overrides_win() {
    let file = config_file("program = \"from-file\"\ntimeout_secs = 10\n");
    let env_layer = ConfigOverrides {
        program: Some("from-env".to_string()),
        timeout_secs: Some(20),
        ..Default::default()
    };
    let cli_layer = ConfigOverrides {
        timeout_secs: Some(5),
        ..Default::default()
    };

    let config = ConfigLoader::new()
        .with_file(file.path())
        .with_overrides(env_layer)
        .with_overrides(cli_layer)
        .load()
        .unwrap();

    assert_eq!(config.program, "from-env");
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn test_blank_program_override_is_ignored() {
    let mut config = AdapterConfig::default();
    config.merge(ConfigOverrides {
        program: Some("  ".to_string()),
        ..Default::default()
    });
    assert_eq!(config.program, "hokipoki");
}
