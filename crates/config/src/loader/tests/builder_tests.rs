//! Tests for `OverrideLoader` precedence and validation.

use serial_test::serial;
use std::path::PathBuf;

use super::with_loader_env;
use crate::loader::builder::OverrideLoader;
use crate::loader::error::ConfigError;
use crate::types::AppPaths;

fn paths() -> AppPaths {
    AppPaths::new("/srv/site/public")
}

#[test]
#[serial]
fn test_defaults_without_env() {
    let config = with_loader_env(&[], || OverrideLoader::new(paths()).from_env().build())
        .unwrap();

    assert_eq!(config.file_location_override, None);
    assert_eq!(config.candidate_directories, paths().default_candidates());
    assert_eq!(config.key_prefix, "WPENV");
    assert!(!config.disabled);
}

#[test]
#[serial]
fn test_env_overrides_defaults() {
    let list = std::env::join_paths(["/etc/site", "/opt/site"]).unwrap();
    let list = list.to_str().unwrap().to_string();

    let config = with_loader_env(
        &[
            ("DOTENV_LOCATION", "/etc/override"),
            ("DOTENV_LOCATIONS_TO_CHECK", list.as_str()),
            ("DOTENV_KEY_PREFIX", "MYAPP"),
        ],
        || OverrideLoader::new(paths()).from_env().build(),
    )
    .unwrap();

    assert_eq!(
        config.file_location_override,
        Some(PathBuf::from("/etc/override"))
    );
    assert_eq!(
        config.candidate_directories,
        vec![PathBuf::from("/etc/site"), PathBuf::from("/opt/site")]
    );
    assert_eq!(config.key_prefix, "MYAPP");
}

#[test]
#[serial]
fn test_builder_takes_precedence_over_env() {
    let config = with_loader_env(
        &[
            ("DOTENV_LOCATION", "/etc/from-env"),
            ("DOTENV_KEY_PREFIX", "FROMENV"),
        ],
        || {
            OverrideLoader::new(paths())
                .with_location(PathBuf::from("/etc/from-builder"))
                .with_key_prefix("BUILDER".to_string())
                .from_env()
                .build()
        },
    )
    .unwrap();

    assert_eq!(
        config.file_location_override,
        Some(PathBuf::from("/etc/from-builder"))
    );
    assert_eq!(config.key_prefix, "BUILDER");
}

#[test]
#[serial]
fn test_blank_env_values_are_ignored() {
    let config = with_loader_env(
        &[("DOTENV_LOCATION", "   "), ("DOTENV_KEY_PREFIX", "")],
        || OverrideLoader::new(paths()).from_env().build(),
    )
    .unwrap();

    assert_eq!(config.file_location_override, None);
    assert_eq!(config.key_prefix, "WPENV");
}

#[test]
#[serial]
fn test_dotenv_disabled_sets_flag() {
    let config = with_loader_env(&[("DOTENV_DISABLED", "true")], || {
        OverrideLoader::new(paths()).from_env().build()
    })
    .unwrap();

    assert!(config.disabled);
}

#[test]
fn test_empty_location_is_treated_as_unset() {
    let config = OverrideLoader::new(paths())
        .with_location(PathBuf::new())
        .build()
        .unwrap();

    assert_eq!(config.file_location_override, None);
}

#[test]
fn test_empty_candidate_list_is_kept() {
    let config = OverrideLoader::new(paths())
        .with_candidate_directories(Vec::new())
        .build()
        .unwrap();

    assert!(config.candidate_directories.is_empty());
}

#[test]
fn test_key_prefix_is_trimmed() {
    let config = OverrideLoader::new(paths())
        .with_key_prefix("  MYAPP ".to_string())
        .build()
        .unwrap();

    assert_eq!(config.key_prefix, "MYAPP");
}

#[test]
fn test_blank_key_prefix_is_rejected() {
    let result = OverrideLoader::new(paths())
        .with_key_prefix("   ".to_string())
        .build();

    match result {
        Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "key_prefix"),
        other => panic!("expected InvalidValue for blank prefix, got {other:?}"),
    }
}

#[test]
fn test_key_prefix_with_trailing_separator_is_rejected() {
    let result = OverrideLoader::new(paths())
        .with_key_prefix("WPENV_".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
