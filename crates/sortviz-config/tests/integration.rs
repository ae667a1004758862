//! Integration tests for sortviz-config.
//!
//! These exercise the file round trip through a temporary directory.

use sortviz_config::{ConfigError, Settings, ValidationError};
use sortviz_core::Waveform;
use tempfile::TempDir;

#[test]
fn save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let settings = Settings {
        delay_ms: 12,
        array_size: 40,
        sorter: "comb".to_string(),
        read_waveform: Waveform::Triangle,
        write_waveform: Waveform::Square,
        seed: Some(99),
    };
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);
    assert!(loaded.validate().is_ok());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    assert_eq!(Settings::load_or_default(&path).unwrap(), Settings::default());
    assert!(matches!(
        Settings::load(&path),
        Err(ConfigError::ReadFile { .. })
    ));
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "delay_ms = \"fast\"").unwrap();

    let err = Settings::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::TomlParse(_)), "got: {err}");
}

#[test]
fn loaded_file_is_validated_separately() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "sorter = \"stooge\"\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    let err = ConfigError::from(settings.validate().unwrap_err());
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::UnknownSorter(ref id)) if id == "stooge"
    ));
}

#[test]
fn save_creates_missing_config_dir() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config").join("sortviz");
    let path = config_dir.join("settings.toml");
    assert!(!config_dir.exists());

    Settings::default().save(&path).unwrap();
    assert!(config_dir.is_dir());
    assert_eq!(Settings::load(&path).unwrap(), Settings::default());
}
