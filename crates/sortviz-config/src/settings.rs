//! Settings file format and operations.

use serde::{Deserialize, Serialize};
use sortviz_core::Waveform;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::validation::{ValidationResult, validate_settings};

/// Default delay per engine operation, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 30;

/// Default number of bars.
pub const DEFAULT_ARRAY_SIZE: usize = 100;

/// Accepted delay range, in milliseconds.
pub const DELAY_RANGE_MS: RangeInclusive<u64> = 0..=500;

/// Accepted array sizes.
pub const SIZE_RANGE: RangeInclusive<usize> = 10..=100;

/// Range generated values are drawn from.
pub const VALUE_RANGE: RangeInclusive<u32> = 1..=100;

/// User-facing settings.
///
/// Every field has a default, so a partial file (or an empty one) is valid
/// TOML for this struct.
///
/// # TOML Format
///
/// ```toml
/// delay_ms = 30
/// array_size = 100
/// sorter = "bubble"
/// read_waveform = "sine"
/// write_waveform = "sawtooth"
/// seed = 42
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Delay per engine operation in milliseconds.
    pub delay_ms: u64,

    /// Number of bars to generate.
    pub array_size: usize,

    /// Registry id of the selected sorter.
    pub sorter: String,

    /// Tone shape for reads.
    pub read_waveform: Waveform,

    /// Tone shape for writes.
    pub write_waveform: Waveform,

    /// Generator seed; a time-based seed is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            array_size: DEFAULT_ARRAY_SIZE,
            sorter: "bubble".to_string(),
            read_waveform: Waveform::Sine,
            write_waveform: Waveform::Sawtooth,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load settings from `path`, or defaults if the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every field against its accepted range and the registry.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_settings(self)
    }

    /// The delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_control_panel() {
        let settings = Settings::default();
        assert_eq!(settings.delay(), Duration::from_millis(30));
        assert_eq!(settings.array_size, 100);
        assert_eq!(settings.sorter, "bubble");
        assert_eq!(settings.read_waveform, Waveform::Sine);
        assert_eq!(settings.write_waveform, Waveform::Sawtooth);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings = Settings::from_toml("sorter = \"heap\"\nwrite_waveform = \"square\"").unwrap();
        assert_eq!(settings.sorter, "heap");
        assert_eq!(settings.write_waveform, Waveform::Square);
        assert_eq!(settings.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn toml_roundtrip_keeps_seed() {
        let settings = Settings {
            seed: Some(7),
            delay_ms: 0,
            ..Settings::default()
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("seed = 7"));
        assert!(text.contains("read_waveform = \"sine\""));
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn unknown_waveform_is_a_parse_error() {
        let err = Settings::from_toml("read_waveform = \"noise\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}
