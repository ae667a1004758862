//! Configuration for the sortviz visualizer.
//!
//! Settings mirror the control panel: animation delay, array size, the
//! selected algorithm and the tone shapes. They are stored as TOML under the
//! platform config directory and validated against the sorter registry.
//!
//! # Example
//!
//! ```rust,no_run
//! use sortviz_config::{Settings, default_settings_path};
//!
//! let mut settings = Settings::load_or_default(default_settings_path()).unwrap();
//! settings.delay_ms = 5;
//! settings.sorter = "quick".to_string();
//! settings.validate().unwrap();
//! settings.save(default_settings_path()).unwrap();
//! ```

mod error;
mod settings;

/// Platform-specific config paths.
pub mod paths;

/// Settings validation.
pub mod validation;

pub use error::ConfigError;
pub use paths::{default_settings_path, user_config_dir};
pub use settings::{
    DEFAULT_ARRAY_SIZE, DEFAULT_DELAY_MS, DELAY_RANGE_MS, SIZE_RANGE, Settings, VALUE_RANGE,
};
pub use validation::{ValidationError, ValidationResult, validate_settings};
