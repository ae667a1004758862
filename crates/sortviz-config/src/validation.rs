//! Settings validation.
//!
//! Checks numeric fields against the ranges the control panel offers and the
//! sorter id against the registry. All problems are collected, not just the
//! first.

use crate::settings::{DELAY_RANGE_MS, SIZE_RANGE, Settings};
use sortviz_registry::SorterRegistry;
use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Sorter id not in the registry.
    #[error("unknown sorter: {0}")]
    UnknownSorter(String),

    /// Numeric setting out of range.
    #[error("'{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the setting.
        param: String,
        /// The value that was out of range.
        value: u64,
        /// Minimum allowed value.
        min: u64,
        /// Maximum allowed value.
        max: u64,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn check_range(param: &str, value: u64, min: u64, max: u64) -> Option<ValidationError> {
    (value < min || value > max).then(|| ValidationError::OutOfRange {
        param: param.to_string(),
        value,
        min,
        max,
    })
}

/// Validate a complete [`Settings`] value.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    let mut errors = Vec::new();

    errors.extend(check_range(
        "delay_ms",
        settings.delay_ms,
        *DELAY_RANGE_MS.start(),
        *DELAY_RANGE_MS.end(),
    ));
    errors.extend(check_range(
        "array_size",
        settings.array_size as u64,
        *SIZE_RANGE.start() as u64,
        *SIZE_RANGE.end() as u64,
    ));

    if SorterRegistry::new().get(&settings.sorter).is_none() {
        errors.push(ValidationError::UnknownSorter(settings.sorter.clone()));
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
