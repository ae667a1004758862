//! Error types for the observable array engine.

use thiserror::Error;

/// Failure raised by a collaborator port (renderer, storage behind it, ...).
///
/// The engine never swallows these: they travel unchanged up through the
/// sorter to whoever started the run.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PortError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl PortError {
    /// Create a port error with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a port error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Index past the end of the visualized array.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::new(format!("index {index} out of range for array of length {len}"))
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors surfaced by engine operations and sorters.
#[derive(Debug, Error)]
pub enum SortError {
    /// The run's abort signal was observed. Expected; not a fault.
    #[error("sort cancelled")]
    Cancelled,

    /// A collaborator port failed.
    #[error("port failure: {0}")]
    Port(#[from] PortError),
}

impl SortError {
    /// True for the cancellation kind.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SortError::Cancelled)
    }
}

/// An unrecognized comparison operator symbol.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown comparison operator: '{0}'")]
pub struct ParseOperatorError(pub String);

/// An unrecognized waveform name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown waveform: '{0}' (expected sine, square, triangle or sawtooth)")]
pub struct ParseWaveformError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn cancelled_is_distinguishable() {
        assert!(SortError::Cancelled.is_cancelled());
        assert!(!SortError::from(PortError::new("boom")).is_cancelled());
    }

    #[test]
    fn port_error_display() {
        let err = PortError::index_out_of_range(7, 3);
        assert_eq!(err.to_string(), "index 7 out of range for array of length 3");
        assert!(err.source().is_none());
    }

    #[test]
    fn port_error_keeps_source() {
        let io = std::io::Error::other("disk gone");
        let err = PortError::with_source("render failed", io);
        assert_eq!(err.message(), "render failed");
        assert!(err.source().is_some());
    }

    #[test]
    fn sort_error_wraps_port_message() {
        let err = SortError::from(PortError::new("canvas detached"));
        assert_eq!(err.to_string(), "port failure: canvas detached");
    }

    #[test]
    fn parse_operator_display() {
        let err = ParseOperatorError("=>".to_string());
        assert_eq!(err.to_string(), "unknown comparison operator: '=>'");
    }
}
