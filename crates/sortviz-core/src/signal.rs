//! Cooperative cancellation token.

use crate::error::SortError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token shared for the lifetime of one sort run.
///
/// Cloning shares the flag. Once aborted it stays aborted; a new run needs
/// a new signal.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    aborted: Arc<AtomicBool>,
}

impl AbortSignal {
    /// Create an un-aborted signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
    }

    /// True once [`abort`](Self::abort) has been called on any clone.
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// `Err(SortError::Cancelled)` if aborted.
    pub fn check(&self) -> Result<(), SortError> {
        if self.is_aborted() {
            Err(SortError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let signal = AbortSignal::new();
        let remote = signal.clone();
        assert!(signal.check().is_ok());

        remote.abort();
        assert!(signal.is_aborted());
        assert!(matches!(signal.check(), Err(SortError::Cancelled)));
    }

    #[test]
    fn fresh_signals_are_independent() {
        let first = AbortSignal::new();
        first.abort();
        let second = AbortSignal::new();
        assert!(!second.is_aborted());
    }
}
