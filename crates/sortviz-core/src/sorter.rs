//! Sorting strategy protocol.

use crate::engine::ObservableArray;
use crate::error::SortError;
use crate::signal::AbortSignal;
use crate::stats::Stats;
use crate::trace::{TraceRenderer, VariableTrace};

/// A sorting algorithm expressed purely in engine operations.
///
/// Implementations must reach the array only through the
/// [`ObservableArray`] they are handed and keep scratch state in the
/// [`VariableTrace`]. They must not swallow [`SortError::Cancelled`].
///
/// # Example
///
/// ```rust
/// use sortviz_core::{CompareOp, ObservableArray, SortError, Sorter, VariableTrace};
///
/// struct OneBubblePass;
///
/// impl Sorter for OneBubblePass {
///     fn sort_traced(
///         &self,
///         array: &mut ObservableArray,
///         vars: &mut VariableTrace<'_>,
///     ) -> Result<(), SortError> {
///         for i in 1..array.len() {
///             vars.set("i", i);
///             if array.compare(i - 1, CompareOp::Gt, i)? {
///                 array.swap(i - 1, i)?;
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Sorter: Send + Sync {
    /// Sort the array in place, publishing scratch variables to `vars`.
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError>;

    /// Sort without a variable panel and return the engine's counters.
    ///
    /// Counters are not zeroed first; [`run_sorter`] does that.
    fn sort(&self, array: &mut ObservableArray) -> Result<Stats, SortError> {
        let mut vars = VariableTrace::detached();
        self.sort_traced(array, &mut vars)?;
        Ok(array.stats())
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// The sorter returned normally.
    Completed(Stats),
    /// The abort signal fired; the array is in a partial state.
    Cancelled(Stats),
}

impl SortOutcome {
    /// Stats at the point the run ended.
    pub fn stats(&self) -> &Stats {
        match self {
            SortOutcome::Completed(stats) | SortOutcome::Cancelled(stats) => stats,
        }
    }

    /// True if the run was aborted.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SortOutcome::Cancelled(_))
    }
}

/// Run `sorter` once under `signal`.
///
/// Zeroes the counters, installs the signal and gives the sorter a fresh
/// trace on `renderer`. Cancellation is reported as
/// [`SortOutcome::Cancelled`]; any other failure is returned as an error.
pub fn run_sorter(
    sorter: &dyn Sorter,
    array: &mut ObservableArray,
    signal: AbortSignal,
    renderer: &mut dyn TraceRenderer,
) -> Result<SortOutcome, SortError> {
    array.arm(signal);
    array.reset_stats();

    let result = {
        let mut vars = VariableTrace::new(renderer);
        sorter.sort_traced(array, &mut vars)
    };

    match result {
        Ok(()) => Ok(SortOutcome::Completed(array.stats())),
        Err(SortError::Cancelled) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(stats = %array.stats(), "sort cancelled");
            Ok(SortOutcome::Cancelled(array.stats()))
        }
        Err(err) => Err(err),
    }
}
