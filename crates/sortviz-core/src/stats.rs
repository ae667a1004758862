//! Operation counters.
//!
//! [`Stats`] is a plain record. The engine keeps it behind a [`StatsHandle`]
//! so a monitor thread can take snapshots while a sort is running; only the
//! engine's primitives ever write to it.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Counters for one sort run plus the label of the latest command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Array reads.
    pub reads: u64,
    /// Array writes.
    pub writes: u64,
    /// Comparisons (element-element, element-value or value-value).
    pub comparisons: u64,
    /// Swaps.
    pub swaps: u64,
    /// Description of the most recently issued command.
    pub action: String,
}

impl Stats {
    /// Create zeroed stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all four counters together.
    ///
    /// The action label is left alone: it still names the last command
    /// that was actually issued.
    pub fn reset(&mut self) {
        self.reads = 0;
        self.writes = 0;
        self.comparisons = 0;
        self.swaps = 0;
    }

    /// Total array accesses (reads + writes).
    pub fn accesses(&self) -> u64 {
        self.reads + self.writes
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reads={} writes={} comparisons={} swaps={}",
            self.reads, self.writes, self.comparisons, self.swaps
        )
    }
}

/// Which counter a primitive bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Counter {
    Reads,
    Writes,
    Comparisons,
    Swaps,
}

/// Shared, cloneable handle to a [`Stats`] record.
#[derive(Debug, Clone, Default)]
pub struct StatsHandle {
    inner: Arc<Mutex<Stats>>,
}

impl StatsHandle {
    /// Create a handle to fresh stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current values.
    pub fn snapshot(&self) -> Stats {
        self.inner.lock().clone()
    }

    /// Zero the counters.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub(crate) fn bump(&self, counter: Counter) {
        let mut stats = self.inner.lock();
        match counter {
            Counter::Reads => stats.reads += 1,
            Counter::Writes => stats.writes += 1,
            Counter::Comparisons => stats.comparisons += 1,
            Counter::Swaps => stats.swaps += 1,
        }
    }

    pub(crate) fn set_action(&self, action: String) {
        self.inner.lock().action = action;
    }
}
