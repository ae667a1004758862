//! The observable array engine.
//!
//! [`ObservableArray`] is the single choke point through which array state
//! is observed or mutated. Every access it performs is:
//!
//! - **counted** in [`Stats`],
//! - **audible** through the [`AudioPlayer`] port,
//! - **paced** by the delay from the [`ConfigSource`],
//! - **cancellable** through the run's [`AbortSignal`].
//!
//! ## Commands
//!
//! All work happens inside [`ObservableArray::command`]. A command observes
//! the abort signal, records its description as the current action, clears
//! every highlight and hands an [`OperationContext`] to its body. The derived
//! operations (`compare`, `compare_with_val`, `compare_values`, `swap`,
//! `set`, `get`) are each exactly one command.
//!
//! Highlights follow the read order: `compare` marks `i2` only once the
//! first half-pause is over, and `compare_with_val` marks its cell after
//! reading it.
//!
//! ## Timing
//!
//! | operation | pauses |
//! |-----------|--------|
//! | `compare` | half after each of the two reads |
//! | `compare_with_val` | one full |
//! | `compare_values` | one half |
//! | `swap` | half before and half after the write phase |
//! | `set`, `get` | one full |

use crate::compare::CompareOp;
use crate::config::ConfigSource;
use crate::error::SortError;
use crate::port::{AudioPlayer, StyleKind, Value, Visualizer};
use crate::signal::AbortSignal;
use crate::stats::{Counter, Stats, StatsHandle};
use std::sync::Arc;
use std::time::Duration;

/// Tone offset for reads.
const READ_TONE_BASE: u32 = 60;

/// Tone offset for writes.
const WRITE_TONE_BASE: u32 = 40;

/// Instrumented, cancellable view of the array owned by a [`Visualizer`].
pub struct ObservableArray {
    visualizer: Box<dyn Visualizer>,
    audio: Box<dyn AudioPlayer>,
    config: Arc<dyn ConfigSource>,
    stats: StatsHandle,
    signal: AbortSignal,
}

impl ObservableArray {
    /// Wrap the given ports.
    pub fn new(
        visualizer: Box<dyn Visualizer>,
        audio: Box<dyn AudioPlayer>,
        config: Arc<dyn ConfigSource>,
    ) -> Self {
        Self {
            visualizer,
            audio,
            config,
            stats: StatsHandle::new(),
            signal: AbortSignal::new(),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.visualizer.len()
    }

    /// True if there are no cells.
    pub fn is_empty(&self) -> bool {
        self.visualizer.is_empty()
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> Stats {
        self.stats.snapshot()
    }

    /// Shared handle for monitors on other threads.
    pub fn stats_handle(&self) -> StatsHandle {
        self.stats.clone()
    }

    /// Zero the counters.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// Install the cancellation token for the next run.
    pub fn arm(&mut self, signal: AbortSignal) {
        self.signal = signal;
    }

    /// The currently installed cancellation token.
    pub fn signal(&self) -> &AbortSignal {
        &self.signal
    }

    /// Read-only access to the visualizer port.
    pub fn visualizer(&self) -> &dyn Visualizer {
        self.visualizer.as_ref()
    }

    /// Replace the visualized contents.
    ///
    /// Not an engine operation: nothing is counted. Callers must not do this
    /// while a run is live.
    pub fn rebuild(&mut self, values: &[Value]) {
        self.visualizer.rebuild(values);
    }

    /// Run `body` as one atomic, labelled unit of work.
    ///
    /// This is the primitive the derived operations are built from, and the
    /// way to build new ones.
    pub fn command<T>(
        &mut self,
        description: impl Into<String>,
        body: impl FnOnce(&mut OperationContext<'_>) -> Result<T, SortError>,
    ) -> Result<T, SortError> {
        self.signal.check()?;
        let description = description.into();
        #[cfg(feature = "tracing")]
        tracing::trace!(action = %description, "command");
        self.stats.set_action(description);
        self.visualizer.clear_styles()?;

        let mut ctx = OperationContext {
            visualizer: self.visualizer.as_mut(),
            audio: self.audio.as_mut(),
            config: self.config.as_ref(),
            stats: &self.stats,
            signal: &self.signal,
        };
        body(&mut ctx)
    }

    /// Compare two cells: `a[i1] <op> a[i2]`.
    pub fn compare(&mut self, i1: usize, op: CompareOp, i2: usize) -> Result<bool, SortError> {
        self.command(format!("Compare a[{i1}] {op} a[{i2}]"), |ctx| {
            ctx.tally(Counter::Comparisons);
            ctx.highlight(i1, StyleKind::CompareA)?;
            let a = ctx.read(i1)?;
            ctx.pause_half()?;
            ctx.highlight(i2, StyleKind::CompareB)?;
            let b = ctx.read(i2)?;
            ctx.pause_half()?;
            Ok(op.evaluate(a, b))
        })
    }

    /// Compare a cell with a literal: `a[index] <op> value`.
    pub fn compare_with_val(
        &mut self,
        index: usize,
        op: CompareOp,
        value: Value,
    ) -> Result<bool, SortError> {
        self.command(format!("Compare a[{index}] {op} {value}"), |ctx| {
            ctx.tally(Counter::Comparisons);
            let a = ctx.read(index)?;
            ctx.highlight(index, StyleKind::CompareA)?;
            ctx.pause()?;
            Ok(op.evaluate(a, value))
        })
    }

    /// Compare two values already held in scratch storage: `a <op> b`.
    ///
    /// Counted as a comparison but touches no cell, so nothing is
    /// highlighted or sounded.
    pub fn compare_values(&mut self, a: Value, op: CompareOp, b: Value) -> Result<bool, SortError> {
        self.command(format!("Compare {a} {op} {b}"), |ctx| {
            ctx.tally(Counter::Comparisons);
            ctx.pause_half()?;
            Ok(op.evaluate(a, b))
        })
    }

    /// Exchange two cells.
    pub fn swap(&mut self, i1: usize, i2: usize) -> Result<(), SortError> {
        self.command(format!("Swap {i1} and {i2}"), |ctx| {
            ctx.tally(Counter::Swaps);
            ctx.highlight(i1, StyleKind::SwapA)?;
            ctx.highlight(i2, StyleKind::SwapB)?;

            let first = ctx.read(i1)?;
            let second = ctx.read_quiet(i2)?;
            ctx.pause_half()?;

            ctx.write(i1, second)?;
            ctx.write_quiet(i2, first)?;

            ctx.highlight(i1, StyleKind::SwapB)?;
            ctx.highlight(i2, StyleKind::SwapA)?;
            ctx.pause_half()
        })
    }

    /// Write `value` into one cell.
    pub fn set(&mut self, index: usize, value: Value) -> Result<(), SortError> {
        self.command(format!("Set {index} to {value}"), |ctx| {
            ctx.highlight(index, StyleKind::Write)?;
            ctx.write(index, value)?;
            ctx.pause()
        })
    }

    /// Read one cell.
    pub fn get(&mut self, index: usize) -> Result<Value, SortError> {
        self.command(format!("Get {index}"), |ctx| {
            ctx.highlight(index, StyleKind::Read)?;
            let value = ctx.read(index)?;
            ctx.pause()?;
            Ok(value)
        })
    }
}

impl std::fmt::Debug for ObservableArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableArray")
            .field("len", &self.len())
            .field("stats", &self.stats.snapshot())
            .field("aborted", &self.signal.is_aborted())
            .finish_non_exhaustive()
    }
}

/// Capabilities handed to one command body.
///
/// Built fresh for every command and only borrowed by the body, so array
/// access can never escape a command.
pub struct OperationContext<'a> {
    visualizer: &'a mut dyn Visualizer,
    audio: &'a mut dyn AudioPlayer,
    config: &'a dyn ConfigSource,
    stats: &'a StatsHandle,
    signal: &'a AbortSignal,
}

impl OperationContext<'_> {
    /// Read a cell and sound the read tone.
    pub fn read(&mut self, index: usize) -> Result<Value, SortError> {
        self.read_with(index, true)
    }

    /// Read a cell without sounding a tone.
    pub fn read_quiet(&mut self, index: usize) -> Result<Value, SortError> {
        self.read_with(index, false)
    }

    /// Write a cell and sound the write tone.
    pub fn write(&mut self, index: usize, value: Value) -> Result<(), SortError> {
        self.write_with(index, value, true)
    }

    /// Write a cell without sounding a tone.
    pub fn write_quiet(&mut self, index: usize, value: Value) -> Result<(), SortError> {
        self.write_with(index, value, false)
    }

    /// Highlight one cell for the remainder of this command.
    pub fn highlight(&mut self, index: usize, style: StyleKind) -> Result<(), SortError> {
        self.visualizer.set_style(index, style)?;
        Ok(())
    }

    /// Sleep for the configured delay, then observe the abort signal.
    pub fn pause(&mut self) -> Result<(), SortError> {
        self.sleep(self.config.delay())
    }

    /// Sleep for half the configured delay, then observe the abort signal.
    pub fn pause_half(&mut self) -> Result<(), SortError> {
        self.sleep(self.config.delay() / 2)
    }

    fn sleep(&self, delay: Duration) -> Result<(), SortError> {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.signal.check()
    }

    fn read_with(&mut self, index: usize, sound: bool) -> Result<Value, SortError> {
        self.signal.check()?;
        self.stats.bump(Counter::Reads);
        if sound {
            self.audio
                .sound(tone(READ_TONE_BASE, index), self.config.read_waveform());
        }
        Ok(self.visualizer.value(index)?)
    }

    fn write_with(&mut self, index: usize, value: Value, sound: bool) -> Result<(), SortError> {
        self.signal.check()?;
        self.stats.bump(Counter::Writes);
        if sound {
            self.audio
                .sound(tone(WRITE_TONE_BASE, index), self.config.write_waveform());
        }
        self.visualizer.set_value(index, value)?;
        Ok(())
    }

    pub(crate) fn tally(&self, counter: Counter) {
        self.stats.bump(counter);
    }
}

fn tone(base: u32, index: usize) -> u32 {
    base.saturating_add(u32::try_from(index).unwrap_or(u32::MAX))
}
