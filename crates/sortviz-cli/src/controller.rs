//! Sort lifecycle: generate, reshape, start, cancel, reset.
//!
//! The controller owns the engine and the source array. Every mutating
//! operation takes `&mut self`, so a resize or a second start can never
//! overlap a live run; only cancellation crosses threads, through a
//! [`CancelHandle`].

use parking_lot::Mutex;
use sortviz_config::{SIZE_RANGE, Settings, VALUE_RANGE};
use sortviz_core::{
    AbortSignal, AudioPlayer, ObservableArray, PortError, SharedConfig, SortError, SortOutcome,
    StatsHandle, TraceRenderer, Value, Visualizer, run_sorter,
};
use sortviz_registry::SorterRegistry;
use std::sync::Arc;
use thiserror::Error;

use crate::generator::ValueGenerator;

/// Controller failures.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Sorter id not in the registry.
    #[error("unknown sorter: {0}")]
    UnknownSorter(String),

    /// Requested array size outside the accepted range.
    #[error("array size {size} out of range [{min}, {max}]")]
    InvalidSize {
        /// Requested size.
        size: usize,
        /// Minimum allowed.
        min: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// The run failed with something other than cancellation.
    #[error("sort failed: {0}")]
    Sort(#[from] SortError),

    /// A visualizer call made outside a run failed.
    #[error("visualizer failure: {0}")]
    Port(#[from] PortError),
}

/// Thread-safe handle that aborts whichever run is active.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    active: Arc<Mutex<Option<AbortSignal>>>,
}

impl CancelHandle {
    /// Abort the active run. Returns `false` when idle.
    pub fn cancel(&self) -> bool {
        match self.active.lock().as_ref() {
            Some(signal) => {
                signal.abort();
                true
            }
            None => false,
        }
    }

    /// True while a run is in progress.
    pub fn is_running(&self) -> bool {
        self.active.lock().is_some()
    }
}

/// Clears the active signal on every exit path of a run.
struct ActiveRun<'a>(&'a CancelHandle);

impl Drop for ActiveRun<'_> {
    fn drop(&mut self) {
        *self.0.active.lock() = None;
    }
}

/// Owns the engine, the source array and the sorter selection.
pub struct Controller {
    array: ObservableArray,
    source: Vec<Value>,
    size: usize,
    generator: ValueGenerator,
    registry: SorterRegistry,
    sorter_id: String,
    config: Arc<SharedConfig>,
    cancel: CancelHandle,
}

impl Controller {
    /// Build a controller from validated settings and fill the array.
    pub fn new(
        settings: &Settings,
        visualizer: Box<dyn Visualizer>,
        audio: Box<dyn AudioPlayer>,
    ) -> Result<Self, ControllerError> {
        let registry = SorterRegistry::new();
        if registry.get(&settings.sorter).is_none() {
            return Err(ControllerError::UnknownSorter(settings.sorter.clone()));
        }
        check_size(settings.array_size)?;

        let config = Arc::new(
            SharedConfig::new(settings.delay())
                .with_waveforms(settings.read_waveform, settings.write_waveform),
        );
        let generator = match settings.seed {
            Some(seed) => ValueGenerator::new(seed, VALUE_RANGE),
            None => ValueGenerator::from_clock(VALUE_RANGE),
        };

        let mut controller = Self {
            array: ObservableArray::new(visualizer, audio, config.clone()),
            source: Vec::new(),
            size: settings.array_size,
            generator,
            registry,
            sorter_id: settings.sorter.clone(),
            config,
            cancel: CancelHandle::default(),
        };
        controller.generate();
        Ok(controller)
    }

    /// Replace the source with fresh random values and redraw.
    pub fn generate(&mut self) -> &[Value] {
        self.source = self.generator.values(self.size);
        self.array.rebuild(&self.source);
        tracing::debug!(len = self.source.len(), "generated array");
        &self.source
    }

    /// Change the array size, keeping the existing prefix.
    ///
    /// Shrinking truncates; growing appends new random values.
    pub fn reshape(&mut self, size: usize) -> Result<(), ControllerError> {
        check_size(size)?;
        self.size = size;
        if size < self.source.len() {
            self.source.truncate(size);
        } else {
            let extra = self.generator.values(size - self.source.len());
            self.source.extend(extra);
        }
        self.array.rebuild(&self.source);
        Ok(())
    }

    /// Restore the visualizer to the source array.
    pub fn reset(&mut self) {
        self.array.rebuild(&self.source);
    }

    /// Select the sorter used by the next [`start`](Self::start).
    pub fn select_sorter(&mut self, id: &str) -> Result<(), ControllerError> {
        if self.registry.get(id).is_none() {
            return Err(ControllerError::UnknownSorter(id.to_string()));
        }
        self.sorter_id = id.to_string();
        Ok(())
    }

    /// Currently selected sorter id.
    pub fn sorter_id(&self) -> &str {
        &self.sorter_id
    }

    /// Run the selected sorter to completion or cancellation.
    ///
    /// Counters are zeroed first. Cancellation is reported as an outcome;
    /// only real faults are errors. The controller is idle again on return
    /// in every case.
    pub fn start(
        &mut self,
        renderer: &mut dyn TraceRenderer,
    ) -> Result<SortOutcome, ControllerError> {
        let sorter = self
            .registry
            .create(&self.sorter_id)
            .ok_or_else(|| ControllerError::UnknownSorter(self.sorter_id.clone()))?;

        let signal = AbortSignal::new();
        *self.cancel.active.lock() = Some(signal.clone());
        let _active = ActiveRun(&self.cancel);

        tracing::info!(sorter = %self.sorter_id, len = self.array.len(), "sort started");
        match run_sorter(sorter.as_ref(), &mut self.array, signal, renderer) {
            Ok(outcome) => {
                match &outcome {
                    SortOutcome::Completed(stats) => {
                        tracing::info!(%stats, "sort completed");
                    }
                    SortOutcome::Cancelled(stats) => {
                        tracing::info!(%stats, "sort cancelled");
                    }
                }
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(error = %err, "sort failed");
                Err(err.into())
            }
        }
    }

    /// Handle for aborting runs from another thread.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Handle for polling counters from another thread.
    pub fn stats_handle(&self) -> StatsHandle {
        self.array.stats_handle()
    }

    /// Live configuration; delay changes apply at the next pause.
    pub fn config(&self) -> Arc<SharedConfig> {
        self.config.clone()
    }

    /// The unsorted source array.
    pub fn source(&self) -> &[Value] {
        &self.source
    }

    /// Current visualized contents.
    pub fn snapshot(&self) -> Result<Vec<Value>, ControllerError> {
        Ok(self.array.visualizer().snapshot()?)
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.array.len()
    }
}

fn check_size(size: usize) -> Result<(), ControllerError> {
    if SIZE_RANGE.contains(&size) {
        Ok(())
    } else {
        Err(ControllerError::InvalidSize {
            size,
            min: *SIZE_RANGE.start(),
            max: *SIZE_RANGE.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::{MemoryVisualizer, NullRenderer, Silence};
    use std::thread;
    use std::time::Duration;

    fn settings(size: usize, sorter: &str) -> Settings {
        Settings {
            delay_ms: 0,
            array_size: size,
            sorter: sorter.to_string(),
            seed: Some(3),
            ..Settings::default()
        }
    }

    fn controller(size: usize, sorter: &str) -> Controller {
        Controller::new(
            &settings(size, sorter),
            Box::new(MemoryVisualizer::default()),
            Box::new(Silence),
        )
        .unwrap()
    }

    fn is_sorted(values: &[Value]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn new_generates_source() {
        let c = controller(25, "bubble");
        assert_eq!(c.source().len(), 25);
        assert_eq!(c.snapshot().unwrap(), c.source());
        assert!(c.source().iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn rejects_bad_settings() {
        let err = Controller::new(
            &settings(25, "bogo"),
            Box::new(MemoryVisualizer::default()),
            Box::new(Silence),
        )
        .err()
        .unwrap();
        assert!(matches!(err, ControllerError::UnknownSorter(_)));

        let err = Controller::new(
            &settings(5, "bubble"),
            Box::new(MemoryVisualizer::default()),
            Box::new(Silence),
        )
        .err()
        .unwrap();
        assert!(matches!(err, ControllerError::InvalidSize { size: 5, .. }));
    }

    #[test]
    fn reshape_truncates_and_extends() {
        let mut c = controller(20, "bubble");
        let prefix = c.source()[..10].to_vec();

        c.reshape(10).unwrap();
        assert_eq!(c.source(), prefix.as_slice());

        c.reshape(30).unwrap();
        assert_eq!(c.source().len(), 30);
        assert_eq!(&c.source()[..10], prefix.as_slice());
        assert_eq!(c.len(), 30);

        assert!(c.reshape(101).is_err());
    }

    #[test]
    fn start_sorts_and_reset_restores() {
        let mut c = controller(40, "heap");
        let source = c.source().to_vec();

        let outcome = c.start(&mut NullRenderer).unwrap();
        assert!(!outcome.is_cancelled());
        assert!(outcome.stats().comparisons > 0);
        assert!(is_sorted(&c.snapshot().unwrap()));
        assert!(!c.cancel_handle().is_running());

        c.reset();
        assert_eq!(c.snapshot().unwrap(), source);
    }

    #[test]
    fn each_start_resets_stats() {
        let mut c = controller(10, "selection");
        let first = c.start(&mut NullRenderer).unwrap();
        c.reset();
        let second = c.start(&mut NullRenderer).unwrap();
        assert_eq!(first.stats(), second.stats());
    }

    #[test]
    fn select_sorter_validates() {
        let mut c = controller(10, "bubble");
        c.select_sorter("radix").unwrap();
        assert_eq!(c.sorter_id(), "radix");
        assert!(c.select_sorter("bogo").is_err());
        assert_eq!(c.sorter_id(), "radix");
    }

    #[test]
    fn cancel_when_idle_is_a_no_op() {
        let c = controller(10, "bubble");
        assert!(!c.cancel_handle().cancel());
    }

    #[test]
    fn cancel_from_another_thread() {
        let mut c = controller(100, "bubble");
        c.config().set_delay(Duration::from_millis(2));
        let cancel = c.cancel_handle();

        let worker = thread::spawn(move || {
            let outcome = c.start(&mut NullRenderer);
            (c, outcome)
        });

        while !cancel.is_running() {
            thread::yield_now();
        }
        thread::sleep(Duration::from_millis(20));
        assert!(cancel.cancel());

        let (c, outcome) = worker.join().unwrap();
        assert!(outcome.unwrap().is_cancelled());
        assert!(!cancel.is_running());
        assert!(!c.cancel_handle().cancel());
    }
}
