//! Aborting a run mid-sort.

mod common;

use common::{all_sorters, seeded_values};
use sortviz_core::{
    AbortSignal, MemoryVisualizer, NullRenderer, ObservableArray, SharedConfig, Silence,
    run_sorter,
};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn every_sorter_stops_promptly() {
    let delay = Duration::from_millis(4);
    for (name, sorter) in all_sorters() {
        let values = seeded_values(5, 60, 100);
        let mut array = ObservableArray::new(
            Box::new(MemoryVisualizer::new(values)),
            Box::new(Silence),
            Arc::new(SharedConfig::new(delay)),
        );
        let stats = array.stats_handle();
        let signal = AbortSignal::new();
        let remote = signal.clone();

        let worker = thread::spawn(move || {
            let outcome = run_sorter(sorter.as_ref(), &mut array, signal, &mut NullRenderer);
            (outcome, Instant::now())
        });

        thread::sleep(Duration::from_millis(30));
        let aborted_at = Instant::now();
        remote.abort();
        let (outcome, halted_at) = worker.join().unwrap();

        let outcome = outcome.unwrap();
        assert!(outcome.is_cancelled(), "{name} ran to completion");
        assert!(
            halted_at.duration_since(aborted_at) < Duration::from_millis(500),
            "{name} took too long to stop"
        );
        assert_eq!(stats.snapshot().reads, outcome.stats().reads, "{name}");
    }
}
