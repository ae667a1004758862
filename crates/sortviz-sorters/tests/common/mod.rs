//! Shared helpers for sorter integration tests.
#![allow(dead_code)]

use sortviz_core::{MemoryVisualizer, ObservableArray, SharedConfig, Silence, Sorter, Stats, Value};
use sortviz_sorters::{
    BubbleSort, CombSort, HeapSort, InsertionSort, MergeSort, PigeonholeSort, QuickSort,
    RadixSort, SelectionSort, ShellSort,
};
use std::sync::Arc;
use std::time::Duration;

/// Every algorithm, by name.
pub fn all_sorters() -> Vec<(&'static str, Box<dyn Sorter>)> {
    vec![
        ("bubble", Box::new(BubbleSort)),
        ("merge", Box::new(MergeSort)),
        ("insertion", Box::new(InsertionSort)),
        ("selection", Box::new(SelectionSort)),
        ("quick", Box::new(QuickSort)),
        ("heap", Box::new(HeapSort)),
        ("radix", Box::new(RadixSort)),
        ("shell", Box::new(ShellSort)),
        ("comb", Box::new(CombSort)),
        ("pigeonhole", Box::new(PigeonholeSort)),
    ]
}

/// Zero-delay engine over `values`.
pub fn array(values: &[Value]) -> ObservableArray {
    ObservableArray::new(
        Box::new(MemoryVisualizer::new(values.to_vec())),
        Box::new(Silence),
        Arc::new(SharedConfig::new(Duration::ZERO)),
    )
}

/// Sort `values` and return the final contents with the run's stats.
pub fn run(sorter: &dyn Sorter, values: &[Value]) -> (Vec<Value>, Stats) {
    let mut arr = array(values);
    let stats = sorter.sort(&mut arr).unwrap();
    (arr.visualizer().snapshot().unwrap(), stats)
}

/// Deterministic xorshift32 values in `1..=max`.
pub fn seeded_values(seed: u32, len: usize, max: u32) -> Vec<Value> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state % max + 1
        })
        .collect()
}
