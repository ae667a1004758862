//! Sortviz Sorters - sorting algorithms driven through the observable array
//!
//! Every algorithm here implements [`sortviz_core::Sorter`] and touches the
//! array only through engine operations, so each step is counted, animated
//! and cancellable:
//!
//! - [`BubbleSort`] - Adjacent compare-and-swap with a shrinking window
//! - [`InsertionSort`] - Shift larger elements right, drop the key in place
//! - [`SelectionSort`] - Scan for the minimum, swap it to the front
//! - [`QuickSort`] - Lomuto partition around an XOR median-of-three pivot
//! - [`HeapSort`] - Max-heap by sift-down, then repeated root extraction
//! - [`ShellSort`] - Gapped insertion sort with halving gaps
//! - [`CombSort`] - Gapped bubble sort with a 1.3 shrink factor
//! - [`RadixSort`] - LSD base-10 counting sort, no comparisons
//! - [`PigeonholeSort`] - Count into value holes, no comparisons
//! - [`MergeSort`] - Top-down recursive merge through scratch buffers
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use sortviz_core::{MemoryVisualizer, ObservableArray, SharedConfig, Silence, Sorter};
//! use sortviz_sorters::MergeSort;
//!
//! let mut array = ObservableArray::new(
//!     Box::new(MemoryVisualizer::new(vec![3, 1, 2])),
//!     Box::new(Silence),
//!     Arc::new(SharedConfig::new(Duration::ZERO)),
//! );
//!
//! let stats = MergeSort.sort(&mut array).unwrap();
//! assert_eq!(array.visualizer().snapshot().unwrap(), vec![1, 2, 3]);
//! assert_eq!(stats.comparisons, 3);
//! ```

pub mod bubble;
pub mod comb;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod pigeonhole;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

pub use bubble::BubbleSort;
pub use comb::CombSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use pigeonhole::PigeonholeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;

#[cfg(test)]
pub(crate) mod testutil {
    use sortviz_core::{MemoryVisualizer, ObservableArray, SharedConfig, Silence, Sorter, Stats, Value};
    use std::sync::Arc;
    use std::time::Duration;

    /// Zero-delay engine over `values`.
    pub fn array(values: &[Value]) -> ObservableArray {
        ObservableArray::new(
            Box::new(MemoryVisualizer::new(values.to_vec())),
            Box::new(Silence),
            Arc::new(SharedConfig::new(Duration::ZERO)),
        )
    }

    /// Sort `values` and return the result with the run's stats.
    pub fn run(sorter: &dyn Sorter, values: &[Value]) -> (Vec<Value>, Stats) {
        let mut arr = array(values);
        let stats = sorter.sort(&mut arr).unwrap();
        (arr.visualizer().snapshot().unwrap(), stats)
    }
}
