//! Sorter registry and factory for sortviz.
//!
//! This crate provides a centralized registry for discovering and
//! instantiating sorting algorithms. Controllers pick an algorithm by id at
//! runtime; front ends use the descriptors to build menus.
//!
//! # Features
//!
//! - **Sorter Discovery**: List all available algorithms with metadata
//! - **Factory Pattern**: Create sorters by id at runtime
//! - **Category System**: Algorithms grouped by strategy (exchange, merge, ...)
//!
//! # Example
//!
//! ```rust
//! use sortviz_registry::{SorterCategory, SorterRegistry};
//!
//! let registry = SorterRegistry::new();
//!
//! for sorter in registry.all_sorters() {
//!     println!("{}: {}", sorter.name, sorter.description);
//! }
//!
//! let quick = registry.create("quick").expect("quick sort is built in");
//! # let _ = quick;
//!
//! for sorter in registry.sorters_in_category(SorterCategory::Distribution) {
//!     println!("Comparison-free: {}", sorter.name);
//! }
//! ```

use sortviz_core::Sorter;
use sortviz_sorters::{
    BubbleSort, CombSort, HeapSort, InsertionSort, MergeSort, PigeonholeSort, QuickSort,
    RadixSort, SelectionSort, ShellSort,
};

/// Strategy family of a sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SorterCategory {
    /// Repeatedly exchanges out-of-order pairs (bubble, comb, quick)
    Exchange,
    /// Repeatedly selects an extreme element (selection, heap)
    Selection,
    /// Inserts each element into a sorted prefix (insertion, shell)
    Insertion,
    /// Merges sorted runs (merge)
    Merge,
    /// Buckets by value without comparing (radix, pigeonhole)
    Distribution,
}

impl SorterCategory {
    /// Returns a human-readable name for the category.
    pub const fn name(&self) -> &'static str {
        match self {
            SorterCategory::Exchange => "Exchange",
            SorterCategory::Selection => "Selection",
            SorterCategory::Insertion => "Insertion",
            SorterCategory::Merge => "Merge",
            SorterCategory::Distribution => "Distribution",
        }
    }
}

/// Describes a sorter in the registry.
#[derive(Debug, Clone)]
pub struct SorterDescriptor {
    /// Unique identifier (lowercase, no spaces).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Brief description of the algorithm.
    pub description: &'static str,
    /// Category for organization.
    pub category: SorterCategory,
    /// Average-case time complexity.
    pub complexity: &'static str,
    /// Whether equal elements keep their relative order.
    pub stable: bool,
}

type SorterFactory = fn() -> Box<dyn Sorter>;

struct RegistryEntry {
    descriptor: SorterDescriptor,
    factory: SorterFactory,
}

/// Registry of all available sorting algorithms.
///
/// Entries keep registration order, which is the order the control panel
/// lists them in; the first entry is the default selection.
pub struct SorterRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for SorterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SorterRegistry {
    /// Create a new registry with all built-in sorters registered.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(10),
        };
        registry.register_builtin_sorters();
        registry
    }

    fn register_builtin_sorters(&mut self) {
        self.register(
            SorterDescriptor {
                id: "bubble",
                name: "Bubble Sort",
                description: "Adjacent compare-and-swap passes over a shrinking window",
                category: SorterCategory::Exchange,
                complexity: "O(n^2)",
                stable: true,
            },
            || Box::new(BubbleSort),
        );

        self.register(
            SorterDescriptor {
                id: "merge",
                name: "Merge Sort",
                description: "Top-down recursive merge through scratch buffers",
                category: SorterCategory::Merge,
                complexity: "O(n log n)",
                stable: true,
            },
            || Box::new(MergeSort),
        );

        self.register(
            SorterDescriptor {
                id: "insertion",
                name: "Insertion Sort",
                description: "Shifts larger elements right and drops each key in place",
                category: SorterCategory::Insertion,
                complexity: "O(n^2)",
                stable: true,
            },
            || Box::new(InsertionSort),
        );

        self.register(
            SorterDescriptor {
                id: "selection",
                name: "Selection Sort",
                description: "Swaps the minimum of the unsorted suffix to its front",
                category: SorterCategory::Selection,
                complexity: "O(n^2)",
                stable: false,
            },
            || Box::new(SelectionSort),
        );

        self.register(
            SorterDescriptor {
                id: "quick",
                name: "Quick Sort",
                description: "Lomuto partition around an XOR median-of-three pivot",
                category: SorterCategory::Exchange,
                complexity: "O(n log n)",
                stable: false,
            },
            || Box::new(QuickSort),
        );

        self.register(
            SorterDescriptor {
                id: "heap",
                name: "Heap Sort",
                description: "Max-heap by sift-down, then repeated root extraction",
                category: SorterCategory::Selection,
                complexity: "O(n log n)",
                stable: false,
            },
            || Box::new(HeapSort),
        );

        self.register(
            SorterDescriptor {
                id: "radix",
                name: "Radix Sort",
                description: "LSD base-10 counting sort per digit",
                category: SorterCategory::Distribution,
                complexity: "O(d(n + 10))",
                stable: true,
            },
            || Box::new(RadixSort),
        );

        self.register(
            SorterDescriptor {
                id: "shell",
                name: "Shell Sort",
                description: "Gapped insertion sort with halving gaps",
                category: SorterCategory::Insertion,
                complexity: "O(n^2)",
                stable: false,
            },
            || Box::new(ShellSort),
        );

        self.register(
            SorterDescriptor {
                id: "comb",
                name: "Comb Sort",
                description: "Gapped bubble sort with a 1.3 shrink factor",
                category: SorterCategory::Exchange,
                complexity: "O(n^2)",
                stable: false,
            },
            || Box::new(CombSort),
        );

        self.register(
            SorterDescriptor {
                id: "pigeonhole",
                name: "Pigeonhole Sort",
                description: "Counts values into one hole per integer in the range",
                category: SorterCategory::Distribution,
                complexity: "O(n + range)",
                stable: true,
            },
            || Box::new(PigeonholeSort),
        );
    }

    fn register(&mut self, descriptor: SorterDescriptor, factory: SorterFactory) {
        self.entries.push(RegistryEntry {
            descriptor,
            factory,
        });
    }

    /// Returns descriptors for all registered sorters, in registration order.
    pub fn all_sorters(&self) -> Vec<&SorterDescriptor> {
        self.entries.iter().map(|e| &e.descriptor).collect()
    }

    /// Returns descriptors for sorters in a specific category.
    pub fn sorters_in_category(&self, category: SorterCategory) -> Vec<&SorterDescriptor> {
        self.entries
            .iter()
            .filter(|e| e.descriptor.category == category)
            .map(|e| &e.descriptor)
            .collect()
    }

    /// Get a descriptor by sorter id.
    pub fn get(&self, id: &str) -> Option<&SorterDescriptor> {
        self.entries
            .iter()
            .find(|e| e.descriptor.id == id)
            .map(|e| &e.descriptor)
    }

    /// Create a sorter instance by id. Returns `None` for unknown ids.
    pub fn create(&self, id: &str) -> Option<Box<dyn Sorter>> {
        self.entries
            .iter()
            .find(|e| e.descriptor.id == id)
            .map(|e| (e.factory)())
    }

    /// Id selected when nothing else is configured.
    pub fn default_id(&self) -> &'static str {
        self.entries.first().map_or("bubble", |e| e.descriptor.id)
    }

    /// All registered ids, in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.descriptor.id).collect()
    }

    /// Returns the number of registered sorters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no sorters are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::{MemoryVisualizer, ObservableArray, SharedConfig, Silence};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_registry_creation() {
        let registry = SorterRegistry::new();
        assert_eq!(registry.len(), 10);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_registration_order() {
        let registry = SorterRegistry::new();
        assert_eq!(
            registry.ids(),
            vec![
                "bubble",
                "merge",
                "insertion",
                "selection",
                "quick",
                "heap",
                "radix",
                "shell",
                "comb",
                "pigeonhole",
            ]
        );
        assert_eq!(registry.default_id(), "bubble");
    }

    #[test]
    fn test_get_sorter() {
        let registry = SorterRegistry::new();
        let heap = registry.get("heap").unwrap();
        assert_eq!(heap.name, "Heap Sort");
        assert_eq!(heap.category, SorterCategory::Selection);
        assert!(!heap.stable);
        assert!(registry.get("bogo").is_none());
        assert!(registry.create("bogo").is_none());
    }

    #[test]
    fn test_sorters_by_category() {
        let registry = SorterRegistry::new();
        assert_eq!(registry.sorters_in_category(SorterCategory::Exchange).len(), 3);
        assert_eq!(registry.sorters_in_category(SorterCategory::Selection).len(), 2);
        assert_eq!(registry.sorters_in_category(SorterCategory::Insertion).len(), 2);
        assert_eq!(registry.sorters_in_category(SorterCategory::Merge).len(), 1);
        assert_eq!(registry.sorters_in_category(SorterCategory::Distribution).len(), 2);
    }

    #[test]
    fn test_all_sorters_can_be_created_and_sort() {
        let registry = SorterRegistry::new();
        for descriptor in registry.all_sorters() {
            let sorter = registry.create(descriptor.id).unwrap();
            let mut array = ObservableArray::new(
                Box::new(MemoryVisualizer::new(vec![9, 3, 7, 3, 1])),
                Box::new(Silence),
                Arc::new(SharedConfig::new(Duration::ZERO)),
            );
            sorter.sort(&mut array).unwrap();
            assert_eq!(
                array.visualizer().snapshot().unwrap(),
                vec![1, 3, 3, 7, 9],
                "{} did not sort",
                descriptor.id
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = SorterRegistry::new();
        let mut ids = registry.ids();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), registry.len());
    }
}
