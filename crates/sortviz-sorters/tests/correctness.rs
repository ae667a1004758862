//! Every algorithm sorts, on edge-case lengths and seeded random inputs.

mod common;

use common::{all_sorters, run, seeded_values};
use sortviz_core::Value;

fn sorted(values: &[Value]) -> Vec<Value> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

#[test]
fn trivial_lengths() {
    for (name, sorter) in all_sorters() {
        for input in [vec![], vec![7], vec![2, 1], vec![1, 2], vec![4, 4]] {
            let (out, _) = run(sorter.as_ref(), &input);
            assert_eq!(out, sorted(&input), "{name} on {input:?}");
        }
    }
}

#[test]
fn seeded_random_with_duplicates() {
    for (name, sorter) in all_sorters() {
        for (seed, len) in [(1, 10), (7, 37), (42, 100), (1234, 200)] {
            // Values in 1..=25 guarantee duplicates at these lengths.
            let input = seeded_values(seed, len, 25);
            let (out, stats) = run(sorter.as_ref(), &input);
            assert_eq!(out, sorted(&input), "{name} seed={seed} len={len}");
            assert!(
                stats.accesses() >= len as u64,
                "{name} touched fewer cells than it sorted: {stats}"
            );
        }
    }
}

#[test]
fn distribution_sorts_never_compare() {
    for (name, sorter) in all_sorters() {
        if name != "radix" && name != "pigeonhole" {
            continue;
        }
        let (_, stats) = run(sorter.as_ref(), &seeded_values(99, 150, 100));
        assert_eq!(stats.comparisons, 0, "{name}");
        assert_eq!(stats.swaps, 0, "{name}");
    }
}

#[test]
fn already_sorted_and_reversed() {
    let ascending: Vec<Value> = (1..=50).collect();
    let descending: Vec<Value> = (1..=50).rev().collect();
    for (name, sorter) in all_sorters() {
        assert_eq!(run(sorter.as_ref(), &ascending).0, ascending, "{name}");
        assert_eq!(run(sorter.as_ref(), &descending).0, ascending, "{name}");
    }
}
