//! Quick sort with an XOR median-of-three pivot.
//!
//! The pivot rule reads the low, middle and high cells and picks:
//!
//! - `low` if exactly one of `low > mid`, `low > high` holds,
//! - otherwise `mid` if exactly one of `mid < low`, `mid < high` holds,
//! - otherwise `high`.
//!
//! On a three-way tie neither XOR fires, so the high endpoint wins. The
//! three value tests are plain reads, not counted comparisons.

use sortviz_core::{CompareOp, ObservableArray, SortError, Sorter, VariableTrace};

/// Recursive Lomuto-partition quick sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl QuickSort {
    /// Pick the pivot index for `low..=high`.
    pub fn find_pivot(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
        low: usize,
        high: usize,
    ) -> Result<usize, SortError> {
        let mid = (low + high) / 2;
        vars.set("mid_index", mid);

        let low_value = array.get(low)?;
        vars.set("low_value", low_value);
        let mid_value = array.get(mid)?;
        vars.set("mid_value", mid_value);
        let high_value = array.get(high)?;
        vars.set("high_value", high_value);

        let pivot = if (low_value > mid_value) ^ (low_value > high_value) {
            low
        } else if (mid_value < low_value) ^ (mid_value < high_value) {
            mid
        } else {
            high
        };

        vars.delete("low_value");
        vars.delete("mid_value");
        vars.delete("high_value");
        vars.delete("mid_index");
        Ok(pivot)
    }

    fn quick_sort(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
        low: usize,
        high: usize,
    ) -> Result<(), SortError> {
        if low >= high {
            return Ok(());
        }
        let pivot = self.find_pivot(array, vars, low, high)?;
        let pivot_index = self.partition(array, vars, low, high, pivot)?;
        vars.set("pivot_index", pivot_index);

        if pivot_index > 0 {
            self.quick_sort(array, vars, low, pivot_index - 1)?;
        }
        self.quick_sort(array, vars, pivot_index + 1, high)
    }

    fn partition(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
        low: usize,
        high: usize,
        pivot: usize,
    ) -> Result<usize, SortError> {
        let pivot_value = array.get(pivot)?;
        vars.set("pivot_value", pivot_value);
        array.swap(pivot, high)?;

        let mut i = low;
        vars.set("i", i);
        for j in low..high {
            vars.set("j", j);
            if array.compare_with_val(j, CompareOp::Le, pivot_value)? {
                array.swap(i, j)?;
                i += 1;
                vars.set("i", i);
            }
        }
        vars.delete("j");

        array.swap(i, high)?;
        vars.delete("pivot_value");
        vars.delete("i");
        Ok(i)
    }
}

impl Sorter for QuickSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        let n = array.len();
        if n > 1 {
            self.quick_sort(array, vars, 0, n - 1)?;
        }
        vars.delete("pivot_index");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{array, run};

    fn pivot_of(values: &[u32]) -> usize {
        let mut arr = array(values);
        let mut vars = VariableTrace::detached();
        QuickSort
            .find_pivot(&mut arr, &mut vars, 0, values.len() - 1)
            .unwrap()
    }

    #[test]
    fn three_way_tie_picks_high() {
        assert_eq!(pivot_of(&[5, 5, 5]), 2);
    }

    #[test]
    fn pivot_is_the_median() {
        assert_eq!(pivot_of(&[2, 9, 1]), 0);
        assert_eq!(pivot_of(&[1, 2, 3]), 1);
        assert_eq!(pivot_of(&[3, 9, 5]), 2);
    }

    #[test]
    fn pivot_reads_are_not_comparisons() {
        let mut arr = array(&[4, 8, 6]);
        let mut vars = VariableTrace::detached();
        QuickSort.find_pivot(&mut arr, &mut vars, 0, 2).unwrap();
        assert_eq!(arr.stats().reads, 3);
        assert_eq!(arr.stats().comparisons, 0);
        assert!(vars.is_empty());
    }

    #[test]
    fn sorts_all_equal() {
        let (sorted, _) = run(&QuickSort, &[5, 5, 5, 5, 5]);
        assert_eq!(sorted, vec![5; 5]);
    }
}
