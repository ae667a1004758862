//! Merge sort.

use sortviz_core::{CompareOp, ObservableArray, SortError, Sorter, Value, VariableTrace};

/// Top-down merge sort.
///
/// Each merge copies both halves into scratch buffers `L` and `R` with
/// reads, compares their heads with counted value comparisons and writes
/// the winner back.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl MergeSort {
    fn merge_sort(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
        l: usize,
        r: usize,
    ) -> Result<(), SortError> {
        if l < r {
            let m = (l + r) / 2;
            self.merge_sort(array, vars, l, m)?;
            self.merge_sort(array, vars, m + 1, r)?;
            self.merge(array, vars, l, m, r)?;
        }
        Ok(())
    }

    fn merge(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
        l: usize,
        m: usize,
        r: usize,
    ) -> Result<(), SortError> {
        let mut left: Vec<Value> = Vec::with_capacity(m - l + 1);
        for k in l..=m {
            left.push(array.get(k)?);
        }
        vars.set("L", left.as_slice());
        let mut right: Vec<Value> = Vec::with_capacity(r - m);
        for k in m + 1..=r {
            right.push(array.get(k)?);
        }
        vars.set("R", right.as_slice());

        let (mut i, mut j, mut k) = (0, 0, l);
        while i < left.len() && j < right.len() {
            if array.compare_values(left[i], CompareOp::Le, right[j])? {
                array.set(k, left[i])?;
                i += 1;
            } else {
                array.set(k, right[j])?;
                j += 1;
            }
            k += 1;
        }
        for &value in left[i..].iter().chain(&right[j..]) {
            array.set(k, value)?;
            k += 1;
        }

        vars.delete("L");
        vars.delete("R");
        Ok(())
    }
}

impl Sorter for MergeSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        let n = array.len();
        if n > 1 {
            self.merge_sort(array, vars, 0, n - 1)?;
        }
        Ok(())
    }
}
