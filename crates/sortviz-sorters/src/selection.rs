//! Selection sort.

use sortviz_core::{CompareOp, ObservableArray, SortError, Sorter, VariableTrace};

/// Finds the minimum of the unsorted suffix and swaps it to the front.
///
/// The swap is issued even when the minimum is already in place, so every
/// pass costs exactly one swap.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        let n = array.len();
        for i in 0..n.saturating_sub(1) {
            vars.set("i", i);
            let mut min_index = i;
            vars.set("min_index", min_index);
            for j in i + 1..n {
                vars.set("j", j);
                if array.compare(j, CompareOp::Lt, min_index)? {
                    min_index = j;
                    vars.set("min_index", min_index);
                }
            }
            vars.delete("j");
            array.swap(i, min_index)?;
            vars.delete("min_index");
        }
        vars.delete("i");
        Ok(())
    }
}
