//! Bubble sort.

use sortviz_core::{CompareOp, ObservableArray, SortError, Sorter, VariableTrace};

/// Adjacent compare-and-swap passes; each pass parks the largest remaining
/// element at the end of the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        let n = array.len();
        for i in 0..n {
            vars.set("i", i);
            for j in 0..n - i - 1 {
                vars.set("j", j);
                if array.compare(j, CompareOp::Gt, j + 1)? {
                    array.swap(j, j + 1)?;
                }
            }
            vars.delete("j");
        }
        vars.delete("i");
        Ok(())
    }
}
