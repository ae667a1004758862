//! Insertion sort.

use sortviz_core::{CompareOp, ObservableArray, SortError, Sorter, VariableTrace};

/// Lifts each element out, shifts larger predecessors one slot right, then
/// drops it into the gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        for i in 0..array.len() {
            vars.set("i", i);
            let mut j = i;
            vars.set("j", j);
            let x = array.get(i)?;
            vars.set("x", x);

            while j > 0 && array.compare_with_val(j - 1, CompareOp::Gt, x)? {
                let shifted = array.get(j - 1)?;
                array.set(j, shifted)?;
                j -= 1;
                vars.set("j", j);
            }
            array.set(j, x)?;

            vars.delete("x");
            vars.delete("j");
        }
        vars.delete("i");
        Ok(())
    }
}
