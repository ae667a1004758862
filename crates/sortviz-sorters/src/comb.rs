//! Comb sort.

use sortviz_core::{CompareOp, ObservableArray, SortError, Sorter, VariableTrace};

/// Bubble sort over a gap that shrinks by a factor of 1.3 each pass, ending
/// with plain adjacent passes until one makes no swap.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombSort;

/// `max(1, floor(gap / 1.3))` in integer arithmetic.
fn shrink(gap: usize) -> usize {
    (gap * 10 / 13).max(1)
}

impl Sorter for CombSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        let n = array.len();
        let mut gap = n;
        let mut swapped = true;

        while gap != 1 || swapped {
            gap = shrink(gap);
            swapped = false;
            vars.set("gap", gap);
            vars.set("swapped", swapped);

            let mut i = 0;
            while i + gap < n {
                vars.set("i", i);
                if array.compare(i + gap, CompareOp::Lt, i)? {
                    array.swap(i, i + gap)?;
                    swapped = true;
                    vars.set("swapped", swapped);
                }
                i += 1;
            }
        }
        vars.delete("i");
        vars.delete("swapped");
        vars.delete("gap");
        Ok(())
    }
}
