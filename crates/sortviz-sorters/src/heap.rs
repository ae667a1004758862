//! Heap sort.

use sortviz_core::{CompareOp, ObservableArray, SortError, Sorter, VariableTrace};

/// Builds a max-heap in place, then repeatedly swaps the root behind the
/// shrinking heap and restores the heap property.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl HeapSort {
    fn sift_down(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
        n: usize,
        i: usize,
    ) -> Result<(), SortError> {
        let mut largest = i;
        vars.set("largest", largest);
        let l = 2 * i + 1;
        let r = 2 * i + 2;

        if l < n && array.compare(l, CompareOp::Gt, largest)? {
            largest = l;
            vars.set("largest", largest);
        }
        if r < n && array.compare(r, CompareOp::Gt, largest)? {
            largest = r;
            vars.set("largest", largest);
        }

        if largest != i {
            array.swap(i, largest)?;
            self.sift_down(array, vars, n, largest)?;
        }
        Ok(())
    }
}

impl Sorter for HeapSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        let n = array.len();
        vars.set("heap_size", n);
        for i in (0..n / 2).rev() {
            vars.set("i", i);
            self.sift_down(array, vars, n, i)?;
        }

        for end in (1..n).rev() {
            vars.set("i", end);
            array.swap(0, end)?;
            vars.set("heap_size", end);
            self.sift_down(array, vars, end, 0)?;
        }
        vars.delete("largest");
        vars.delete("heap_size");
        vars.delete("i");
        Ok(())
    }
}
