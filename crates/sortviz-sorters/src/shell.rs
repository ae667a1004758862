//! Shell sort.

use sortviz_core::{CompareOp, ObservableArray, SortError, Sorter, VariableTrace};

/// Insertion sort over gapped subsequences, starting at `n / 2` and halving
/// the gap until it reaches one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSort;

impl Sorter for ShellSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        let n = array.len();
        let mut gap = n / 2;
        while gap > 0 {
            vars.set("gap", gap);
            for i in gap..n {
                vars.set("i", i);
                let temp = array.get(i)?;
                vars.set("temp", temp);

                let mut j = i;
                while j >= gap && array.compare_with_val(j - gap, CompareOp::Gt, temp)? {
                    let shifted = array.get(j - gap)?;
                    array.set(j, shifted)?;
                    j -= gap;
                }
                array.set(j, temp)?;
            }
            gap /= 2;
        }
        vars.delete("temp");
        vars.delete("i");
        vars.delete("gap");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::run;

    #[test]
    fn gaps_halve_to_one() {
        let (sorted, stats) = run(&ShellSort, &[4, 3, 2, 1]);
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        assert_eq!(stats.swaps, 0);
        // gap 2: one compare each for i=2,3; gap 1 over [2, 1, 4, 3]: 1 + 1 + 2.
        assert_eq!(stats.comparisons, 6);
    }
}
