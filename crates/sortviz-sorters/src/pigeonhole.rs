//! Pigeonhole sort.

use sortviz_core::{ObservableArray, SortError, Sorter, Value, VariableTrace};

/// Counts every value into one hole per integer in `min..=max`, then
/// rewrites the array hole by hole.
///
/// Min and max come from a read-only scan; the run performs no counted
/// comparisons. Memory grows with the value range, not the length.
#[derive(Debug, Clone, Copy, Default)]
pub struct PigeonholeSort;

impl Sorter for PigeonholeSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        let n = array.len();
        if n == 0 {
            return Ok(());
        }

        let first = array.get(0)?;
        let (mut min, mut max) = (first, first);
        for i in 1..n {
            let value = array.get(i)?;
            min = min.min(value);
            max = max.max(value);
        }
        vars.set("min", min);
        vars.set("max", max);

        let range = (max - min) as usize + 1;
        let mut holes = vec![0usize; range];
        for i in 0..n {
            holes[(array.get(i)? - min) as usize] += 1;
        }

        let mut i = 0;
        for (offset, &count) in holes.iter().enumerate() {
            let value = min + offset as Value;
            for _ in 0..count {
                vars.set("i", i);
                array.set(i, value)?;
                i += 1;
            }
        }
        vars.delete("i");
        vars.delete("max");
        vars.delete("min");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::run;

    #[test]
    fn counts_reads_and_writes() {
        let (sorted, stats) = run(&PigeonholeSort, &[8, 3, 5, 3]);
        assert_eq!(sorted, vec![3, 3, 5, 8]);
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.reads, 8);
        assert_eq!(stats.writes, 4);
    }

    #[test]
    fn single_hole() {
        let (sorted, _) = run(&PigeonholeSort, &[4, 4, 4]);
        assert_eq!(sorted, vec![4, 4, 4]);
    }
}
