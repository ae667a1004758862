//! LSD radix sort.

use sortviz_core::{ObservableArray, SortError, Sorter, Value, VariableTrace};

const RADIX: Value = 10;

/// Stable base-10 counting sort per digit, least significant first.
///
/// The maximum is found by a read-only scan and digits are bucketed in
/// local storage, so the run performs no counted comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadixSort;

impl RadixSort {
    fn max_value(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<Value, SortError> {
        let mut max = array.get(0)?;
        vars.set("max", max);
        for i in 1..array.len() {
            let value = array.get(i)?;
            if value > max {
                max = value;
                vars.set("max", max);
            }
        }
        Ok(max)
    }

    fn counting_pass(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
        exp: Value,
    ) -> Result<(), SortError> {
        let n = array.len();
        let digit = |v: Value| ((v / exp) % RADIX) as usize;

        let mut count = [0usize; RADIX as usize];
        for i in 0..n {
            count[digit(array.get(i)?)] += 1;
        }
        for d in 1..count.len() {
            count[d] += count[d - 1];
        }

        let mut output: Vec<Value> = vec![0; n];
        for i in (0..n).rev() {
            let value = array.get(i)?;
            let slot = &mut count[digit(value)];
            *slot -= 1;
            output[*slot] = value;
        }
        vars.set("output", output.as_slice());

        for (i, &value) in output.iter().enumerate() {
            array.set(i, value)?;
        }
        vars.delete("output");
        Ok(())
    }
}

impl Sorter for RadixSort {
    fn sort_traced(
        &self,
        array: &mut ObservableArray,
        vars: &mut VariableTrace<'_>,
    ) -> Result<(), SortError> {
        if array.is_empty() {
            return Ok(());
        }
        let max = self.max_value(array, vars)?;

        let mut exp: Value = 1;
        while max / exp > 0 {
            vars.set("exp", exp);
            self.counting_pass(array, vars, exp)?;
            match exp.checked_mul(RADIX) {
                Some(next) => exp = next,
                None => break,
            }
        }
        vars.delete("exp");
        vars.delete("max");
        Ok(())
    }
}
