//! In-memory [`Visualizer`] backing store.
//!
//! Holds the bars as a plain vector together with the current highlight of
//! each bar. Terminal front ends render from it; tests assert against it.

use crate::error::PortError;
use crate::port::{StyleKind, Value, Visualizer};

/// Vector-backed visualizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryVisualizer {
    values: Vec<Value>,
    styles: Vec<Option<StyleKind>>,
}

impl MemoryVisualizer {
    /// Create a visualizer showing `values`.
    pub fn new(values: Vec<Value>) -> Self {
        let styles = vec![None; values.len()];
        Self { values, styles }
    }

    /// Current contents.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Highlight of one bar, if any.
    pub fn style(&self, index: usize) -> Option<StyleKind> {
        self.styles.get(index).copied().flatten()
    }

    /// Indices that currently carry a highlight.
    pub fn highlighted(&self) -> Vec<(usize, StyleKind)> {
        self.styles
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|s| (i, s)))
            .collect()
    }

    fn check(&self, index: usize) -> Result<(), PortError> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(PortError::index_out_of_range(index, self.values.len()))
        }
    }
}

impl Visualizer for MemoryVisualizer {
    fn value(&self, index: usize) -> Result<Value, PortError> {
        self.check(index)?;
        Ok(self.values[index])
    }

    fn set_value(&mut self, index: usize, value: Value) -> Result<(), PortError> {
        self.check(index)?;
        self.values[index] = value;
        Ok(())
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn set_style(&mut self, index: usize, style: StyleKind) -> Result<(), PortError> {
        self.check(index)?;
        self.styles[index] = Some(style);
        Ok(())
    }

    fn clear_styles(&mut self) -> Result<(), PortError> {
        self.styles.fill(None);
        Ok(())
    }

    fn rebuild(&mut self, values: &[Value]) {
        self.values = values.to_vec();
        self.styles = vec![None; values.len()];
    }

    fn snapshot(&self) -> Result<Vec<Value>, PortError> {
        Ok(self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_is_a_port_error() {
        let mut vis = MemoryVisualizer::new(vec![1, 2]);
        assert!(vis.value(2).is_err());
        assert!(vis.set_value(5, 1).is_err());
        assert!(vis.set_style(2, StyleKind::Read).is_err());
    }

    #[test]
    fn rebuild_resets_styles() {
        let mut vis = MemoryVisualizer::new(vec![4, 5, 6]);
        vis.set_style(1, StyleKind::SwapA).unwrap();
        assert_eq!(vis.highlighted(), vec![(1, StyleKind::SwapA)]);

        vis.rebuild(&[9, 8]);
        assert_eq!(vis.values(), &[9, 8]);
        assert!(vis.highlighted().is_empty());
    }

    #[test]
    fn clear_styles_removes_all() {
        let mut vis = MemoryVisualizer::new(vec![1, 2, 3]);
        vis.set_style(0, StyleKind::CompareA).unwrap();
        vis.set_style(2, StyleKind::CompareB).unwrap();
        vis.clear_styles().unwrap();
        assert_eq!(vis.style(0), None);
        assert_eq!(vis.style(2), None);
    }
}
