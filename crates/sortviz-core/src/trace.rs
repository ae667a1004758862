//! Live-rendered scratch variables.
//!
//! Sorters keep their loop indices, pivots and temporary buffers in a
//! [`VariableTrace`] so a panel can show them changing as the run proceeds.
//! Every write through the trace re-renders that one variable; dropping the
//! trace clears the panel.

use crate::port::Value;
use std::fmt;

/// A traced variable's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceValue {
    /// Integer, typically an index or array element.
    Number(i64),
    /// Free text.
    Text(String),
    /// Boolean flag.
    Flag(bool),
    /// Scratch buffer of array values.
    Sequence(Vec<Value>),
}

impl TraceValue {
    /// Integer payload, if this is a number.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            TraceValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for TraceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceValue::Number(n) => write!(f, "{n}"),
            TraceValue::Text(s) => write!(f, "\"{s}\""),
            TraceValue::Flag(b) => write!(f, "{b}"),
            TraceValue::Sequence(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i64> for TraceValue {
    fn from(n: i64) -> Self {
        TraceValue::Number(n)
    }
}

impl From<u32> for TraceValue {
    fn from(n: u32) -> Self {
        TraceValue::Number(i64::from(n))
    }
}

impl From<u64> for TraceValue {
    fn from(n: u64) -> Self {
        TraceValue::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<usize> for TraceValue {
    fn from(n: usize) -> Self {
        TraceValue::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<bool> for TraceValue {
    fn from(b: bool) -> Self {
        TraceValue::Flag(b)
    }
}

impl From<&str> for TraceValue {
    fn from(s: &str) -> Self {
        TraceValue::Text(s.to_string())
    }
}

impl From<String> for TraceValue {
    fn from(s: String) -> Self {
        TraceValue::Text(s)
    }
}

impl From<Vec<Value>> for TraceValue {
    fn from(values: Vec<Value>) -> Self {
        TraceValue::Sequence(values)
    }
}

impl From<&[Value]> for TraceValue {
    fn from(values: &[Value]) -> Self {
        TraceValue::Sequence(values.to_vec())
    }
}

/// Display surface for traced variables.
pub trait TraceRenderer: Send {
    /// Show (or update) one variable.
    fn render(&mut self, name: &str, value: &TraceValue);

    /// Remove one variable.
    fn remove(&mut self, name: &str);

    /// Remove every variable.
    fn clear(&mut self);
}

/// Renderer that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl TraceRenderer for NullRenderer {
    fn render(&mut self, _name: &str, _value: &TraceValue) {}
    fn remove(&mut self, _name: &str) {}
    fn clear(&mut self) {}
}

/// Named-variable store that mirrors every mutation to a renderer.
///
/// Variables keep insertion order so a panel lists them the way the
/// algorithm introduced them.
pub struct VariableTrace<'r> {
    entries: Vec<(String, TraceValue)>,
    renderer: Option<&'r mut dyn TraceRenderer>,
}

impl<'r> VariableTrace<'r> {
    /// Start an empty trace on `renderer`, wiping whatever it showed before.
    pub fn new(renderer: &'r mut dyn TraceRenderer) -> Self {
        renderer.clear();
        Self {
            entries: Vec::new(),
            renderer: Some(renderer),
        }
    }

    /// A trace that renders nowhere.
    pub fn detached() -> Self {
        Self {
            entries: Vec::new(),
            renderer: None,
        }
    }

    /// Assign a variable and re-render it.
    pub fn set(&mut self, name: &str, value: impl Into<TraceValue>) {
        let value = value.into();
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.render(name, &value);
        }
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Read a variable, re-rendering it.
    ///
    /// Sequences may be edited in place by the caller after this returns a
    /// copy, so the display is refreshed on reads as well as writes.
    pub fn get(&mut self, name: &str) -> Option<TraceValue> {
        let value = self
            .entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())?;
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.render(name, &value);
        }
        Some(value)
    }

    /// Remove a variable. Returns `false` if it was not present.
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(pos) = self.entries.iter().position(|(n, _)| n == name) else {
            return false;
        };
        self.entries.remove(pos);
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.remove(name);
        }
        true
    }

    /// Number of live variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no variable is live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the live variables, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl Drop for VariableTrace<'_> {
    fn drop(&mut self) {
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.clear();
        }
    }
}

impl fmt::Debug for VariableTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableTrace")
            .field("entries", &self.entries)
            .field("attached", &self.renderer.is_some())
            .finish()
    }
}
