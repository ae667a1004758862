//! Comparison operators.

use crate::error::ParseOperatorError;
use std::fmt;
use std::str::FromStr;

/// Closed set of comparison operators understood by the engine.
///
/// Unknown symbols are rejected when parsing, so an engine call can never
/// receive an operator it does not know how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `!=`
    Ne,
}

impl CompareOp {
    /// All operators.
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Gt,
        CompareOp::Ge,
        CompareOp::Lt,
        CompareOp::Le,
        CompareOp::Eq,
        CompareOp::Ne,
    ];

    /// Source symbol, as shown in action labels.
    pub const fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
        }
    }

    /// Evaluate `a <op> b`.
    #[inline]
    pub fn evaluate<T: PartialOrd>(&self, a: T, b: T) -> bool {
        match self {
            CompareOp::Gt => a > b,
            CompareOp::Ge => a >= b,
            CompareOp::Lt => a < b,
            CompareOp::Le => a <= b,
            CompareOp::Eq => a == b,
            CompareOp::Ne => a != b,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CompareOp {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompareOp::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| ParseOperatorError(s.to_string()))
    }
}

impl TryFrom<&str> for CompareOp {
    type Error = ParseOperatorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_every_operator() {
        assert!(CompareOp::Gt.evaluate(3, 2));
        assert!(!CompareOp::Gt.evaluate(2, 2));
        assert!(CompareOp::Ge.evaluate(2, 2));
        assert!(CompareOp::Lt.evaluate(1, 2));
        assert!(!CompareOp::Lt.evaluate(2, 2));
        assert!(CompareOp::Le.evaluate(2, 2));
        assert!(CompareOp::Eq.evaluate(5, 5));
        assert!(CompareOp::Ne.evaluate(5, 6));
    }

    #[test]
    fn symbols_parse_back() {
        for op in CompareOp::ALL {
            assert_eq!(op.symbol().parse::<CompareOp>(), Ok(op));
        }
    }

    #[test]
    fn unknown_symbol_fails_at_construction() {
        let err = CompareOp::try_from("=>").unwrap_err();
        assert_eq!(err, ParseOperatorError("=>".to_string()));
        assert!("===".parse::<CompareOp>().is_err());
        assert!("".parse::<CompareOp>().is_err());
    }
}
