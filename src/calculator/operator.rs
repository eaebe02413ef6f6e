// src/calculator/operator.rs
// Closed set of supported operators

use std::fmt;
use std::str::FromStr;

use super::error::CalcError;

/// How many operands an operator consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// Arithmetic operator selected by the `op` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Sqrt,
    Abs,
    Floor,
    Ceil,
}

impl Operator {
    /// Every supported operator, binary ones first
    pub const ALL: [Operator; 10] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::Pow,
        Operator::Sqrt,
        Operator::Abs,
        Operator::Floor,
        Operator::Ceil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::Mod => "mod",
            Operator::Pow => "pow",
            Operator::Sqrt => "sqrt",
            Operator::Abs => "abs",
            Operator::Floor => "floor",
            Operator::Ceil => "ceil",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operator::Sqrt | Operator::Abs | Operator::Floor | Operator::Ceil => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    pub fn is_binary(&self) -> bool {
        self.arity() == Arity::Binary
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    // Matching is exact: "ADD" is not "add"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CalcError::UnknownOperator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_operator() {
        for op in Operator::ALL {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Add".parse::<Operator>().unwrap_err();
        assert_eq!(err, CalcError::UnknownOperator("Add".to_string()));
    }

    #[test]
    fn test_arity() {
        let unary: Vec<_> = Operator::ALL
            .iter()
            .filter(|op| op.arity() == Arity::Unary)
            .map(|op| op.as_str())
            .collect();
        assert_eq!(unary, vec!["sqrt", "abs", "floor", "ceil"]);
        assert!(Operator::Pow.is_binary());
        assert!(!Operator::Floor.is_binary());
    }

    #[test]
    fn test_display_matches_token() {
        assert_eq!(Operator::Mod.to_string(), "mod");
    }
}
