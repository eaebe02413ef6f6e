// src/calculator/error.rs
// Typed failures of a single evaluation

use thiserror::Error;

/// Error category, stable across message wording changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    MissingOperand,
    DivisionByZero,
    ModuloByZero,
    InvalidDomain,
    UnknownOperator,
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::MissingOperand => "missing-operand",
            ErrorCategory::DivisionByZero => "division-by-zero",
            ErrorCategory::ModuloByZero => "modulo-by-zero",
            ErrorCategory::InvalidDomain => "invalid-domain",
            ErrorCategory::UnknownOperator => "unknown-operator",
            ErrorCategory::Internal => "internal",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Operator '{0}' requires operand b")]
    MissingOperand(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Modulo by zero")]
    ModuloByZero,

    #[error("Cannot take square root of negative number")]
    NegativeSqrt,

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("{0}")]
    Internal(String),
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::MissingOperand(_) => ErrorCategory::MissingOperand,
            CalcError::DivisionByZero => ErrorCategory::DivisionByZero,
            CalcError::ModuloByZero => ErrorCategory::ModuloByZero,
            CalcError::NegativeSqrt => ErrorCategory::InvalidDomain,
            CalcError::UnknownOperator(_) => ErrorCategory::UnknownOperator,
            CalcError::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// True for anything caused by the caller's input rather than a computation fault
    pub fn is_client_error(&self) -> bool {
        self.category() != ErrorCategory::Internal
    }
}
