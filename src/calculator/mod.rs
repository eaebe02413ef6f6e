//! Operation evaluator
//!
//! Pure, stateless dispatch from an operator token and one or two operands to
//! a value or a typed error. Safe to call from any number of requests at once.

pub mod error;
pub mod evaluator;
pub mod operator;

pub use error::{CalcError, ErrorCategory};
pub use evaluator::{Calculation, evaluate};
pub use operator::{Arity, Operator};
