// src/calculator/evaluator.rs
// Validate operands and dispatch a single operation

use tracing::debug;

use super::error::CalcError;
use super::operator::Operator;

/// Outcome of one successful evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operator: Operator,
    pub a: f64,
    /// Echoed as supplied, even for unary operators that ignore it
    pub b: Option<f64>,
    pub value: f64,
}

/// Evaluate `op` on `a` and optional `b`.
///
/// Unknown operators, a missing `b` for binary operators and domain violations
/// come back as [`CalcError`]. Non-finite operands and non-finite results are
/// [`CalcError::Internal`], except the NaN of `pow` with a negative base and a
/// fractional exponent, which is returned as the value.
pub fn evaluate(op: &str, a: f64, b: Option<f64>) -> Result<Calculation, CalcError> {
    let operator: Operator = op.parse()?;

    let value = if operator.is_binary() {
        let rhs = b.ok_or_else(|| CalcError::MissingOperand(operator.as_str().to_string()))?;
        check_finite(a, b)?;
        apply_binary(operator, a, rhs)?
    } else {
        check_finite(a, b)?;
        apply_unary(operator, a)?
    };

    if value.is_infinite() {
        return Err(CalcError::Internal("Numerical result out of range".to_string()));
    }
    if value.is_nan() && operator != Operator::Pow {
        return Err(CalcError::Internal("Math domain error".to_string()));
    }

    debug!(op = operator.as_str(), a, ?b, value, "evaluated");
    Ok(Calculation {
        operator,
        a,
        b,
        value,
    })
}

// Operands are echoed in the response, so they must be representable in JSON
fn check_finite(a: f64, b: Option<f64>) -> Result<(), CalcError> {
    if a.is_finite() && b.is_none_or(f64::is_finite) {
        Ok(())
    } else {
        Err(CalcError::Internal("Operands must be finite numbers".to_string()))
    }
}

fn apply_binary(operator: Operator, a: f64, b: f64) -> Result<f64, CalcError> {
    let value = match operator {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operator::Mod => {
            if b == 0.0 {
                return Err(CalcError::ModuloByZero);
            }
            floored_rem(a, b)
        }
        Operator::Pow => a.powf(b),
        other => {
            return Err(CalcError::Internal(format!("'{other}' is not a binary operator")));
        }
    };

    Ok(value)
}

fn apply_unary(operator: Operator, a: f64) -> Result<f64, CalcError> {
    let value = match operator {
        Operator::Sqrt => {
            if a < 0.0 {
                return Err(CalcError::NegativeSqrt);
            }
            a.sqrt()
        }
        Operator::Abs => a.abs(),
        Operator::Floor => a.floor(),
        Operator::Ceil => a.ceil(),
        other => {
            return Err(CalcError::Internal(format!("'{other}' is not a unary operator")));
        }
    };

    Ok(value)
}

/// Remainder whose sign follows the divisor.
fn floored_rem(a: f64, b: f64) -> f64 {
    let rem = a % b;
    if rem == 0.0 {
        0.0_f64.copysign(b)
    } else if (rem < 0.0) != (b < 0.0) {
        rem + b
    } else {
        rem
    }
}
