// src/api/types.rs
// Request/response shapes for the calculator endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::calculator::Calculation;

/// Query string of `GET /api/calc`
#[derive(Debug, Clone, Deserialize)]
pub struct CalcQuery {
    pub a: f64,
    #[serde(default)]
    pub b: Option<f64>,
    pub op: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalcResponse {
    pub operation: String,
    pub a: f64,
    pub b: Option<f64>,
    pub result: Value,
}

impl From<Calculation> for CalcResponse {
    fn from(calc: Calculation) -> Self {
        Self {
            operation: calc.operator.as_str().to_string(),
            a: calc.a,
            b: calc.b,
            result: display_number(calc.value),
        }
    }
}

/// Render a value for output: whole numbers as exact integers of any size,
/// NaN and infinities as null.
pub fn display_number(value: f64) -> Value {
    if !value.is_finite() {
        return Value::Null;
    }
    if value.fract() == 0.0 {
        // `{:.0}` prints every digit of a whole f64; +0.0 drops the sign of -0.0
        if let Ok(number) = format!("{:.0}", value + 0.0).parse::<Number>() {
            return Value::Number(number);
        }
    }
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}
