use std::collections::HashMap;

use crate::evaluator::{evaluate_at_depth, MAX_CALCULUS_DEPTH};
use crate::syntax::Expr;
use crate::value::Value;
use crate::CalcError;

const DERIVATIVE_STEP: f64 = 1e-5;
const INTEGRAL_SUBINTERVALS: usize = 1000;

/// Evaluate the held sub-expression as a one-variable function of `x`.
/// Each sample gets a fresh environment binding only the swept variable.
fn eval_at(expr: &Expr, x: Value, depth: usize) -> Result<Value, CalcError> {
  if depth > MAX_CALCULUS_DEPTH {
    return Err(CalcError::RecursionLimit(MAX_CALCULUS_DEPTH));
  }
  let environment = HashMap::from([("x".to_string(), x)]);
  evaluate_at_depth(expr, &environment, depth)
}

/// Central-difference derivative of `expr` at `point`:
/// `(f(x+h) - f(x-h)) / (2h)` with a fixed step.
pub fn derivative(
  expr: &Expr,
  point: Value,
  depth: usize,
) -> Result<Value, CalcError> {
  let h = Value::Real(DERIVATIVE_STEP);
  let above = eval_at(expr, point + h, depth + 1)?;
  let below = eval_at(expr, point - h, depth + 1)?;
  Ok((above - below) / Value::Real(2.0 * DERIVATIVE_STEP))
}

/// Composite-trapezoid definite integral of `expr` over `[lower, upper]`:
/// 1000 equal subintervals, endpoint weight 0.5, interior weight 1.0. The
/// 1001 sub-evaluations per call are the contract, not an accident; sums
/// propagate through complex arithmetic when the integrand leaves the real
/// line.
pub fn integral(
  expr: &Expr,
  lower: Value,
  upper: Value,
  depth: usize,
) -> Result<Value, CalcError> {
  let step = (upper - lower) / Value::Real(INTEGRAL_SUBINTERVALS as f64);
  let mut total = Value::Real(0.0);
  for i in 0..=INTEGRAL_SUBINTERVALS {
    let sample = lower + Value::Real(i as f64) * step;
    let weight = if i == 0 || i == INTEGRAL_SUBINTERVALS {
      0.5
    } else {
      1.0
    };
    total = total + Value::Real(weight) * eval_at(expr, sample, depth + 1)?;
  }
  Ok(total * step)
}
