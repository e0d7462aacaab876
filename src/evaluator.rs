use std::collections::HashMap;

use crate::functions::{self, calculus};
use crate::syntax::{BinaryOperator, Expr, UnaryOperator};
use crate::value::Value;
use crate::CalcError;

/// Upper bound on nested `der`/`int` calls. The helpers re-enter the
/// evaluator once per sample point, so nesting compounds the cost
/// multiplicatively; past this depth evaluation fails instead of running
/// effectively forever.
pub const MAX_CALCULUS_DEPTH: usize = 16;

/// Evaluate a parsed expression against a read-only variable environment.
///
/// This is the sandboxing boundary: the match below enumerates every tree
/// shape that may execute, and every call name must resolve to one of the
/// two calculus operators or a registry entry.
pub fn evaluate(
  expr: &Expr,
  environment: &HashMap<String, Value>,
) -> Result<Value, CalcError> {
  evaluate_at_depth(expr, environment, 0)
}

pub(crate) fn evaluate_at_depth(
  expr: &Expr,
  environment: &HashMap<String, Value>,
  depth: usize,
) -> Result<Value, CalcError> {
  match expr {
    Expr::Number(value) => Ok(*value),
    Expr::Variable(name) => environment
      .get(name)
      .copied()
      .or_else(|| functions::constant(name))
      .ok_or_else(|| {
        CalcError::EvaluationError(format!("invalid variable: {name}"))
      }),
    Expr::UnaryOp { op, operand } => {
      let value = evaluate_at_depth(operand, environment, depth)?;
      Ok(match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Minus => -value,
      })
    }
    Expr::BinaryOp { op, left, right } => {
      let lhs = evaluate_at_depth(left, environment, depth)?;
      let rhs = evaluate_at_depth(right, environment, depth)?;
      apply_binary(*op, lhs, rhs)
    }
    Expr::FunctionCall { name, args } => match name.as_str() {
      // der(expr, point): the sub-expression is not evaluated in place; it
      // becomes the one-variable function the helper samples around `point`.
      "der" => {
        if args.len() != 2 {
          return Err(CalcError::EvaluationError(
            "der expects exactly 2 arguments: der(expr, point)".into(),
          ));
        }
        let point = evaluate_at_depth(&args[1], environment, depth)?;
        calculus::derivative(&args[0], point, depth)
      }
      // int(expr, a, b): definite integral of the held sub-expression.
      "int" => {
        if args.len() != 3 {
          return Err(CalcError::EvaluationError(
            "int expects exactly 3 arguments: int(expr, a, b)".into(),
          ));
        }
        let lower = evaluate_at_depth(&args[1], environment, depth)?;
        let upper = evaluate_at_depth(&args[2], environment, depth)?;
        calculus::integral(&args[0], lower, upper, depth)
      }
      _ => {
        let Some(builtin) = functions::lookup(name) else {
          return Err(CalcError::EvaluationError(format!(
            "function not allowed: {name}"
          )));
        };
        if args.len() != builtin.arity {
          return Err(CalcError::EvaluationError(format!(
            "{name} expects exactly {} argument(s), got {}",
            builtin.arity,
            args.len()
          )));
        }
        let arg = evaluate_at_depth(&args[0], environment, depth)?;
        (builtin.apply)(arg).map_err(|e| {
          CalcError::EvaluationError(format!("error in math function: {e}"))
        })
      }
    },
  }
}

fn apply_binary(
  op: BinaryOperator,
  lhs: Value,
  rhs: Value,
) -> Result<Value, CalcError> {
  match op {
    BinaryOperator::Add => Ok(lhs + rhs),
    BinaryOperator::Subtract => Ok(lhs - rhs),
    BinaryOperator::Multiply => Ok(lhs * rhs),
    BinaryOperator::Divide => Ok(lhs / rhs),
    BinaryOperator::Power => Ok(lhs.pow(rhs)),
    BinaryOperator::FloorDivide => {
      lhs.floor_div(rhs).map_err(CalcError::EvaluationError)
    }
    BinaryOperator::Modulo => lhs.modulo(rhs).map_err(CalcError::EvaluationError),
  }
}
