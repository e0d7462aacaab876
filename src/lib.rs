use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod evaluator;
pub mod format;
pub mod functions;
pub mod syntax;
pub mod value;

pub use evaluator::evaluate as evaluate_expr;
pub use format::format_value;
pub use syntax::Expr;
pub use value::Value;

#[derive(Parser)]
#[grammar = "calculator.pest"]
pub struct CalcParser;

#[derive(Error, Debug)]
pub enum CalcError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Evaluation error: {0}")]
  EvaluationError(String),
  #[error("evaluation budget exceeded: der/int calls nested deeper than {0}")]
  RecursionLimit(usize),
}

/// Interpretation of trigonometric arguments and inverse-trig results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
  Rad,
  Deg,
}

// Process-wide angle mode, read by every angle-sensitive builtin at call
// time. Relaxed ordering is enough: the contract is only that a mode change
// applies to evaluations that start after it.
static ANGLE_MODE: AtomicU8 = AtomicU8::new(0);

pub fn angle_mode() -> AngleMode {
  if ANGLE_MODE.load(Ordering::Relaxed) == 0 {
    AngleMode::Rad
  } else {
    AngleMode::Deg
  }
}

/// Switch the process-wide angle mode and return the now-current mode.
pub fn set_angle_mode(mode: AngleMode) -> AngleMode {
  let raw = match mode {
    AngleMode::Rad => 0,
    AngleMode::Deg => 1,
  };
  ANGLE_MODE.store(raw, Ordering::Relaxed);
  mode
}

impl FromStr for AngleMode {
  type Err = CalcError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_uppercase().as_str() {
      "RAD" => Ok(AngleMode::Rad),
      "DEG" => Ok(AngleMode::Deg),
      other => Err(CalcError::EvaluationError(format!(
        "invalid angle mode: {other} (expected RAD or DEG)"
      ))),
    }
  }
}

impl std::fmt::Display for AngleMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      AngleMode::Rad => write!(f, "RAD"),
      AngleMode::Deg => write!(f, "DEG"),
    }
  }
}

/// Rewrite a bare lowercase `i` into the canonical imaginary suffix `j`, so
/// `3+4i`, `2*i` and `3+4j` all parse to the same tree. An `i` is rewritten
/// only when its neighbours are non-letters, which leaves identifiers like
/// `sin` or `point_i` untouched.
pub fn normalize(input: &str) -> String {
  fn letter_like(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
  }
  let chars: Vec<char> = input.chars().collect();
  let mut out = String::with_capacity(input.len());
  for (idx, &c) in chars.iter().enumerate() {
    let prev_letter = idx > 0 && letter_like(chars[idx - 1]);
    let next_letter = chars.get(idx + 1).is_some_and(|n| letter_like(*n));
    if c == 'i' && !prev_letter && !next_letter {
      out.push('j');
    } else {
      out.push(c);
    }
  }
  out
}

/// Parse an expression into its restricted syntax tree.
pub fn parse(input: &str) -> Result<Expr, CalcError> {
  if input.trim().is_empty() {
    return Err(CalcError::EmptyInput);
  }
  let normalized = normalize(input);
  let mut pairs =
    CalcParser::parse(Rule::Program, &normalized).map_err(Box::new)?;
  let expression = pairs.next().ok_or(CalcError::EmptyInput)?;
  syntax::build_expr(expression.into_inner())
}

/// Evaluate an expression with an empty variable environment.
pub fn evaluate(expression: &str) -> Result<Value, CalcError> {
  evaluate_with(expression, &HashMap::new())
}

/// Evaluate an expression against a set of named variable bindings.
pub fn evaluate_with(
  expression: &str,
  variables: &HashMap<String, Value>,
) -> Result<Value, CalcError> {
  let tree = parse(expression)?;
  evaluator::evaluate(&tree, variables)
}

/// Parse, evaluate and format in one step: the whole pipeline for one
/// request, as the transport layer calls it.
pub fn interpret(expression: &str) -> Result<String, CalcError> {
  Ok(format::format_value(&evaluate(expression)?))
}
