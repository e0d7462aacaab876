use std::sync::LazyLock;

use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};

use crate::value::Value;
use crate::{CalcError, Rule};

/// One node of the restricted expression tree. This enum is closed: the
/// evaluator matches it exhaustively, so no tree shape outside this set can
/// ever be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Number(Value),
  Variable(String),
  UnaryOp {
    op: UnaryOperator,
    operand: Box<Expr>,
  },
  BinaryOp {
    op: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  FunctionCall {
    name: String,
    args: Vec<Expr>,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
  Plus,
  Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
  Add,
  Subtract,
  Multiply,
  Divide,
  FloorDivide,
  Modulo,
  Power,
}

impl UnaryOperator {
  pub fn as_str(self) -> &'static str {
    match self {
      UnaryOperator::Plus => "+",
      UnaryOperator::Minus => "-",
    }
  }
}

impl BinaryOperator {
  pub fn as_str(self) -> &'static str {
    match self {
      BinaryOperator::Add => "+",
      BinaryOperator::Subtract => "-",
      BinaryOperator::Multiply => "*",
      BinaryOperator::Divide => "/",
      BinaryOperator::FloorDivide => "//",
      BinaryOperator::Modulo => "%",
      BinaryOperator::Power => "**",
    }
  }
}

// Precedence mirrors Python's expression grammar: `**` binds tighter than
// unary minus, so `-2**2` is `-(2**2)`.
static PRATT: LazyLock<PrattParser<Rule>> = LazyLock::new(|| {
  PrattParser::new()
    .op(Op::infix(Rule::Plus, Assoc::Left) | Op::infix(Rule::Minus, Assoc::Left))
    .op(
      Op::infix(Rule::Multiply, Assoc::Left)
        | Op::infix(Rule::Divide, Assoc::Left)
        | Op::infix(Rule::FloorDivide, Assoc::Left)
        | Op::infix(Rule::Modulo, Assoc::Left),
    )
    .op(Op::prefix(Rule::UnaryMinus) | Op::prefix(Rule::UnaryPlus))
    .op(Op::infix(Rule::Power, Assoc::Right))
});

/// Build an [`Expr`] from the token stream of one `Expression` rule.
pub fn build_expr(pairs: Pairs<Rule>) -> Result<Expr, CalcError> {
  PRATT
    .map_primary(build_primary)
    .map_prefix(|op, rhs| {
      let op = match op.as_rule() {
        Rule::UnaryPlus => UnaryOperator::Plus,
        Rule::UnaryMinus => UnaryOperator::Minus,
        rule => unreachable!("unexpected prefix rule {rule:?}"),
      };
      Ok(Expr::UnaryOp {
        op,
        operand: Box::new(rhs?),
      })
    })
    .map_infix(|lhs, op, rhs| {
      let op = match op.as_rule() {
        Rule::Plus => BinaryOperator::Add,
        Rule::Minus => BinaryOperator::Subtract,
        Rule::Multiply => BinaryOperator::Multiply,
        Rule::Divide => BinaryOperator::Divide,
        Rule::FloorDivide => BinaryOperator::FloorDivide,
        Rule::Modulo => BinaryOperator::Modulo,
        Rule::Power => BinaryOperator::Power,
        rule => unreachable!("unexpected infix rule {rule:?}"),
      };
      Ok(Expr::BinaryOp {
        op,
        left: Box::new(lhs?),
        right: Box::new(rhs?),
      })
    })
    .parse(pairs)
}

fn build_primary(pair: Pair<Rule>) -> Result<Expr, CalcError> {
  match pair.as_rule() {
    Rule::Number => {
      let x: f64 = pair.as_str().parse().map_err(|_| {
        CalcError::EvaluationError(format!("invalid number: {}", pair.as_str()))
      })?;
      Ok(Expr::Number(Value::Real(x)))
    }
    Rule::ImaginaryNumber => {
      let digits = pair.as_str().trim_end_matches(['i', 'j']);
      let im: f64 = digits.parse().map_err(|_| {
        CalcError::EvaluationError(format!("invalid number: {}", pair.as_str()))
      })?;
      Ok(Expr::Number(Value::imaginary(im)))
    }
    Rule::Identifier => Ok(Expr::Variable(pair.as_str().to_string())),
    Rule::FunctionCall => {
      let mut inner = pair.into_inner();
      let name = inner.next().expect("call has a name").as_str().to_string();
      let args = inner
        .map(|arg| build_expr(arg.into_inner()))
        .collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::FunctionCall { name, args })
    }
    Rule::Expression => build_expr(pair.into_inner()),
    rule => unreachable!("unexpected primary rule {rule:?}"),
  }
}

/// Render an expression back to source text. The output is fully
/// parenthesized so that re-parsing it reproduces the identical tree.
pub fn expr_to_string(expr: &Expr) -> String {
  match expr {
    Expr::Number(v) => number_to_source(*v),
    Expr::Variable(name) => name.clone(),
    Expr::UnaryOp { op, operand } => {
      format!("({}{})", op.as_str(), expr_to_string(operand))
    }
    Expr::BinaryOp { op, left, right } => format!(
      "({} {} {})",
      expr_to_string(left),
      op.as_str(),
      expr_to_string(right)
    ),
    Expr::FunctionCall { name, args } => {
      let args: Vec<String> = args.iter().map(expr_to_string).collect();
      format!("{}({})", name, args.join(", "))
    }
  }
}

fn number_to_source(v: Value) -> String {
  match v {
    Value::Real(x) => real_to_source(x),
    // Parsed literals only ever carry an imaginary component.
    Value::Complex(c) if c.re == 0.0 => format!("{}j", real_to_source(c.im)),
    Value::Complex(c) if c.im < 0.0 => {
      format!("({} - {}j)", real_to_source(c.re), real_to_source(-c.im))
    }
    Value::Complex(c) => {
      format!("({} + {}j)", real_to_source(c.re), real_to_source(c.im))
    }
  }
}

fn real_to_source(x: f64) -> String {
  if x.fract() == 0.0 && x.is_finite() && x.abs() < 1e15 {
    format!("{}", x as i64)
  } else {
    format!("{x}")
  }
}

impl std::fmt::Display for Expr {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", expr_to_string(self))
  }
}
