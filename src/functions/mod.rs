use std::collections::HashMap;
use std::f64::consts;
use std::sync::LazyLock;

use crate::value::Value;

pub mod calculus;
pub mod math;

/// One whitelisted named function: fixed arity, a pure numeric transform,
/// and a flag marking entries that consult the process-wide angle mode.
pub struct Builtin {
  pub arity: usize,
  pub angle_sensitive: bool,
  pub apply: fn(Value) -> Result<Value, String>,
}

impl Builtin {
  const fn pure(apply: fn(Value) -> Result<Value, String>) -> Self {
    Builtin {
      arity: 1,
      angle_sensitive: false,
      apply,
    }
  }

  const fn angle(apply: fn(Value) -> Result<Value, String>) -> Self {
    Builtin {
      arity: 1,
      angle_sensitive: true,
      apply,
    }
  }
}

static BUILTINS: LazyLock<HashMap<&'static str, Builtin>> =
  LazyLock::new(|| {
    HashMap::from([
      ("sqrt", Builtin::pure(math::sqrt)),
      ("exp", Builtin::pure(math::exp)),
      ("ln", Builtin::pure(math::ln)),
      ("log", Builtin::pure(math::log10)),
      ("abs", Builtin::pure(math::abs)),
      ("floor", Builtin::pure(math::floor)),
      ("ceil", Builtin::pure(math::ceil)),
      ("round", Builtin::pure(math::round)),
      ("fact", Builtin::pure(math::factorial)),
      ("factorial", Builtin::pure(math::factorial)),
      ("sin", Builtin::angle(math::sin)),
      ("cos", Builtin::angle(math::cos)),
      ("tan", Builtin::angle(math::tan)),
      ("asin", Builtin::angle(math::asin)),
      ("acos", Builtin::angle(math::acos)),
      ("atan", Builtin::angle(math::atan)),
      ("sinh", Builtin::pure(math::sinh)),
      ("cosh", Builtin::pure(math::cosh)),
      ("tanh", Builtin::pure(math::tanh)),
    ])
  });

// Reserved names, resolved after the variable environment. `j` is the
// canonical imaginary unit; a bare `i` is rewritten to `j` before parsing.
static CONSTANTS: LazyLock<HashMap<&'static str, Value>> =
  LazyLock::new(|| {
    HashMap::from([
      ("pi", Value::Real(consts::PI)),
      ("e", Value::Real(consts::E)),
      ("tau", Value::Real(consts::TAU)),
      ("i", Value::imaginary(1.0)),
      ("j", Value::imaginary(1.0)),
    ])
  });

pub fn lookup(name: &str) -> Option<&'static Builtin> {
  BUILTINS.get(name)
}

pub fn constant(name: &str) -> Option<Value> {
  CONSTANTS.get(name).copied()
}
