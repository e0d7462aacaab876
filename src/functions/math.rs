use crate::value::Value;
use crate::{angle_mode, AngleMode};

/// Convert a trig argument to radians under the current angle mode.
fn to_radians(v: Value) -> Value {
  match angle_mode() {
    AngleMode::Rad => v,
    AngleMode::Deg => v * Value::Real(std::f64::consts::PI / 180.0),
  }
}

/// Convert an inverse-trig result out of radians under the current angle
/// mode. A genuinely complex angle has no degree representation, so DEG
/// mode rejects it; a negligible imaginary part is dropped first.
fn from_radians(v: Value) -> Result<Value, String> {
  match angle_mode() {
    AngleMode::Rad => Ok(v),
    AngleMode::Deg => {
      if v.is_real() {
        Ok(Value::Real(v.re().to_degrees()))
      } else {
        Err("inverse trigonometric result is complex and cannot be expressed in degrees".into())
      }
    }
  }
}

pub fn sqrt(v: Value) -> Result<Value, String> {
  Ok(match v {
    Value::Real(x) if x >= 0.0 => Value::Real(x.sqrt()),
    _ => Value::Complex(v.as_complex().sqrt()),
  })
}

pub fn exp(v: Value) -> Result<Value, String> {
  Ok(match v {
    Value::Real(x) => Value::Real(x.exp()),
    Value::Complex(c) => Value::Complex(c.exp()),
  })
}

/// Natural logarithm over the complex domain: negative and zero real
/// inputs yield complex results instead of failing.
pub fn ln(v: Value) -> Result<Value, String> {
  Ok(match v {
    Value::Real(x) if x > 0.0 => Value::Real(x.ln()),
    _ => Value::Complex(v.as_complex().ln()),
  })
}

/// Base-10 logarithm over the complex domain.
pub fn log10(v: Value) -> Result<Value, String> {
  Ok(match v {
    Value::Real(x) if x > 0.0 => Value::Real(x.log10()),
    _ => Value::Complex(v.as_complex().ln() / std::f64::consts::LN_10),
  })
}

pub fn abs(v: Value) -> Result<Value, String> {
  Ok(match v {
    Value::Real(x) => Value::Real(x.abs()),
    Value::Complex(c) => Value::Real(c.norm()),
  })
}

// floor/ceil/round act on the real component; a complex imaginary part is
// discarded.

pub fn floor(v: Value) -> Result<Value, String> {
  Ok(Value::Real(v.re().floor()))
}

pub fn ceil(v: Value) -> Result<Value, String> {
  Ok(Value::Real(v.re().ceil()))
}

/// Half-to-even rounding of the real component.
pub fn round(v: Value) -> Result<Value, String> {
  let x = v.re();
  let base = x.trunc();
  let frac = x - base;
  let rounded = if frac.abs() == 0.5 {
    if (base as i64) % 2 == 0 {
      base
    } else if x.is_sign_positive() {
      base + 1.0
    } else {
      base - 1.0
    }
  } else {
    x.round()
  };
  // Normalize -0.0
  Ok(Value::Real(if rounded == 0.0 { 0.0 } else { rounded }))
}

pub fn factorial(v: Value) -> Result<Value, String> {
  let Value::Real(x) = v else {
    return Err("factorial requires a non-negative integer".into());
  };
  if x < 0.0 || x.fract() != 0.0 || !x.is_finite() {
    return Err("factorial requires a non-negative integer".into());
  }
  // 171! overflows f64 either way
  if x > 170.0 {
    return Ok(Value::Real(f64::INFINITY));
  }
  let mut acc = 1.0;
  for k in 2..=(x as u64) {
    acc *= k as f64;
  }
  Ok(Value::Real(acc))
}

pub fn sin(v: Value) -> Result<Value, String> {
  Ok(match to_radians(v) {
    Value::Real(x) => Value::Real(x.sin()),
    Value::Complex(c) => Value::Complex(c.sin()),
  })
}

pub fn cos(v: Value) -> Result<Value, String> {
  Ok(match to_radians(v) {
    Value::Real(x) => Value::Real(x.cos()),
    Value::Complex(c) => Value::Complex(c.cos()),
  })
}

pub fn tan(v: Value) -> Result<Value, String> {
  Ok(match to_radians(v) {
    Value::Real(x) => Value::Real(x.tan()),
    Value::Complex(c) => Value::Complex(c.tan()),
  })
}

pub fn asin(v: Value) -> Result<Value, String> {
  let angle = match v {
    Value::Real(x) if (-1.0..=1.0).contains(&x) => Value::Real(x.asin()),
    _ => Value::Complex(v.as_complex().asin()),
  };
  from_radians(angle)
}

pub fn acos(v: Value) -> Result<Value, String> {
  let angle = match v {
    Value::Real(x) if (-1.0..=1.0).contains(&x) => Value::Real(x.acos()),
    _ => Value::Complex(v.as_complex().acos()),
  };
  from_radians(angle)
}

pub fn atan(v: Value) -> Result<Value, String> {
  let angle = match v {
    Value::Real(x) => Value::Real(x.atan()),
    Value::Complex(c) => Value::Complex(c.atan()),
  };
  from_radians(angle)
}

pub fn sinh(v: Value) -> Result<Value, String> {
  Ok(match v {
    Value::Real(x) => Value::Real(x.sinh()),
    Value::Complex(c) => Value::Complex(c.sinh()),
  })
}

pub fn cosh(v: Value) -> Result<Value, String> {
  Ok(match v {
    Value::Real(x) => Value::Real(x.cosh()),
    Value::Complex(c) => Value::Complex(c.cosh()),
  })
}

pub fn tanh(v: Value) -> Result<Value, String> {
  Ok(match v {
    Value::Real(x) => Value::Real(x.tanh()),
    Value::Complex(c) => Value::Complex(c.tanh()),
  })
}
