use num_complex::Complex64;

/// A number flowing through evaluation: every literal is widened to this
/// type immediately, and arithmetic is defined for all four real/complex
/// operand combinations. Operations that leave the real line (`sqrt` of a
/// negative, fractional powers of a negative base) promote to `Complex`
/// instead of producing NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
  Real(f64),
  Complex(Complex64),
}

impl Value {
  pub fn imaginary(im: f64) -> Self {
    Value::Complex(Complex64::new(0.0, im))
  }

  /// View this value as a complex number (reals get a zero imaginary part).
  pub fn as_complex(self) -> Complex64 {
    match self {
      Value::Real(x) => Complex64::new(x, 0.0),
      Value::Complex(c) => c,
    }
  }

  /// True when the value is on the real line, either by construction or
  /// because the imaginary part is negligible.
  pub fn is_real(self) -> bool {
    match self {
      Value::Real(_) => true,
      Value::Complex(c) => c.im.abs() < 1e-12,
    }
  }

  /// The real component (imaginary part discarded).
  pub fn re(self) -> f64 {
    match self {
      Value::Real(x) => x,
      Value::Complex(c) => c.re,
    }
  }

  /// The imaginary component (zero for reals).
  pub fn im(self) -> f64 {
    match self {
      Value::Real(_) => 0.0,
      Value::Complex(c) => c.im,
    }
  }

  pub fn pow(self, rhs: Self) -> Self {
    match (self, rhs) {
      (Value::Real(a), Value::Real(b)) => {
        // A negative base with a fractional exponent has no real power;
        // promote to the complex plane rather than returning NaN.
        if a < 0.0 && b.fract() != 0.0 {
          Value::Complex(Complex64::new(a, 0.0).powc(Complex64::new(b, 0.0)))
        } else {
          Value::Real(a.powf(b))
        }
      }
      _ => Value::Complex(self.as_complex().powc(rhs.as_complex())),
    }
  }

  /// Floor division, defined on reals only.
  pub fn floor_div(self, rhs: Self) -> Result<Self, String> {
    match (self, rhs) {
      (Value::Real(a), Value::Real(b)) => Ok(Value::Real((a / b).floor())),
      _ => Err("floor division is not defined for complex numbers".into()),
    }
  }

  /// Modulo with the sign of the divisor, defined on reals only.
  pub fn modulo(self, rhs: Self) -> Result<Self, String> {
    match (self, rhs) {
      (Value::Real(a), Value::Real(b)) => Ok(Value::Real(a - b * (a / b).floor())),
      _ => Err("modulo is not defined for complex numbers".into()),
    }
  }
}

impl From<f64> for Value {
  fn from(x: f64) -> Self {
    Value::Real(x)
  }
}

impl std::ops::Add for Value {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    match (self, rhs) {
      (Value::Real(a), Value::Real(b)) => Value::Real(a + b),
      _ => Value::Complex(self.as_complex() + rhs.as_complex()),
    }
  }
}

impl std::ops::Sub for Value {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self {
    match (self, rhs) {
      (Value::Real(a), Value::Real(b)) => Value::Real(a - b),
      _ => Value::Complex(self.as_complex() - rhs.as_complex()),
    }
  }
}

impl std::ops::Mul for Value {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    match (self, rhs) {
      (Value::Real(a), Value::Real(b)) => Value::Real(a * b),
      _ => Value::Complex(self.as_complex() * rhs.as_complex()),
    }
  }
}

impl std::ops::Div for Value {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    match (self, rhs) {
      (Value::Real(a), Value::Real(b)) => Value::Real(a / b),
      _ => Value::Complex(self.as_complex() / rhs.as_complex()),
    }
  }
}

impl std::ops::Neg for Value {
  type Output = Self;

  fn neg(self) -> Self {
    match self {
      Value::Real(x) => Value::Real(-x),
      Value::Complex(c) => Value::Complex(-c),
    }
  }
}
