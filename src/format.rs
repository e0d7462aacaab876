use crate::value::Value;

// Imaginary or real parts below this magnitude are treated as numerical
// noise from complex-domain round trips.
const NEGLIGIBLE: f64 = 1e-12;

/// Render a value as its canonical display string: five decimal places,
/// scientific notation for large reals, `a + bi` conventions for complex
/// results with negligible components suppressed.
pub fn format_value(value: &Value) -> String {
  match value {
    Value::Real(x) => format_real(*x),
    Value::Complex(c) => {
      if c.im.abs() < NEGLIGIBLE {
        format_real(c.re)
      } else if c.re.abs() < NEGLIGIBLE {
        format!("{}i", fixed5(c.im))
      } else if c.im < 0.0 {
        format!("{} - {}i", fixed5(c.re), fixed5(-c.im))
      } else {
        format!("{} + {}i", fixed5(c.re), fixed5(c.im))
      }
    }
  }
}

fn format_real(x: f64) -> String {
  if x.abs() >= 1e6 {
    format!("{:.5e}", x)
  } else {
    fixed5(x)
  }
}

/// Fixed-point with exactly five decimals, rounded first so that values
/// like -1e-9 come out as "0.00000" rather than "-0.00000".
fn fixed5(x: f64) -> String {
  let rounded = (x * 1e5).round() / 1e5;
  let rounded = if rounded == 0.0 { 0.0 } else { rounded };
  format!("{rounded:.5}")
}
