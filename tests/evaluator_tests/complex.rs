use super::*;

mod complex {
  use super::*;

  #[test]
  fn sqrt_of_negative_one_is_i() {
    let value = evaluate("sqrt(-1)").unwrap();
    assert!(value.re().abs() < 1e-12);
    assert!((value.im() - 1.0).abs() < 1e-12);
  }

  #[test]
  fn imaginary_literals_with_either_suffix() {
    let with_i = evaluate("3 + 4i").unwrap();
    let with_j = evaluate("3 + 4j").unwrap();
    assert_eq!(with_i, with_j);
    assert_eq!(with_i.re(), 3.0);
    assert_eq!(with_i.im(), 4.0);
  }

  #[test]
  fn imaginary_unit_constant() {
    let value = evaluate("i * i").unwrap();
    assert!(value.is_real());
    assert!((value.re() + 1.0).abs() < 1e-12);
  }

  #[test]
  fn complex_multiplication() {
    // (1 + 2i)(3 - i) = 5 + 5i
    let value = evaluate("(1 + 2i) * (3 - 1i)").unwrap();
    assert!((value.re() - 5.0).abs() < 1e-12);
    assert!((value.im() - 5.0).abs() < 1e-12);
  }

  #[test]
  fn imaginary_squared() {
    let value = evaluate("2i ** 2").unwrap();
    assert!((value.re() + 4.0).abs() < 1e-9);
    assert!(value.im().abs() < 1e-9);
  }

  #[test]
  fn negative_base_fractional_power_enters_complex_domain() {
    let value = evaluate("(-8) ** (1/3)").unwrap();
    // Principal cube root of -8 is 1 + sqrt(3)i
    assert!((value.re() - 1.0).abs() < 1e-9);
    assert!((value.im() - 3.0_f64.sqrt()).abs() < 1e-9);
  }

  #[test]
  fn ln_of_negative_one_is_i_pi() {
    let value = evaluate("ln(-1)").unwrap();
    assert!(value.re().abs() < 1e-12);
    assert!((value.im() - std::f64::consts::PI).abs() < 1e-12);
  }

  #[test]
  fn log_of_zero_is_negative_infinity() {
    let value = evaluate("ln(0)").unwrap();
    assert!(value.re().is_infinite() && value.re() < 0.0);
  }

  #[test]
  fn rounding_discards_imaginary_part() {
    assert_eq!(evaluate("floor(2.7 + 3i)").unwrap(), Value::Real(2.0));
    assert_eq!(evaluate("ceil(2.1 + 3i)").unwrap(), Value::Real(3.0));
  }

  #[test]
  fn abs_of_complex_is_magnitude() {
    assert_eq!(evaluate("abs(3 + 4i)").unwrap(), Value::Real(5.0));
  }

  #[test]
  fn division_of_complex_values() {
    // (4 + 2i) / (1 + i) = 3 - i
    let value = evaluate("(4 + 2i) / (1 + i)").unwrap();
    assert!((value.re() - 3.0).abs() < 1e-12);
    assert!((value.im() + 1.0).abs() < 1e-12);
  }
}
