use super::*;

mod trig {
  use super::*;
  use std::sync::Mutex;

  // The angle mode is process-wide; tests that flip it serialize through
  // this lock and restore RAD before releasing it.
  static MODE_LOCK: Mutex<()> = Mutex::new(());

  fn with_mode<F: FnOnce()>(mode: AngleMode, body: F) {
    let guard = MODE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_angle_mode(mode);
    body();
    set_angle_mode(AngleMode::Rad);
    drop(guard);
  }

  #[test]
  fn radian_mode_forward_functions() {
    with_mode(AngleMode::Rad, || {
      assert_real_approx("sin(pi / 2)", 1.0, 1e-9);
      assert_real_approx("cos(pi)", -1.0, 1e-9);
      assert_real_approx("tan(pi / 4)", 1.0, 1e-9);
    });
  }

  #[test]
  fn degree_mode_forward_functions() {
    with_mode(AngleMode::Deg, || {
      assert_real_approx("sin(90)", 1.0, 1e-9);
      assert_real_approx("cos(180)", -1.0, 1e-9);
      assert_real_approx("tan(45)", 1.0, 1e-9);
    });
  }

  #[test]
  fn degree_mode_inverse_functions() {
    with_mode(AngleMode::Deg, || {
      assert_real_approx("asin(1)", 90.0, 1e-9);
      assert_real_approx("acos(0)", 90.0, 1e-9);
      assert_real_approx("atan(1)", 45.0, 1e-9);
    });
  }

  #[test]
  fn angle_mode_round_trip() {
    with_mode(AngleMode::Deg, || {
      assert_real_approx("sin(90)", 1.0, 1e-9);
      set_angle_mode(AngleMode::Rad);
      assert_real_approx("sin(pi / 2)", 1.0, 1e-9);
    });
  }

  #[test]
  fn degree_mode_rejects_complex_inverse_results() {
    with_mode(AngleMode::Deg, || {
      // asin(2) has no real angle; in DEG mode that is an error rather
      // than a silently truncated conversion.
      let err = evaluate("asin(2)").unwrap_err();
      assert!(matches!(err, CalcError::EvaluationError(_)));
    });
  }

  #[test]
  fn radian_mode_allows_complex_inverse_results() {
    with_mode(AngleMode::Rad, || {
      let value = evaluate("asin(2)").unwrap();
      assert!(!value.is_real());
    });
  }

  #[test]
  fn complex_argument_trig() {
    with_mode(AngleMode::Rad, || {
      // sin(ix) = i sinh(x)
      let value = evaluate("sin(2i)").unwrap();
      assert!(value.re().abs() < 1e-12);
      assert!((value.im() - 2.0_f64.sinh()).abs() < 1e-9);
    });
  }
}
