use super::*;

mod functions {
  use super::*;

  mod transcendental {
    use super::*;

    #[test]
    fn sqrt_of_perfect_square() {
      assert_real("sqrt(9)", 3.0);
    }

    #[test]
    fn log_is_base_ten() {
      assert_real("log(100)", 2.0);
      assert_real("log(1000)", 3.0);
    }

    #[test]
    fn ln_is_natural() {
      assert_real("ln(e)", 1.0);
      assert_real("ln(1)", 0.0);
    }

    #[test]
    fn exp_inverts_ln() {
      assert_real("exp(1)", std::f64::consts::E);
      assert_real("exp(ln(7))", 7.0);
    }
  }

  mod hyperbolic {
    use super::*;

    #[test]
    fn at_zero() {
      assert_real("sinh(0)", 0.0);
      assert_real("cosh(0)", 1.0);
      assert_real("tanh(0)", 0.0);
    }

    #[test]
    fn identity() {
      // cosh² - sinh² = 1
      assert_real("cosh(1.5)**2 - sinh(1.5)**2", 1.0);
    }
  }

  mod rounding {
    use super::*;

    #[test]
    fn floor_and_ceil() {
      assert_real("floor(2.7)", 2.0);
      assert_real("floor(-2.1)", -3.0);
      assert_real("ceil(2.1)", 3.0);
    }

    #[test]
    fn round_half_to_even() {
      assert_real("round(2.5)", 2.0);
      assert_real("round(3.5)", 4.0);
      assert_real("round(2.6)", 3.0);
    }
  }

  mod factorial {
    use super::*;

    #[test]
    fn of_small_integers() {
      assert_real("fact(5)", 120.0);
      assert_real("factorial(5)", 120.0);
      assert_real("fact(0)", 1.0);
    }

    #[test]
    fn composes_with_arithmetic() {
      assert_real("fact(3 + 2)", 120.0);
    }
  }

  mod constants {
    use super::*;

    #[test]
    fn named_constants() {
      assert_real("pi", std::f64::consts::PI);
      assert_real("e", std::f64::consts::E);
      assert_real("tau", std::f64::consts::TAU);
      assert_real("tau - 2 * pi", 0.0);
    }
  }
}
