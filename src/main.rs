use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use safecalc::{
  evaluate_with, format_value, parse as parse_expression, set_angle_mode,
  AngleMode, Value,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate an expression and print the formatted result
  Eval {
    /// The expression to evaluate, e.g. "sin(pi/2) + 2**10"
    expression: String,
    /// Variable bindings, e.g. --var x=2.5 (repeatable)
    #[arg(long = "var")]
    vars: Vec<String>,
    /// Angle mode for trigonometric functions
    #[arg(long, default_value = "rad")]
    mode: String,
  },
  /// Sample an expression in x over a range and print a JSON dataset
  Sample {
    /// The expression to sample, e.g. "sin(x) + x**2"
    expression: String,
    #[arg(long, default_value_t = -10.0)]
    min: f64,
    #[arg(long, default_value_t = 10.0)]
    max: f64,
    #[arg(long, default_value_t = 200)]
    samples: usize,
    /// Angle mode for trigonometric functions
    #[arg(long, default_value = "rad")]
    mode: String,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::Eval {
      expression,
      vars,
      mode,
    } => {
      set_angle_mode(mode.parse::<AngleMode>()?);
      let environment = parse_bindings(&vars)?;
      let value = evaluate_with(&expression, &environment)?;
      println!("{}", format_value(&value));
    }
    Commands::Sample {
      expression,
      min,
      max,
      samples,
      mode,
    } => {
      set_angle_mode(mode.parse::<AngleMode>()?);
      if !(10..=2000).contains(&samples) {
        bail!("samples must be between 10 and 2000");
      }
      if max <= min {
        bail!("max must be greater than min");
      }
      println!("{}", sample_dataset(&expression, min, max, samples)?);
    }
  }
  Ok(())
}

/// Parse repeated `--var name=value` bindings into an environment.
fn parse_bindings(vars: &[String]) -> Result<HashMap<String, Value>> {
  let mut environment = HashMap::new();
  for binding in vars {
    let (name, raw) = binding
      .split_once('=')
      .with_context(|| format!("invalid binding '{binding}', expected name=value"))?;
    let value: f64 = raw
      .parse()
      .with_context(|| format!("invalid numeric value in '{binding}'"))?;
    environment.insert(name.trim().to_string(), Value::Real(value));
  }
  Ok(environment)
}

/// Evaluate `expression` at evenly spaced points of x. Failed samples and
/// values beyond 1e12 become null, so one pole does not sink the dataset.
fn sample_dataset(
  expression: &str,
  min: f64,
  max: f64,
  samples: usize,
) -> Result<String> {
  // Reject malformed expressions up front; per-point failures stay null.
  parse_expression(expression)?;

  let step = (max - min) / (samples - 1) as f64;
  let xs: Vec<f64> = (0..samples).map(|i| min + step * i as f64).collect();
  let ys: Vec<Option<f64>> = xs
    .iter()
    .map(|&x| {
      let environment = HashMap::from([("x".to_string(), Value::Real(x))]);
      match evaluate_with(expression, &environment) {
        Ok(value) if value.is_real() && value.re().abs() <= 1e12 => {
          Some(value.re())
        }
        _ => None,
      }
    })
    .collect();

  let dataset = json!({
    "expression": expression,
    "x": xs,
    "y": ys,
  });
  Ok(serde_json::to_string_pretty(&dataset)?)
}
