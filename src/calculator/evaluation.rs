//! Expression evaluation using fasteval.
//!
//! The calculator only depends on the [`Evaluator`] trait, so hosts can
//! plug in another expression engine. [`ArithmeticEvaluator`] wraps
//! fasteval, whose parser bounds both input length and nesting depth.

use std::collections::BTreeMap;
use thiserror::Error;

/// Why an evaluable string produced no solution.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Failed to evaluate expression: {0:?}")]
    Invalid(fasteval::Error),
    #[error("Result is not a finite number: {0}")]
    NonFinite(f64),
}

impl From<fasteval::Error> for EvalError {
    fn from(err: fasteval::Error) -> Self {
        Self::Invalid(err)
    }
}

/// Capability to compute the value of a well-formed arithmetic string.
///
/// Inputs use `+ - * /`, parentheses and decimal numbers, with the usual
/// precedence and left associativity.
pub trait Evaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError>;
}

/// Built-in evaluator backed by fasteval.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArithmeticEvaluator;

impl Evaluator for ArithmeticEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        // Use an empty namespace (no custom variables)
        let mut namespace = BTreeMap::<String, f64>::new();
        Ok(fasteval::ez_eval(expression, &mut namespace)?)
    }
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<f64, EvalError>,
{
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        self(expression)
    }
}

/// Evaluate `expression` and format the value for display.
///
/// Non-finite results (e.g. division by zero) are reported as errors.
pub fn solve<E: Evaluator + ?Sized>(evaluator: &E, expression: &str) -> Result<String, EvalError> {
    let value = evaluator.evaluate(expression)?;
    if !value.is_finite() {
        return Err(EvalError::NonFinite(value));
    }
    Ok(format_solution(value))
}

/// Format a number as the shortest decimal that reads back to the same
/// value, without exponent notation.
pub fn format_solution(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expression: &str) -> Result<String, EvalError> {
        solve(&ArithmeticEvaluator, expression)
    }

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(eval("2+2").unwrap(), "4");
        assert_eq!(eval("(1+2)").unwrap(), "3");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1 + 2 * 3").unwrap(), "7");
        assert_eq!(eval("(1 + 2) * 3").unwrap(), "9");
        assert_eq!(eval("8/4/2").unwrap(), "1");
        assert_eq!(eval("10-4-3").unwrap(), "3");
    }

    #[test]
    fn test_signed_operands() {
        assert_eq!(eval("-3").unwrap(), "-3");
        assert_eq!(eval("5*-2").unwrap(), "-10");
        assert_eq!(eval("-(1+2)").unwrap(), "-3");
    }

    #[test]
    fn test_decimal_result() {
        assert_eq!(eval("1/4").unwrap(), "0.25");
        assert_eq!(eval("0.1+0.2").unwrap(), "0.30000000000000004");
        assert!(eval("1/3").unwrap().starts_with("0.333"));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(eval("1/0"), Err(EvalError::NonFinite(v)) if v == f64::INFINITY));
        assert!(matches!(eval("0/0"), Err(EvalError::NonFinite(_))));
    }

    #[test]
    fn test_invalid_expression() {
        assert!(matches!(eval("2 +* "), Err(EvalError::Invalid(_))));
        assert!(matches!(eval("(1)2"), Err(EvalError::Invalid(_))));
        assert!(matches!(eval(""), Err(EvalError::Invalid(_))));
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(eval(&deep), Err(EvalError::Invalid(_))));
    }

    #[test]
    fn test_format_solution() {
        assert_eq!(format_solution(5.0), "5");
        assert_eq!(format_solution(-2.5), "-2.5");
        assert_eq!(format_solution(-0.0), "0");
        assert_eq!(format_solution(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_closure_evaluator() {
        let fixed = |_: &str| -> Result<f64, EvalError> { Ok(42.0) };
        assert_eq!(solve(&fixed, "anything").unwrap(), "42");
    }
}
