//! Four-function calculator over two operands.

use std::str::FromStr;

use super::format::{format_number, is_integer, to_fixed};
use super::parsing::parse_number;
use super::{CalcError, CalcResult};

/// Decimal places kept for non-integer results.
const DISPLAY_DIGITS: usize = 4;

/// A binary arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FromStr for Operation {
    type Err = String;

    /// Accepts the action tags `add`, `sub`, `mul`, `div` and their long forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "sub" | "subtract" => Ok(Self::Subtract),
            "mul" | "multiply" => Ok(Self::Multiply),
            "div" | "divide" => Ok(Self::Divide),
            other => Err(format!("unknown operation `{}`", other)),
        }
    }
}

/// Apply `op` to two operands.
///
/// A divisor of exactly zero is a failure rather than an infinity.
pub fn evaluate(n1: f64, n2: f64, op: Operation) -> Result<f64, CalcError> {
    match op {
        Operation::Add => Ok(n1 + n2),
        Operation::Subtract => Ok(n1 - n2),
        Operation::Multiply => Ok(n1 * n2),
        Operation::Divide if n2 == 0.0 => Err(CalcError::DivideByZero),
        Operation::Divide => Ok(n1 / n2),
    }
}

/// Format a result: integers as-is, everything else to four places.
pub fn display_value(value: f64) -> String {
    if is_integer(value) {
        format_number(value)
    } else {
        format_number(to_fixed(value, DISPLAY_DIGITS))
    }
}

/// Run the calculator on raw field text and an action tag.
///
/// Operands are checked before the action, so bad input reports
/// `Invalid Input` even alongside an unknown action. An unknown action
/// otherwise produces no result at all.
pub fn run(raw1: &str, raw2: &str, action: &str) -> Option<CalcResult> {
    let (Some(n1), Some(n2)) = (parse_number(raw1), parse_number(raw2)) else {
        return Some(CalcResult::from(Err(CalcError::InvalidInput)));
    };

    let op = action.parse::<Operation>().ok()?;
    Some(evaluate(n1, n2, op).map(display_value).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate(2.0, 3.0, Operation::Add), Ok(5.0));
        assert_eq!(evaluate(2.0, 3.0, Operation::Subtract), Ok(-1.0));
        assert_eq!(evaluate(2.0, 3.0, Operation::Multiply), Ok(6.0));
        assert_eq!(evaluate(3.0, 2.0, Operation::Divide), Ok(1.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(1.0, 0.0, Operation::Divide), Err(CalcError::DivideByZero));
        assert_eq!(evaluate(0.0, 0.0, Operation::Divide), Err(CalcError::DivideByZero));
        assert_eq!(evaluate(-5.0, -0.0, Operation::Divide), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_action_tags() {
        assert_eq!("add".parse(), Ok(Operation::Add));
        assert_eq!("sub".parse(), Ok(Operation::Subtract));
        assert_eq!("mul".parse(), Ok(Operation::Multiply));
        assert_eq!("div".parse(), Ok(Operation::Divide));
        assert_eq!("divide".parse(), Ok(Operation::Divide));
        assert_eq!(
            "pow".parse::<Operation>(),
            Err("unknown operation `pow`".to_string())
        );
    }

    #[test]
    fn test_run_rounds_non_integers() {
        assert_eq!(run("1", "3", "div").unwrap().display(), "0.3333");
        assert_eq!(run("0.1", "0.2", "add").unwrap().display(), "0.3");
        assert_eq!(run("10", "4", "div").unwrap().display(), "2.5");
    }

    #[test]
    fn test_run_keeps_integers() {
        assert_eq!(run("6", "3", "div").unwrap().display(), "2");
        assert_eq!(run("123456789", "1000", "mul").unwrap().display(), "123456789000");
    }

    #[test]
    fn test_run_divide_by_zero() {
        let result = run("7", "0", "div").unwrap();
        assert_eq!(result.display(), "Cannot divide by zero");
    }

    #[test]
    fn test_run_invalid_input() {
        assert_eq!(run("", "3", "add").unwrap().display(), "Invalid Input");
        assert_eq!(run("1", "x", "add").unwrap().display(), "Invalid Input");
        assert_eq!(run("x", "1", "pow").unwrap().display(), "Invalid Input");
    }

    #[test]
    fn test_run_unknown_action_is_noop() {
        assert!(run("1", "2", "pow").is_none());
        assert!(run("1", "2", "clear").is_none());
    }
}
