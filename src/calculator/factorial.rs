//! Factorial of a non-negative integer.
//!
//! The product is accumulated in a double, so results above 2^53 carry the
//! same rounding a double-based calculator shows (`25!` reads
//! `1.5511210043330986e+25`).

use std::fmt;

use super::format::format_number;
use super::parsing::parse_integer;
use super::{CalcError, CalcResult};

/// Largest input whose factorial fits in a double; `171!` overflows.
pub const MAX_FACTORIAL_INPUT: i64 = 170;

/// A computed factorial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Factorial {
    /// The factorial value.
    Value(f64),
    /// The input exceeds [`MAX_FACTORIAL_INPUT`].
    TooLarge,
}

impl fmt::Display for Factorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.write_str(&format_number(*value)),
            Self::TooLarge => f.write_str("Infinity (Too large)"),
        }
    }
}

/// Compute `n!`.
pub fn factorial(n: i64) -> Result<Factorial, CalcError> {
    if n < 0 {
        return Err(CalcError::InvalidNumber);
    }
    if n > MAX_FACTORIAL_INPUT {
        return Ok(Factorial::TooLarge);
    }
    if n <= 1 {
        return Ok(Factorial::Value(1.0));
    }

    let mut product = 1.0_f64;
    for i in 2..=n {
        product *= i as f64;
    }
    Ok(Factorial::Value(product))
}

/// Run the factorial calculator on raw field text.
pub fn run(raw: &str) -> CalcResult {
    parse_integer(raw)
        .ok_or(CalcError::MissingNumber)
        .and_then(factorial)
        .map(|value| value.to_string())
        .into()
}
