//! Input parsing for calculator fields.
//!
//! Every utility reads raw text first. A field either yields a number or
//! nothing at all, in which case the caller answers with its own failure
//! message instead of computing anything.

use std::num::IntErrorKind;

use lazy_static::lazy_static;
use regex::Regex;

use super::CalcError;

lazy_static! {
    /// Decimal literal with optional sign, fraction and exponent.
    /// Accepts forms like `42`, `-3.5`, `.5`, `5.`, `1e3`, `+2.5E-4`.
    static ref DECIMAL: Regex = Regex::new(
        r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$"
    ).unwrap();

    /// Signed infinity literal.
    static ref INFINITY: Regex = Regex::new(r"^([+-]?)Infinity$").unwrap();

    /// Integer literal. A trailing fraction or exponent is read past and dropped.
    static ref INTEGER: Regex = Regex::new(
        r"^([+-]?[0-9]+)(\.[0-9]*)?([eE][+-]?[0-9]+)?$"
    ).unwrap();
}

/// Parse a field as a double-precision number.
///
/// Surrounding whitespace is ignored. Returns `None` for empty text,
/// words, `NaN`, or anything with trailing garbage.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();

    if let Some(caps) = INFINITY.captures(trimmed) {
        return Some(if &caps[1] == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if !DECIMAL.is_match(trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

/// Parse a field as an integer.
///
/// Only the leading digit run counts: `"5.9"` reads as 5 and `"1e3"` as 1.
/// Magnitudes beyond the `i64` range saturate.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let caps = INTEGER.captures(trimmed)?;
    let digits = &caps[1];

    match digits.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Parse every field, failing if any one of them is not a number.
pub fn parse_all<const N: usize>(raw: [&str; N]) -> Result<[f64; N], CalcError> {
    let mut values = [0.0; N];
    for (slot, text) in values.iter_mut().zip(raw) {
        *slot = parse_number(text).ok_or(CalcError::MissingNumbers)?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));
        assert_eq!(parse_number("-1e+2"), Some(-100.0));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse_number("  12.5\t"), Some(12.5));
        assert_eq!(parse_number("\n-4 "), Some(-4.0));
    }

    #[test]
    fn test_infinity_literal() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_rejected_input() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("1 2"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("1e"), None);
    }

    #[test]
    fn test_integer_truncates_fraction() {
        assert_eq!(parse_integer("5"), Some(5));
        assert_eq!(parse_integer(" 5.9 "), Some(5));
        assert_eq!(parse_integer("-3.2"), Some(-3));
        assert_eq!(parse_integer("7."), Some(7));
    }

    #[test]
    fn test_integer_rejects_non_integers() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("five"), None);
        assert_eq!(parse_integer(".5"), None);
        assert_eq!(parse_integer("e3"), None);
        assert_eq!(parse_integer("1e"), None);
    }

    #[test]
    fn test_integer_stops_at_exponent() {
        assert_eq!(parse_integer("1e3"), Some(1));
        assert_eq!(parse_integer("1.5e2"), Some(1));
        assert_eq!(parse_integer("-2E+5"), Some(-2));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert_eq!(parse_integer("１２"), None);
        assert_eq!(parse_integer("-٣"), None);
        assert_eq!(parse_number("٣.٥"), None);
        assert_eq!(parse_number("１e２"), None);
    }

    #[test]
    fn test_integer_saturates() {
        assert_eq!(parse_integer("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_integer("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_parse_all() {
        assert_eq!(parse_all(["1", " 2 ", "3e0"]), Ok([1.0, 2.0, 3.0]));
        assert_eq!(parse_all(["1", "?"]), Err(CalcError::MissingNumbers));
    }
}
