//! Arithmetic mean of four values.

use super::CalcResult;
use super::format::{format_number, to_fixed};
use super::parsing::parse_all;

/// Decimal places kept in the displayed mean.
const DISPLAY_DIGITS: usize = 4;

/// Mean of four values, rounded to four decimal places.
pub fn mean(values: &[f64; 4]) -> f64 {
    let sum: f64 = values.iter().sum();
    to_fixed(sum / values.len() as f64, DISPLAY_DIGITS)
}

/// Run the mean calculator on four raw fields.
pub fn run(raw: [&str; 4]) -> CalcResult {
    parse_all(raw)
        .map(|values| format_number(mean(&values)))
        .into()
}
