//! Linear unit conversion driven by a table of relative rates.
//!
//! Every unit carries a rate: how many of that unit make up one base unit.
//! The base unit has rate 1. Converting multiplies by `target / source`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::{format_number, to_fixed};
use super::parsing::parse_number;
use super::{CalcError, CalcResult};

/// Decimal places kept to hide floating-point noise.
const DISPLAY_DIGITS: usize = 6;

/// A unit and its rate relative to the base unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Short identifier used for lookups (e.g. `kg`).
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Amount of this unit per one base unit.
    pub rate: f64,
}

impl Unit {
    pub fn new(id: impl Into<String>, label: impl Into<String>, rate: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            rate,
        }
    }
}

/// Problems with a configured unit table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitTableError {
    #[error("unit table is empty")]
    Empty,

    #[error("unit `{id}` has invalid rate {rate}; rates must be positive and finite")]
    InvalidRate { id: String, rate: f64 },

    #[error("unit `{0}` is defined more than once")]
    Duplicate(String),
}

/// An ordered set of units that share a base unit.
///
/// Construction guarantees every rate is positive and finite, so a
/// conversion never divides by zero.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitTable {
    units: Vec<Unit>,
}

impl UnitTable {
    /// Build a table, rejecting bad rates and duplicate ids.
    pub fn new(units: Vec<Unit>) -> Result<Self, UnitTableError> {
        if units.is_empty() {
            return Err(UnitTableError::Empty);
        }

        for (i, unit) in units.iter().enumerate() {
            if !unit.rate.is_finite() || unit.rate <= 0.0 {
                return Err(UnitTableError::InvalidRate {
                    id: unit.id.clone(),
                    rate: unit.rate,
                });
            }
            if units[..i].iter().any(|u| u.id.eq_ignore_ascii_case(&unit.id)) {
                return Err(UnitTableError::Duplicate(unit.id.clone()));
            }
        }

        Ok(Self { units })
    }

    /// The mass table, with kilograms as the base unit.
    pub fn mass() -> Self {
        Self {
            units: vec![
                Unit::new("kg", "Kilogram", 1.0),
                Unit::new("g", "Gram", 1000.0),
                Unit::new("mg", "Milligram", 1_000_000.0),
                Unit::new("ug", "Microgram", 1_000_000_000.0),
                Unit::new("t", "Metric Ton", 0.001),
                Unit::new("lb", "Pound", 2.20462),
                Unit::new("oz", "Ounce", 35.274),
                Unit::new("st", "Stone", 0.157473),
            ],
        }
    }

    /// All units in table order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Look up a unit by id, ignoring ASCII case.
    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id.eq_ignore_ascii_case(id))
    }

    /// Look up the rate of a unit by id.
    pub fn rate(&self, id: &str) -> Option<f64> {
        self.get(id).map(|u| u.rate)
    }

    /// Convert raw amount text between two units of this table.
    ///
    /// Returns `None` when either unit id is unknown.
    pub fn run(&self, raw_amount: &str, from: &str, to: &str) -> Option<CalcResult> {
        let source = self.rate(from)?;
        let target = self.rate(to)?;
        Some(run(raw_amount, source, target))
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::mass()
    }
}

/// Convert `amount` from a unit with `source_rate` to one with `target_rate`.
///
/// The result is rounded to six decimal places. Rates come from a
/// validated [`UnitTable`] and are never zero.
pub fn convert(amount: f64, source_rate: f64, target_rate: f64) -> f64 {
    to_fixed(amount * (target_rate / source_rate), DISPLAY_DIGITS)
}

/// Run the converter on raw amount text and two rates.
pub fn run(raw_amount: &str, source_rate: f64, target_rate: f64) -> CalcResult {
    parse_number(raw_amount)
        .ok_or(CalcError::MissingAmount)
        .map(|amount| format_number(convert(amount, source_rate, target_rate)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_factors() {
        assert_eq!(convert(1.0, 1.0, 1000.0), 1000.0);
        assert_eq!(convert(1.0, 1000.0, 1.0), 0.001);
        assert_eq!(convert(2.5, 1.0, 1.0), 2.5);
    }

    #[test]
    fn test_convert_rounds_noise() {
        // 1 lb in kg is 0.45359290943...
        assert_eq!(convert(1.0, 2.20462, 1.0), 0.453593);
        assert_eq!(convert(0.3, 1.0, 3.0), 0.9);
    }

    #[test]
    fn test_run_through_table() {
        let table = UnitTable::mass();
        assert_eq!(table.run("1", "kg", "g").unwrap().display(), "1000");
        assert_eq!(table.run("500", "G", "KG").unwrap().display(), "0.5");
        assert_eq!(table.run("1", "kg", "lb").unwrap().display(), "2.20462");
        assert!(table.run("1", "kg", "furlong").is_none());
    }

    #[test]
    fn test_run_missing_amount() {
        assert_eq!(run("", 1.0, 1000.0).display(), "Enter Amount");
        assert_eq!(run("ten", 1.0, 1000.0).display(), "Enter Amount");
    }

    #[test]
    fn test_table_rejects_bad_rates() {
        let zero = UnitTable::new(vec![Unit::new("x", "X", 0.0)]);
        assert!(matches!(zero, Err(UnitTableError::InvalidRate { .. })));

        let negative = UnitTable::new(vec![Unit::new("x", "X", -1.0)]);
        assert!(matches!(negative, Err(UnitTableError::InvalidRate { .. })));

        let nan = UnitTable::new(vec![Unit::new("x", "X", f64::NAN)]);
        assert!(matches!(nan, Err(UnitTableError::InvalidRate { .. })));
    }

    #[test]
    fn test_table_rejects_duplicates_and_empty() {
        let dup = UnitTable::new(vec![Unit::new("g", "Gram", 1.0), Unit::new("G", "Gram", 2.0)]);
        assert_eq!(dup, Err(UnitTableError::Duplicate("G".to_string())));
        assert_eq!(UnitTable::new(Vec::new()), Err(UnitTableError::Empty));
    }

    #[test]
    fn test_default_table_is_valid() {
        let table = UnitTable::default();
        assert_eq!(UnitTable::new(table.units().to_vec()), Ok(table.clone()));
        assert_eq!(table.rate("kg"), Some(1.0));
    }
}
