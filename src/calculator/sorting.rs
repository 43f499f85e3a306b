//! Ordering three values.

use std::str::FromStr;

use super::CalcResult;
use super::format::format_number;
use super::parsing::parse_all;

/// Direction of a sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort order `{}`", other)),
        }
    }
}

/// Sort three values numerically in the given direction.
pub fn sort(mut values: [f64; 3], order: SortOrder) -> [f64; 3] {
    match order {
        SortOrder::Ascending => values.sort_by(|a, b| a.total_cmp(b)),
        SortOrder::Descending => values.sort_by(|a, b| b.total_cmp(a)),
    }
    values
}

/// Join values for display, e.g. `1, 2, 3`.
pub fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_number(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run the sorter on three raw fields.
pub fn run(raw: [&str; 3], order: SortOrder) -> CalcResult {
    parse_all(raw)
        .map(|values| join(&sort(values, order)))
        .into()
}
