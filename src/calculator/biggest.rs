//! Finding the largest of three values, with ties called out.
//!
//! Several cases can hold at once, so the checks run in a fixed order and
//! the first match wins. Comparisons use exact equality.

use std::fmt;

use super::CalcResult;
use super::format::format_number;
use super::parsing::parse_all;

/// Which value (or values) came out on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Biggest {
    /// `a`, `b` and `c` are all equal.
    AllEqual(f64),
    /// `a == b`, both greater than `c`.
    AAndB(f64),
    /// `b == c`, both greater than `a`.
    BAndC(f64),
    /// `c == a`, both greater than `b`.
    CAndA(f64),
    /// `a` alone is greatest.
    A(f64),
    /// `c` alone is greatest.
    C(f64),
    /// `b` alone is greatest.
    B(f64),
}

impl fmt::Display for Biggest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::AllEqual(v) => write!(f, "All equal to {}", format_number(v)),
            Self::AAndB(v) => write!(f, "a & b equal ({}) > c", format_number(v)),
            Self::BAndC(v) => write!(f, "b & c equal ({}) > a", format_number(v)),
            Self::CAndA(v) => write!(f, "c & a equal ({}) > b", format_number(v)),
            Self::A(v) => write!(f, "a ({}) is biggest", format_number(v)),
            Self::C(v) => write!(f, "c ({}) is biggest", format_number(v)),
            Self::B(v) => write!(f, "b ({}) is biggest", format_number(v)),
        }
    }
}

/// Find the largest of `a`, `b` and `c`.
pub fn find(a: f64, b: f64, c: f64) -> Biggest {
    if a == b && b == c {
        Biggest::AllEqual(a)
    } else if a == b && a > c {
        Biggest::AAndB(a)
    } else if b == c && b > a {
        Biggest::BAndC(b)
    } else if c == a && a > b {
        Biggest::CAndA(c)
    } else if a > b && a > c {
        Biggest::A(a)
    } else if c > a && c > b {
        Biggest::C(c)
    } else {
        // Every remaining ordering has b strictly above both others.
        Biggest::B(b)
    }
}

/// Run the finder on three raw fields.
pub fn run(raw: [&str; 3]) -> CalcResult {
    parse_all(raw)
        .map(|[a, b, c]| find(a, b, c).to_string())
        .into()
}
