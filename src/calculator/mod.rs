//! Calculator utilities.
//!
//! This module provides:
//! - Input parsing and display formatting shared by every calculator
//! - A four-function calculator and a factorial calculator
//! - Unit conversion over a configurable rate table
//! - Mean, sort and maximum-with-ties over a few fields
//!
//! Each calculator exposes a pure function over numbers plus a `run` entry
//! point that takes raw field text and returns a [`CalcResult`].

pub mod arithmetic;
pub mod average;
pub mod biggest;
pub mod conversion;
mod error;
mod evaluation;
pub mod factorial;
pub mod format;
pub mod parsing;
pub mod sorting;

pub use arithmetic::Operation;
pub use biggest::Biggest;
pub use conversion::{Unit, UnitTable, UnitTableError};
pub use error::CalcError;
pub use evaluation::CalcResult;
pub use factorial::{Factorial, MAX_FACTORIAL_INPUT};
pub use format::format_number;
pub use parsing::{parse_all, parse_integer, parse_number};
pub use sorting::SortOrder;
