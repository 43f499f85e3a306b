//! Everyday arithmetic utilities.
//!
//! Each utility is a pure function: operands in, a formatted result or a
//! failure message out. See [`calculator`] for the individual calculators.

pub mod calculator;
pub mod config;
pub mod logging;

pub use calculator::{CalcError, CalcResult};
pub use config::{Config, ConfigError};
