//! Failure outcomes shared by the calculator utilities.

use thiserror::Error;

/// A failed calculation.
///
/// The `Display` text of each variant is the message shown to the user in
/// place of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operand of the four-function calculator did not parse.
    #[error("Invalid Input")]
    InvalidInput,

    /// The factorial field did not parse.
    #[error("Enter a number")]
    MissingNumber,

    /// The converter amount did not parse.
    #[error("Enter Amount")]
    MissingAmount,

    /// At least one field of a multi-field utility did not parse.
    #[error("Enter all numbers")]
    MissingNumbers,

    /// Factorial of a negative number.
    #[error("Invalid number")]
    InvalidNumber,

    /// Division with a divisor of exactly zero.
    #[error("Cannot divide by zero")]
    DivideByZero,
}
