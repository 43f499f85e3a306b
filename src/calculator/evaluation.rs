//! The result handed back to whoever drives the calculators.
//!
//! Each utility's `run` entry point takes raw field text and answers with a
//! [`CalcResult`]: either the formatted value or the failure message that
//! replaces it.

use super::CalcError;

/// Outcome of running a calculator on raw input.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// The calculation produced a value.
    Success {
        /// The value formatted for display.
        display_result: String,
    },
    /// Input validation failed.
    Error {
        /// What went wrong; its `Display` text is the message to show.
        error: CalcError,
    },
}

impl CalcResult {
    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> String {
        match self {
            Self::Success { display_result } => display_result.clone(),
            Self::Error { error } => error.to_string(),
        }
    }

    /// Get the failure, if any.
    pub fn error(&self) -> Option<CalcError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error } => Some(*error),
        }
    }
}

impl From<Result<String, CalcError>> for CalcResult {
    fn from(result: Result<String, CalcError>) -> Self {
        match result {
            Ok(display_result) => Self::Success { display_result },
            Err(error) => {
                tracing::trace!(%error, "calculation rejected");
                Self::Error { error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result = CalcResult::from(Ok("42".to_string()));
        assert!(result.is_success());
        assert_eq!(result.display(), "42");
        assert_eq!(result.error(), None);
    }

    #[test]
    fn test_error_displays_message() {
        let result = CalcResult::from(Err(CalcError::DivideByZero));
        assert!(!result.is_success());
        assert_eq!(result.display(), "Cannot divide by zero");
        assert_eq!(result.error(), Some(CalcError::DivideByZero));
    }
}
