// ============================================================================
// Numeric Errors
// Error types for the fallible edges of ScaledValue
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or converting a `ScaledValue`.
///
/// Arithmetic on `ScaledValue` is total and never produces these; only
/// string parsing and conversion to `rust_decimal::Decimal` can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string or value could not be parsed
    InvalidInput,
    /// Value is NaN or infinite and cannot cross a finite-only boundary
    NotFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NotFinite => {
                write!(f, "value is NaN or infinite and has no finite representation")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: could not parse value"
        );
        assert_eq!(
            NumericError::NotFinite.to_string(),
            "value is NaN or infinite and has no finite representation"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidInput, NumericError::InvalidInput);
        assert_ne!(NumericError::InvalidInput, NumericError::NotFinite);
    }
}
