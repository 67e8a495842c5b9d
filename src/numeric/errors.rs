// ============================================================================
// Conversion Errors
// Error types for amount validation and parsing
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

/// Errors that can occur while turning an amount into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// Amount is negative or above the configured maximum
    OutOfRange {
        /// The rejected amount
        amount: Decimal,
        /// Upper bound that was in force
        max: Decimal,
    },
    /// Text that is not a decimal number, or cents outside 0-99
    InvalidInput,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::OutOfRange { amount, max } => write!(
                f,
                "amount out of range: {} is not between 0 and {}",
                amount, max
            ),
            ConversionError::InvalidInput => {
                write!(f, "invalid input: not a valid dollars and cents amount")
            },
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConversionError::OutOfRange {
            amount: Decimal::new(200000000001, 2),
            max: Decimal::from(2_000_000_000u32),
        };
        assert_eq!(
            err.to_string(),
            "amount out of range: 2000000000.01 is not between 0 and 2000000000"
        );
        assert_eq!(
            ConversionError::InvalidInput.to_string(),
            "invalid input: not a valid dollars and cents amount"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ConversionError::InvalidInput, ConversionError::InvalidInput);
        assert_ne!(
            ConversionError::InvalidInput,
            ConversionError::OutOfRange {
                amount: Decimal::NEGATIVE_ONE,
                max: Decimal::ONE,
            }
        );
    }
}
