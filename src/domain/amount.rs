// ============================================================================
// Monetary Amount
// Validated dollars-and-cents value split from a decimal amount
// ============================================================================

use crate::numeric::{ConversionError, ConversionResult, AMOUNT_LIMIT_DECIMAL};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-negative amount split into whole dollars and cents.
///
/// Cents are the first two fractional digits, truncated toward zero:
/// `1.566` becomes 1 dollar and 56 cents.
///
/// # Example
/// ```
/// use money_words::domain::MonetaryAmount;
/// use rust_decimal::Decimal;
///
/// let amount = MonetaryAmount::from_decimal(Decimal::new(1566, 3)).unwrap();
/// assert_eq!(amount.dollars(), 1);
/// assert_eq!(amount.cents(), 56);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonetaryAmount {
    dollars: u32,
    cents: u8,
}

impl MonetaryAmount {
    /// Zero dollars and zero cents
    pub const ZERO: Self = Self {
        dollars: 0,
        cents: 0,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Split a decimal amount within `[0, 2,000,000,000]`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the amount is negative or above the limit.
    pub fn from_decimal(amount: Decimal) -> ConversionResult<Self> {
        Self::from_decimal_bounded(amount, AMOUNT_LIMIT_DECIMAL)
    }

    /// Split a decimal amount within `[0, max]`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the amount is negative or above `max`.
    pub fn from_decimal_bounded(amount: Decimal, max: Decimal) -> ConversionResult<Self> {
        if amount < Decimal::ZERO || amount > max {
            return Err(ConversionError::OutOfRange { amount, max });
        }

        // Drops the sign of a negative zero such as "-0.00"
        let amount = amount.abs();

        let out_of_range = || ConversionError::OutOfRange { amount, max };
        let dollars = amount.trunc().to_u32().ok_or_else(out_of_range)?;
        let cents = (amount.fract() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u8()
            .ok_or_else(out_of_range)?;

        Ok(Self { dollars, cents })
    }

    /// Create from whole dollars and cents.
    ///
    /// # Errors
    /// - `InvalidInput` if `cents` is 100 or more
    /// - `OutOfRange` if the amount is above 2,000,000,000
    pub fn from_parts(dollars: u32, cents: u8) -> ConversionResult<Self> {
        if cents >= 100 {
            return Err(ConversionError::InvalidInput);
        }

        let amount = Self { dollars, cents };
        amount.check_max(AMOUNT_LIMIT_DECIMAL)?;
        Ok(amount)
    }

    /// Fail with `OutOfRange` if this amount is above `max`.
    pub fn check_max(self, max: Decimal) -> ConversionResult<()> {
        let amount = self.to_decimal();
        if amount > max {
            return Err(ConversionError::OutOfRange { amount, max });
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whole dollars (integer part, truncated toward zero).
    #[inline]
    pub const fn dollars(self) -> u32 {
        self.dollars
    }

    /// Cents in `0..=99`.
    #[inline]
    pub const fn cents(self) -> u8 {
        self.cents
    }

    /// Back to a decimal with two fractional digits.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.dollars) + Decimal::new(i64::from(self.cents), 2)
    }
}

impl Default for MonetaryAmount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Decimal> for MonetaryAmount {
    type Error = ConversionError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(amount)
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars, self.cents)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Parse user text into a decimal amount.
///
/// Surrounding whitespace and `,` group separators are ignored, so
/// `" 1,234.56 "` parses as `1234.56`. No range check is applied.
///
/// # Errors
/// Returns `InvalidInput` for empty or non-numeric text.
pub fn parse_decimal(s: &str) -> ConversionResult<Decimal> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(ConversionError::InvalidInput);
    }
    Decimal::from_str(&cleaned).map_err(|_| ConversionError::InvalidInput)
}

impl FromStr for MonetaryAmount {
    type Err = ConversionError;

    /// Parse and validate an amount.
    ///
    /// # Examples
    /// - "1234.56" -> 1234 dollars, 56 cents
    /// - "0.01" -> 0 dollars, 1 cent
    /// - "-1" -> `OutOfRange`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(parse_decimal(s)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_decimal_splits_parts() {
        let amount = MonetaryAmount::from_decimal(Decimal::new(123456, 2)).unwrap();
        assert_eq!(amount.dollars(), 1234);
        assert_eq!(amount.cents(), 56);
    }

    #[test]
    fn test_cents_are_truncated() {
        let amount = MonetaryAmount::from_decimal(Decimal::new(1566, 3)).unwrap();
        assert_eq!(amount.cents(), 56);

        let amount = MonetaryAmount::from_decimal(Decimal::new(9999, 4)).unwrap();
        assert_eq!(amount.dollars(), 0);
        assert_eq!(amount.cents(), 99);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(
            MonetaryAmount::from_decimal(Decimal::ZERO).unwrap(),
            MonetaryAmount::ZERO
        );

        let max = MonetaryAmount::from_decimal(AMOUNT_LIMIT_DECIMAL).unwrap();
        assert_eq!(max.dollars(), 2_000_000_000);
        assert_eq!(max.cents(), 0);
    }

    #[test]
    fn test_out_of_range() {
        let above = Decimal::new(200000000001, 2);
        assert_eq!(
            MonetaryAmount::from_decimal(above),
            Err(ConversionError::OutOfRange {
                amount: above,
                max: AMOUNT_LIMIT_DECIMAL,
            })
        );

        let below = Decimal::new(-1, 2);
        assert!(matches!(
            MonetaryAmount::from_decimal(below),
            Err(ConversionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_custom_bound() {
        let max = Decimal::from(1000);
        assert!(MonetaryAmount::from_decimal_bounded(Decimal::from(1000), max).is_ok());
        assert!(MonetaryAmount::from_decimal_bounded(Decimal::new(100001, 2), max).is_err());
    }

    #[test]
    fn test_negative_zero() {
        let amount: MonetaryAmount = "-0.00".parse().unwrap();
        assert_eq!(amount, MonetaryAmount::ZERO);
    }

    #[test]
    fn test_from_parts() {
        let amount = MonetaryAmount::from_parts(5, 7).unwrap();
        assert_eq!(amount.to_string(), "5.07");
        assert_eq!(amount.to_decimal(), Decimal::new(507, 2));

        assert_eq!(
            MonetaryAmount::from_parts(5, 100),
            Err(ConversionError::InvalidInput)
        );
    }

    #[test]
    fn test_from_parts_above_limit() {
        assert_eq!(
            MonetaryAmount::from_parts(2_000_000_000, 1),
            Err(ConversionError::OutOfRange {
                amount: Decimal::new(200000000001, 2),
                max: AMOUNT_LIMIT_DECIMAL,
            })
        );
        assert!(matches!(
            MonetaryAmount::from_parts(3_000_000_000, 0),
            Err(ConversionError::OutOfRange { .. })
        ));
        assert!(MonetaryAmount::from_parts(2_000_000_000, 0).is_ok());
    }

    #[test]
    fn test_check_max() {
        let amount = MonetaryAmount::from_parts(500, 0).unwrap();
        assert!(amount.check_max(Decimal::from(500)).is_ok());
        assert_eq!(
            amount.check_max(Decimal::from(10)),
            Err(ConversionError::OutOfRange {
                amount: Decimal::from(500),
                max: Decimal::from(10),
            })
        );
    }

    #[test]
    fn test_from_str() {
        let amount: MonetaryAmount = " 1,234.56 ".parse().unwrap();
        assert_eq!(amount.dollars(), 1234);
        assert_eq!(amount.cents(), 56);

        let amount: MonetaryAmount = "42".parse().unwrap();
        assert_eq!(amount.to_string(), "42.00");
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<MonetaryAmount, _> = "not_a_number".parse();
        assert_eq!(result, Err(ConversionError::InvalidInput));

        let result: Result<MonetaryAmount, _> = "   ".parse();
        assert_eq!(result, Err(ConversionError::InvalidInput));

        let result: Result<MonetaryAmount, _> = "-5".parse();
        assert!(matches!(result, Err(ConversionError::OutOfRange { .. })));
    }

    proptest! {
        #[test]
        fn prop_cents_truncated_never_rounded(
            dollars in 0u32..2_000_000_000,
            cents in 0u8..100,
            extra in 0u32..10,
        ) {
            // dollars.cents followed by one sub-cent digit
            let amount = Decimal::from(dollars)
                + Decimal::new(i64::from(cents) * 10 + i64::from(extra), 3);
            let split = MonetaryAmount::from_decimal(amount).unwrap();

            prop_assert_eq!(split.dollars(), dollars);
            prop_assert_eq!(split.cents(), cents);
            prop_assert!(split.cents() <= 99);
            prop_assert!(split.to_decimal() <= amount);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let amount = MonetaryAmount::from_parts(12, 34).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, r#"{"dollars":12,"cents":34}"#);
        let back: MonetaryAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
