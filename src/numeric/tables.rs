// ============================================================================
// Word Tables
// Immutable lookup tables for English numerals
// ============================================================================

use rust_decimal::Decimal;

/// Largest amount (in dollars) the converter accepts.
pub const AMOUNT_LIMIT: u32 = 2_000_000_000;

/// [`AMOUNT_LIMIT`] as a decimal, for range checks on raw amounts.
pub const AMOUNT_LIMIT_DECIMAL: Decimal = Decimal::from_parts(AMOUNT_LIMIT, 0, 0, false, 0);

/// Word rendered for a bare zero.
pub const ZERO_WORD: &str = "zero";

/// A named power of ten used to split a number into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    pub threshold: u32,
    pub name: &'static str,
}

impl Magnitude {
    const fn new(threshold: u32, name: &'static str) -> Self {
        Self { threshold, name }
    }
}

/// Magnitudes in strictly descending order.
pub const MAGNITUDES: [Magnitude; 4] = [
    Magnitude::new(1_000_000_000, "billion"),
    Magnitude::new(1_000_000, "million"),
    Magnitude::new(1_000, "thousand"),
    Magnitude::new(100, "hundred"),
];

/// Words for 0-19. Index 0 is never rendered.
pub const ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for 20, 30, ... 90 indexed by the tens digit. Indices 0 and 1 are unused.
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitudes_strictly_descending() {
        for pair in MAGNITUDES.windows(2) {
            assert!(pair[0].threshold > pair[1].threshold);
            assert_eq!(pair[0].threshold % pair[1].threshold, 0);
        }
    }

    #[test]
    fn test_table_shapes() {
        assert_eq!(ONES[0], "");
        assert_eq!(ONES[19], "nineteen");
        assert_eq!(TENS[1], "");
        assert_eq!(TENS[9], "ninety");
        assert!(ONES[1..].iter().all(|w| !w.is_empty()));
        assert!(TENS[2..].iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_limit_decimal() {
        assert_eq!(AMOUNT_LIMIT_DECIMAL, Decimal::from(AMOUNT_LIMIT));
        assert_eq!(AMOUNT_LIMIT_DECIMAL.to_string(), "2000000000");
    }
}
