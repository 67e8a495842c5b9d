// ============================================================================
// Monetary Formatter
// Renders a dollars-and-cents amount as English words
// ============================================================================

use crate::domain::{FormatterConfig, MonetaryAmount, Unit};
use crate::engine::EnglishNumerals;
use crate::interfaces::NumeralConverter;
use crate::numeric::ConversionResult;
use rust_decimal::Decimal;
use std::fmt;

/// Turns decimal amounts into "... DOLLARS AND ... CENTS" strings.
///
/// Quantities are spelled in lowercase by the numeral converter; unit words
/// and the "AND" joiner are uppercase.
pub struct MonetaryFormatter {
    converter: Box<dyn NumeralConverter>,
    config: FormatterConfig,
}

impl MonetaryFormatter {
    /// Create a formatter with the given numeral converter.
    ///
    /// The configuration is assumed valid; use
    /// [`MonetaryFormatterBuilder`](crate::engine::MonetaryFormatterBuilder)
    /// to have it checked.
    pub fn new(converter: Box<dyn NumeralConverter>, config: FormatterConfig) -> Self {
        Self { converter, config }
    }

    /// English formatter accepting `[0, 2,000,000,000]`.
    pub fn english() -> Self {
        Self::new(Box::new(EnglishNumerals::new()), FormatterConfig::default())
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Convert a decimal amount to words.
    ///
    /// Cents are truncated, not rounded: `1.566` yields "fifty six CENTS".
    ///
    /// # Errors
    /// Returns `OutOfRange` if the amount is negative or above
    /// `config.max_amount`. No partial output is produced.
    ///
    /// # Example
    /// ```
    /// use money_words::engine::MonetaryFormatter;
    /// use rust_decimal::Decimal;
    ///
    /// let formatter = MonetaryFormatter::english();
    /// let text = formatter.to_words(Decimal::new(101, 2)).unwrap();
    /// assert_eq!(text, "one DOLLAR AND one CENT");
    /// ```
    pub fn to_words(&self, amount: Decimal) -> ConversionResult<String> {
        let split = MonetaryAmount::from_decimal_bounded(amount, self.config.max_amount)
            .inspect_err(|err| tracing::debug!("Rejected amount {}: {}", amount, err))?;

        self.format_amount(split)
    }

    /// Render an amount that was already split into dollars and cents.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the amount is above `config.max_amount`.
    pub fn format_amount(&self, amount: MonetaryAmount) -> ConversionResult<String> {
        amount.check_max(self.config.max_amount)?;

        let dollars = amount.dollars();
        let cents = u32::from(amount.cents());

        let text = format!(
            "{} {} AND {} {}",
            self.converter.words(dollars),
            Unit::Dollar.word(dollars),
            self.converter.words(cents),
            Unit::Cent.word(cents),
        );

        tracing::trace!(
            converter = self.converter.name(),
            "Converted {} to {:?}",
            amount,
            text
        );

        Ok(text)
    }
}

impl Default for MonetaryFormatter {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for MonetaryFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonetaryFormatter")
            .field("converter", &self.converter.name())
            .field("config", &self.config)
            .finish()
    }
}

/// Convert a decimal amount in `[0, 2,000,000,000]` to English words.
///
/// # Example
/// ```
/// use money_words::to_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     to_words(Decimal::new(123456, 2)).unwrap(),
///     "one thousand two hundred thirty four DOLLARS AND fifty six CENTS"
/// );
/// ```
pub fn to_words(amount: Decimal) -> ConversionResult<String> {
    MonetaryFormatter::english().to_words(amount)
}
