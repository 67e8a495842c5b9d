// ============================================================================
// Formatter Factory
// Creates monetary formatters with validated configuration
// ============================================================================

use crate::domain::FormatterConfig;
use crate::engine::{EnglishNumerals, MonetaryFormatter};
use crate::interfaces::NumeralConverter;
use rust_decimal::Decimal;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an English formatter from configuration
///
/// # Returns
/// * `Result<MonetaryFormatter, String>` - Configured formatter or error
///
/// # Example
/// ```
/// use money_words::prelude::*;
/// use money_words::engine::factory::create_from_config;
///
/// let formatter = create_from_config(FormatterConfig::default()).unwrap();
/// ```
pub fn create_from_config(config: FormatterConfig) -> Result<MonetaryFormatter, String> {
    config.validate()?;
    Ok(MonetaryFormatter::new(Box::new(EnglishNumerals::new()), config))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating formatters with fluent API
///
/// # Example
/// ```
/// use money_words::engine::factory::MonetaryFormatterBuilder;
/// use rust_decimal::Decimal;
///
/// let formatter = MonetaryFormatterBuilder::new()
///     .with_max_amount(Decimal::from(1_000_000))
///     .build()
///     .unwrap();
/// assert!(formatter.to_words(Decimal::from(1_000_001)).is_err());
/// ```
pub struct MonetaryFormatterBuilder {
    config: FormatterConfig,
    converter: Option<Box<dyn NumeralConverter>>,
}

impl MonetaryFormatterBuilder {
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
            converter: None,
        }
    }

    /// Set the inclusive upper bound
    pub fn with_max_amount(mut self, max_amount: Decimal) -> Self {
        self.config = self.config.with_max_amount(max_amount);
        self
    }

    /// Use a different numeral converter (defaults to English)
    pub fn with_converter(mut self, converter: Box<dyn NumeralConverter>) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Build the formatter
    pub fn build(self) -> Result<MonetaryFormatter, String> {
        self.config.validate()?;
        let converter = self
            .converter
            .unwrap_or_else(|| Box::new(EnglishNumerals::new()));
        Ok(MonetaryFormatter::new(converter, self.config))
    }
}

impl Default for MonetaryFormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DigitsConverter;

    impl NumeralConverter for DigitsConverter {
        fn words(&self, n: u32) -> String {
            n.to_string()
        }

        fn name(&self) -> &str {
            "Digits"
        }
    }

    #[test]
    fn test_create_from_config() {
        let formatter = create_from_config(FormatterConfig::default()).unwrap();
        assert_eq!(
            formatter.to_words(Decimal::from(7)).unwrap(),
            "seven DOLLARS AND zero CENTS"
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FormatterConfig::new().with_max_amount(Decimal::NEGATIVE_ONE);
        assert!(create_from_config(config).is_err());

        let result = MonetaryFormatterBuilder::new()
            .with_max_amount(Decimal::from(3_000_000_000u32))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_with_converter() {
        let formatter = MonetaryFormatterBuilder::new()
            .with_converter(Box::new(DigitsConverter))
            .build()
            .unwrap();

        assert_eq!(
            formatter.to_words(Decimal::new(4201, 2)).unwrap(),
            "42 DOLLARS AND 1 CENT"
        );
    }
}
