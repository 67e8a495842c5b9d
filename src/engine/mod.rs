// ============================================================================
// Engine Module
// Contains the numeral and monetary conversion logic
// ============================================================================

mod english_numerals;
mod monetary_formatter;

pub mod factory;

pub use english_numerals::{words, EnglishNumerals};
pub use factory::{create_from_config, MonetaryFormatterBuilder};
pub use monetary_formatter::{to_words, MonetaryFormatter};
