// ============================================================================
// Money Words Library
// Converts dollar and cent amounts into English words
// ============================================================================

//! # Money Words
//!
//! Spells out monetary amounts the way they are written on a check.
//!
//! ## Features
//!
//! - **Numeral conversion** for whole numbers up to two billion
//! - **Dollars and cents** with singular/plural unit words
//! - **Truncated cents**: `1.566` reads as fifty six cents, never fifty seven
//! - **Range checking** against `[0, 2,000,000,000]` or a lower configured bound
//! - **Interactive prompt** session over any `BufRead`/`Write` pair
//!
//! ## Example
//!
//! ```rust
//! use money_words::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let text = to_words(Decimal::new(135725632, 2)).unwrap();
//! assert_eq!(
//!     text,
//!     "one million three hundred fifty seven thousand two hundred fifty six \
//!      DOLLARS AND thirty two CENTS"
//! );
//!
//! assert_eq!(words(42), "forty two");
//!
//! // Amounts above two billion are rejected
//! let err = to_words(Decimal::new(200000000001, 2)).unwrap_err();
//! assert!(matches!(err, ConversionError::OutOfRange { .. }));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod prompt;

pub use engine::{to_words, words};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FormatterConfig, MonetaryAmount, PromptConfig, Unit};
    pub use crate::engine::{
        create_from_config, to_words, words, EnglishNumerals, MonetaryFormatter,
        MonetaryFormatterBuilder,
    };
    pub use crate::interfaces::NumeralConverter;
    pub use crate::numeric::{ConversionError, ConversionResult};
    pub use crate::prompt::PromptSession;
}
