// ============================================================================
// English Numerals
// Spells out whole numbers by walking descending magnitude groups
// ============================================================================

use crate::interfaces::NumeralConverter;
use crate::numeric::{MAGNITUDES, ONES, TENS, ZERO_WORD};

/// English numeral converter.
///
/// Numbers are split on billion, million, thousand and hundred. Each group
/// quotient is spelled recursively, so `100_000` reads "one hundred thousand".
/// No "and" and no hyphens are emitted: 1234 reads
/// "one thousand two hundred thirty four".
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNumerals;

impl EnglishNumerals {
    pub fn new() -> Self {
        Self
    }

    /// Append the words for `n` (non-zero) to `out`.
    fn push_words(mut n: u32, out: &mut String) {
        for magnitude in MAGNITUDES.iter() {
            let quotient = n / magnitude.threshold;
            if quotient > 0 {
                Self::push_words(quotient, out);
                push_word(out, magnitude.name);
                n %= magnitude.threshold;
            }
        }

        if n >= 20 {
            push_word(out, TENS[(n / 10) as usize]);
            n %= 10;
        }

        if n > 0 {
            push_word(out, ONES[n as usize]);
        }
    }
}

/// Append `word`, separated by a single space from anything before it.
#[inline]
fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}

impl NumeralConverter for EnglishNumerals {
    fn words(&self, n: u32) -> String {
        if n == 0 {
            return ZERO_WORD.to_string();
        }

        let mut out = String::new();
        Self::push_words(n, &mut out);
        out
    }

    fn name(&self) -> &str {
        "English"
    }
}

/// Spell out `n` with the English converter.
///
/// # Example
/// ```
/// assert_eq!(money_words::engine::words(0), "zero");
/// assert_eq!(money_words::engine::words(115), "one hundred fifteen");
/// ```
pub fn words(n: u32) -> String {
    EnglishNumerals.words(n)
}
