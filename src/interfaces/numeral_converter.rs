// ============================================================================
// Numeral Converter Interface
// Defines the contract for turning integers into words
// ============================================================================

/// Strategy interface for spelling out whole numbers.
/// Implementations: EnglishNumerals
pub trait NumeralConverter: Send + Sync {
    /// Spell out `n` as a lowercase word sequence.
    ///
    /// Words are separated by exactly one space with no leading or trailing
    /// whitespace. Zero is rendered as a word, never as an empty string.
    fn words(&self, n: u32) -> String;

    /// Get the converter name for logging
    fn name(&self) -> &str;
}
