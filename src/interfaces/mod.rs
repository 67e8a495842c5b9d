// ============================================================================
// Interfaces Module
// Contains trait definitions (contracts) for pluggable components
// ============================================================================

pub mod numeral_converter;

pub use numeral_converter::NumeralConverter;
