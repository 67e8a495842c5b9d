// ============================================================================
// Numeric Module
// Word tables, range limits and error types shared by the converter
// ============================================================================
//
// This module provides:
// - ONES / TENS / MAGNITUDES: immutable English numeral tables
// - AMOUNT_LIMIT: the largest dollar amount accepted
// - ConversionError: error type for range and parse failures
//
// Design principles:
// - Tables are `const` and never mutated
// - Magnitudes are strictly descending and divide each other evenly
// - All fallible operations return Result (no panics)

mod errors;
mod tables;

pub use errors::{ConversionError, ConversionResult};
pub use tables::{
    Magnitude, AMOUNT_LIMIT, AMOUNT_LIMIT_DECIMAL, MAGNITUDES, ONES, TENS, ZERO_WORD,
};
