// ============================================================================
// Domain Models Module
// Contains the monetary value objects and their configuration
// ============================================================================

pub mod amount;
pub mod config;
pub mod unit;

pub use amount::{parse_decimal, MonetaryAmount};
pub use config::{FormatterConfig, PromptConfig};
pub use unit::Unit;
