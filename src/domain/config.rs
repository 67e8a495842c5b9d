// ============================================================================
// Formatter Configuration
// Range and output settings for monetary conversion
// ============================================================================

use crate::numeric::AMOUNT_LIMIT_DECIMAL;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Formatter Configuration
// ============================================================================

/// Configuration for a monetary formatter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatterConfig {
    /// Largest amount accepted (inclusive). Defaults to 2,000,000,000
    /// and may only be lowered.
    pub max_amount: Decimal,
}

impl FormatterConfig {
    /// Create a configuration accepting the full `[0, 2,000,000,000]` range
    pub fn new() -> Self {
        Self {
            max_amount: AMOUNT_LIMIT_DECIMAL,
        }
    }

    /// Builder method: Set the inclusive upper bound
    pub fn with_max_amount(mut self, max_amount: Decimal) -> Self {
        self.max_amount = max_amount;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_amount <= Decimal::ZERO {
            return Err("Maximum amount must be positive".to_string());
        }

        if self.max_amount > AMOUNT_LIMIT_DECIMAL {
            return Err(format!(
                "Maximum amount cannot exceed {}",
                AMOUNT_LIMIT_DECIMAL
            ));
        }

        Ok(())
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Prompt Configuration
// ============================================================================

/// Configuration for the interactive console session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PromptConfig {
    /// Print the usage banner before the first prompt
    pub show_banner: bool,

    /// Echo the parsed amount before its words
    pub echo_amount: bool,
}

impl PromptConfig {
    pub fn new() -> Self {
        Self {
            show_banner: true,
            echo_amount: true,
        }
    }

    /// Builder method: Toggle the usage banner
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Builder method: Toggle echoing of the parsed amount
    pub fn with_echo(mut self, echo_amount: bool) -> Self {
        self.echo_amount = echo_amount;
        self
    }

    /// Bare output: words only, one block per amount
    pub fn quiet() -> Self {
        Self::new().with_banner(false).with_echo(false)
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self::new()
    }
}
