// ============================================================================
// Prompt Session
// Interactive read-convert-print loop over any line-based input
// ============================================================================

use crate::domain::{parse_decimal, PromptConfig};
use crate::engine::MonetaryFormatter;
use std::io::{self, BufRead, Write};

pub const BANNER: &str = "This program can take numerical monetary value \
in dollars and cents within range of 0 and 2,000,000,000 and produce its \
English equivalent. Use Ctrl+C or input anything else to exit.";

pub const PROMPT: &str = "Enter the monetary amount: ";
pub const REJECTED: &str = "Incorrect input, terminating...";
pub const GOODBYE: &str = "Thank you for using this program. Goodbye.";

/// Console session that converts amounts until the input is rejected.
///
/// The loop stops at end of input, on text that is not a decimal number, and
/// on amounts outside the formatter's range.
pub struct PromptSession<R, W> {
    input: R,
    output: W,
    formatter: MonetaryFormatter,
    config: PromptConfig,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, MonetaryFormatter::english(), PromptConfig::default())
    }

    pub fn with_config(
        input: R,
        output: W,
        formatter: MonetaryFormatter,
        config: PromptConfig,
    ) -> Self {
        Self {
            input,
            output,
            formatter,
            config,
        }
    }

    /// Run the loop to completion.
    ///
    /// # Returns
    /// Number of amounts converted before the session ended.
    ///
    /// # Errors
    /// Only I/O errors from the underlying reader or writer.
    pub fn run(&mut self) -> io::Result<usize> {
        if self.config.show_banner {
            writeln!(self.output, "{}", BANNER)?;
            writeln!(self.output)?;
        }

        let mut converted = 0;
        while self.step()? {
            converted += 1;
        }

        writeln!(self.output, "{}", GOODBYE)?;
        self.output.flush()?;

        tracing::debug!("Prompt session ended after {} conversions", converted);
        Ok(converted)
    }

    /// Prompt for and convert one amount. Returns `false` when the session should end.
    fn step(&mut self) -> io::Result<bool> {
        writeln!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output, "{}", REJECTED)?;
            return Ok(false);
        }

        let amount = match parse_decimal(&line) {
            Ok(amount) => amount,
            Err(err) => {
                tracing::warn!("Rejected input {:?}: {}", line.trim_end(), err);
                writeln!(self.output, "{}", REJECTED)?;
                return Ok(false);
            }
        };

        match self.formatter.to_words(amount) {
            Ok(text) => {
                if self.config.echo_amount {
                    writeln!(
                        self.output,
                        "Here is English representation of number {}:",
                        amount
                    )?;
                }
                writeln!(self.output, "{}", text)?;
                writeln!(self.output)?;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!("Rejected amount {}: {}", amount, err);
                writeln!(self.output, "{}", err)?;
                writeln!(self.output, "{}", REJECTED)?;
                Ok(false)
            }
        }
    }

    /// Consume the session and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
