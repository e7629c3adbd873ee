//! Prompt/validation loops for console input
//!
//! All interactive input funnels through [`read_bounded`]: it keeps
//! re-prompting until the reader produces an integer inside the requested
//! range, so callers never see malformed input.

use std::io::{BufRead, Write};

use crate::{Error, Result};

/// Prompt until the reader produces an integer in `[lower, upper]`.
///
/// Parse failures and out-of-range values print an error line and
/// re-prompt. An exhausted reader (console closed) is the one condition
/// that escapes the loop as an error.
///
/// # Errors
/// Returns [`Error::InputClosed`] on end of input, or an IO error if the
/// console itself fails.
pub fn read_bounded<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    lower: i64,
    upper: i64,
) -> Result<i64> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        match line.trim().parse::<i64>() {
            Ok(value) if (lower..=upper).contains(&value) => return Ok(value),
            Ok(value) => writeln!(output, "{value} is not in range [{lower}, {upper}].")?,
            Err(_) => writeln!(output, "Please enter a whole number in [{lower}, {upper}].")?,
        }
    }
}
