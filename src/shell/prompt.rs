//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};

use crate::error::FlowResult;

/// Reads answers from `input`, writing prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output
    pub fn say(&mut self, text: &str) -> FlowResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text without a trailing newline
    pub fn say_raw(&mut self, text: &str) -> FlowResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompt for a line of input
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt_string(&mut self, prompt: &str) -> FlowResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until a positive number is entered
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt_amount(&mut self, prompt: &str) -> FlowResult<Option<f64>> {
        loop {
            let Some(answer) = self.prompt_string(prompt)? else {
                return Ok(None);
            };

            match parse_amount(&answer) {
                Some(value) if value > 0.0 => return Ok(Some(value)),
                Some(_) => self.say("Amount must be greater than zero.")?,
                None => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Give back the output sink (used by tests)
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a user-entered number, rejecting NaN and infinities
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
