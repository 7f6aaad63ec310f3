//! Line-oriented prompting with re-prompt on malformed input.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{AppError, Result};

/// Reads trimmed answers from `input`, echoing prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    /// A prompt was written and nothing has ended its line yet.
    mid_line: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            mid_line: false,
        }
    }

    /// Write one line of output.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the output cannot be written.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        self.mid_line = false;
        Ok(())
    }

    /// Write `line` so that it occupies an output line of its own.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the output cannot be written.
    pub fn say_own_line(&mut self, line: &str) -> Result<()> {
        if self.mid_line {
            writeln!(self.output)?;
        }
        self.say(line)
    }

    /// Show `prompt` and read one trimmed line, possibly empty.
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` at end of input, or `Io` on read/write failure.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.mid_line = !prompt.is_empty();

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Read until a non-empty line arrives.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read_line`].
    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.say("Input cannot be empty. Try again.")?;
        }
    }

    /// Read until a line parses as an integer.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read_line`].
    pub fn read_int(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Invalid number. Try again.")?,
            }
        }
    }

    /// Read until a strictly positive integer arrives.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read_line`].
    pub fn read_positive(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let n = self.read_int(prompt)?;
            match u32::try_from(n) {
                Ok(value) if value > 0 => return Ok(value),
                _ => self.say("Please enter a positive integer.")?,
            }
        }
    }

    /// Read until a non-empty line parses as `T`, printing `retry` otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read_line`].
    pub fn read_parsed<T: FromStr>(&mut self, prompt: &str, retry: &str) -> Result<T> {
        loop {
            let line = self.read_non_empty(prompt)?;
            match line.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(retry)?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
