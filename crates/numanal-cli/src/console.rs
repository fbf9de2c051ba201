//! Prompt-and-read helpers over any buffered reader and writer.
//!
//! Every prompt follows the same convention: a blank line (or end of input)
//! cancels, and a line with a token of the wrong type is rejected with a
//! message and asked for again.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use numanal_core::{parse_floats, parse_ints, parse_yes_no, InputError};

/// Terminal-like input/output pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Shows `prompt` and reads one line, trimmed. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input runs out mid-prompt.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads a non-blank line of free text. `None` means cancel.
    pub fn read_text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.read_line(prompt)?.filter(|line| !line.is_empty()))
    }

    /// Reads a line of whitespace-separated integers. `None` means cancel;
    /// the returned vector is never empty.
    pub fn read_ints(&mut self, prompt: &str) -> io::Result<Option<Vec<i64>>> {
        self.read_parsed(prompt, parse_ints)
    }

    /// Reads a line of whitespace-separated decimals. `None` means cancel;
    /// the returned vector is never empty.
    pub fn read_floats(&mut self, prompt: &str) -> io::Result<Option<Vec<f64>>> {
        self.read_parsed(prompt, parse_floats)
    }

    /// Asks until the answer is yes or no. End of input counts as no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let prompt = format!("{} (y/n): ", prompt);
        loop {
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(false);
            };
            if let Some(yes) = parse_yes_no(&answer) {
                return Ok(yes);
            }
            self.blank()?;
            self.say("Input yes or no")?;
        }
    }

    fn read_parsed<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<Vec<T>, InputError>,
    ) -> io::Result<Option<Vec<T>>> {
        loop {
            let Some(line) = self.read_text(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(values) => return Ok(Some(values)),
                Err(e) => self.say(format!("Error: {}!", e))?,
            }
        }
    }
}
