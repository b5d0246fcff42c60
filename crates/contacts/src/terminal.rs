use std::io::{BufRead, Write};

use contacts_types::{is_valid, Field};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed while waiting for a response")]
    InputClosed,
}

/// Line-oriented prompt/response over any reader and writer, so flows can be
/// driven by stdin or by scripted input.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn color(&self) -> bool {
        self.color
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub fn ask_field(&mut self, field: Field) -> Result<String, PromptError> {
        let value = self.ask(&format!("Enter {}: ", field))?;
        self.until_valid(field, value)
    }

    /// Asks for a replacement value. A blank first answer keeps the current
    /// value and yields `None`; once an invalid answer was given, only a
    /// valid one ends the loop.
    pub fn ask_replacement(&mut self, field: Field) -> Result<Option<String>, PromptError> {
        let value = self.ask(&format!(
            "Enter new {} [leave blank to don't change] : ",
            field
        ))?;
        if value.is_empty() {
            return Ok(None);
        }
        self.until_valid(field, value).map(Some)
    }

    fn until_valid(&mut self, field: Field, mut value: String) -> Result<String, PromptError> {
        while !is_valid(field, &value) {
            warn!("Rejected {} input {:?}", field, value);
            self.say(&format!("Invalid {}", field))?;
            value = self.ask(&format!("Enter {}: ", field))?;
        }
        Ok(value)
    }
}
