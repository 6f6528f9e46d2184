use anyhow::Result;
use std::io::{BufRead, Write};

/// Line-oriented question/answer over any reader and writer, so the whole
/// conversation can be driven from a byte slice in tests.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `msg [default]: ` and return the trimmed answer, or `default`
    /// when the answer is blank. End of input counts as a blank answer.
    pub fn ask(&mut self, msg: &str, default: &str) -> Result<String> {
        write!(self.writer, "{msg} [{default}]: ")?;
        self.writer.flush()?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Yes/no question defaulting to yes. Only `n` (any case) declines.
    pub fn confirm(&mut self, msg: &str) -> Result<bool> {
        write!(self.writer, "{msg} [Y/n]: ")?;
        self.writer.flush()?;

        let answer = self.read_answer()?;
        Ok(answer.to_lowercase() != "n")
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut input = String::new();
        self.reader.read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}
