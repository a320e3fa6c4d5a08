//! Line-oriented prompting over any reader/writer pair

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::{Context, Result, bail};

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one trimmed line.
    ///
    /// # Errors
    ///
    /// Fails when the input is closed before a line arrives.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            bail!("input closed while waiting for an answer");
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses and passes `accept`, switching to `retry`
    /// after the first rejection.
    pub fn ask_until<T, F>(&mut self, question: &str, retry: &str, mut accept: F) -> Result<T>
    where
        T: FromStr,
        F: FnMut(&T) -> bool,
    {
        let mut current = question;
        loop {
            let answer = self.ask(current)?;
            match answer.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => current = retry,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn ask_returns_trimmed_line() {
        let mut prompter = Prompter::new(Cursor::new("  X \n"), Vec::new());
        assert_eq!(prompter.ask("Pick: ").unwrap(), "X");
        assert_eq!(prompter.into_output(), b"Pick: ");
    }

    #[test]
    fn ask_fails_on_closed_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert!(prompter.ask("Pick: ").is_err());
    }

    #[test]
    fn ask_until_retries_with_retry_text() {
        let mut prompter = Prompter::new(Cursor::new("abc\n12\n3\n"), Vec::new());
        let value: usize = prompter
            .ask_until("Depth: ", "Again: ", |&d| (1..=9).contains(&d))
            .unwrap();

        assert_eq!(value, 3);
        let text = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(text, "Depth: Again: Again: ");
    }
}
