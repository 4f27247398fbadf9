//! Feeds text to the pipeline and writes the results.
//!
//! Two modes:
//! - arguments are joined with single spaces and transformed once, since some
//!   rules span word borders ("thank you");
//! - otherwise every input line is transformed on its own.
//!
//! Each result is followed by a newline.

use crate::error::CliResult;
use std::io::{BufRead, Write};

pub struct Driver<W: Write> {
    out: W,
    flush_each_line: bool,
}

impl<W: Write> Driver<W> {
    pub fn new(out: W, flush_each_line: bool) -> Self {
        Self {
            out,
            flush_each_line,
        }
    }

    /// Transform the joined argument list as one text.
    pub fn transform_words<S: AsRef<str>>(&mut self, words: &[S]) -> CliResult<()> {
        let text = words
            .iter()
            .map(|word| word.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!(words = words.len(), "transforming arguments");
        self.emit(&text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Transform `input` line by line until end of stream.
    ///
    /// The `\n` terminator is stripped, anything else (including `\r`) is part of
    /// the line. Invalid UTF-8 is replaced rather than rejected.
    pub fn transform_lines<R: BufRead>(&mut self, mut input: R) -> CliResult<usize> {
        let mut buffer = Vec::new();
        let mut count = 0;

        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            if buffer.last() == Some(&b'\n') {
                buffer.pop();
            }

            self.emit(&String::from_utf8_lossy(&buffer))?;
            if self.flush_each_line {
                self.out.flush()?;
            }
            count += 1;
        }

        self.out.flush()?;
        tracing::debug!(lines = count, "end of input");
        Ok(count)
    }

    fn emit(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.out, "{}", uwu_core::transform(text))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output(driver: Driver<Vec<u8>>) -> String {
        String::from_utf8(driver.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn test_words_are_joined_with_single_spaces() {
        let mut driver = Driver::new(Vec::new(), true);
        driver.transform_words(&["thank", "you"]).unwrap();
        assert_eq!(output(driver), "you're twe best <3333 xoxo\n");
    }

    #[test]
    fn test_single_word() {
        let mut driver = Driver::new(Vec::new(), false);
        driver.transform_words(&["trust"]).unwrap();
        assert_eq!(output(driver), "twust\n");
    }

    #[test]
    fn test_lines_are_transformed_separately() {
        let mut driver = Driver::new(Vec::new(), true);
        let count = driver
            .transform_lines(Cursor::new("hello world\nroar\n\ntrust"))
            .unwrap();
        assert_eq!(count, 4);
        assert_eq!(output(driver), "hiiiiiiiiiiiii worwd\nroar\n\ntwust\n");
    }

    #[test]
    fn test_empty_input() {
        let mut driver = Driver::new(Vec::new(), true);
        assert_eq!(driver.transform_lines(Cursor::new("")).unwrap(), 0);
        assert_eq!(output(driver), "");
    }

    #[test]
    fn test_carriage_return_stays_with_line() {
        let mut driver = Driver::new(Vec::new(), true);
        driver.transform_lines(Cursor::new("water\r\n")).unwrap();
        assert_eq!(output(driver), "wata\r\n");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut driver = Driver::new(Vec::new(), true);
        driver
            .transform_lines(Cursor::new(b"trust \xff\n".to_vec()))
            .unwrap();
        assert_eq!(output(driver), "twust \u{fffd}\n");
    }
}
