//! Line cursor shared by the decoders.

use std::str::FromStr;

use crate::error::{Result, TallyError};

/// Walks the lines of a file body, tracking 1-based line numbers for errors.
///
/// Trailing blank lines are dropped up front so a file ending in extra
/// newlines decodes the same as one ending in a single newline.
pub(crate) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    next: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let mut lines: Vec<&'a str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        Self { lines, next: 0 }
    }

    /// Line number of the most recently consumed line.
    pub(crate) fn line_no(&self) -> usize {
        self.next
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.next >= self.lines.len()
    }

    pub(crate) fn next_line(&mut self, expected: &str) -> Result<&'a str> {
        match self.lines.get(self.next) {
            Some(line) => {
                self.next += 1;
                Ok(line)
            }
            None => Err(TallyError::malformed(
                self.next + 1,
                format!("unexpected end of file, expected {}", expected),
            )),
        }
    }

    pub(crate) fn next_parsed<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let line = self.next_line(expected)?;
        line.trim()
            .parse()
            .map_err(|_| TallyError::malformed(self.line_no(), format!("expected {}, found '{}'", expected, line)))
    }
}
