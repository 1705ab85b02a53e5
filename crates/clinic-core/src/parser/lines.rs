//! Line reader that keeps track of 1-based line numbers.

use std::io::BufRead;

use super::{ParseError, ParseResult, Section};

pub(super) struct LineReader<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub(super) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Next line with its number, or `None` at end of input.
    pub(super) fn next_line(&mut self) -> ParseResult<Option<(usize, String)>> {
        match self.lines.next() {
            Some(text) => {
                self.line += 1;
                Ok(Some((self.line, text?)))
            }
            None => Ok(None),
        }
    }

    /// Read a section's record count.
    pub(super) fn count(&mut self, section: Section) -> ParseResult<usize> {
        let (line, text) = self
            .next_line()?
            .ok_or(ParseError::MissingCount { section })?;
        text.trim()
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidCount {
                line,
                section,
                value: text,
            })
    }

    /// Read record `index` of a section that declared `expected` records.
    pub(super) fn record(
        &mut self,
        section: Section,
        expected: usize,
        index: usize,
    ) -> ParseResult<(usize, String)> {
        self.next_line()?.ok_or(ParseError::UnexpectedEof {
            section,
            expected,
            found: index,
        })
    }
}
