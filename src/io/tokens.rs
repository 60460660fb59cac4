//! Whitespace token stream over the data section of a MatrixMarket file

use std::io::BufRead;

use crate::error::{MatrixError, Result};

/// Reads one raw line, newline included; returns 0 at end of stream
pub(crate) fn read_raw_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<usize> {
    buf.clear();
    Ok(reader.read_until(b'\n', buf)?)
}

/// Whether the line is a `%` comment, checked on raw bytes so that comments
/// in any encoding are skipped without being decoded
pub(crate) fn is_comment(line: &[u8]) -> bool {
    line.iter()
        .find(|b| !b.is_ascii_whitespace())
        .map_or(false, |&b| b == b'%')
}

pub(crate) fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// Yields whitespace-separated tokens regardless of line breaks
///
/// Entries are read token by token rather than line by line, so a value
/// token left on the stream is picked up by the next read. Lines starting
/// with `%` are skipped.
pub(crate) struct Tokens<R> {
    reader: R,
    line: Vec<u8>,
    pos: usize,
    line_no: usize,
}

impl<R: BufRead> Tokens<R> {
    /// `line_no` is the number of lines already consumed from `reader`
    pub fn new(reader: R, line_no: usize) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pos: 0,
            line_no,
        }
    }

    /// 1-based number of the line the last token came from
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Returns the next token with its line number, or `None` at end of stream
    pub fn next_token(&mut self) -> Result<Option<(usize, &str)>> {
        let (start, end) = loop {
            if let Some(span) = self.find_token() {
                break span;
            }
            if !self.advance_line()? {
                return Ok(None);
            }
        };

        self.pos = end;
        let line_no = self.line_no;
        let token = std::str::from_utf8(&self.line[start..end])
            .map_err(|_| MatrixError::malformed(line_no, "token is not valid UTF-8"))?;
        Ok(Some((line_no, token)))
    }

    fn find_token(&self) -> Option<(usize, usize)> {
        let rest = &self.line[self.pos..];
        let start = self.pos + rest.iter().position(|b| !b.is_ascii_whitespace())?;

        let len = self.line[start..]
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(self.line.len() - start);
        Some((start, start + len))
    }

    fn advance_line(&mut self) -> Result<bool> {
        self.pos = 0;

        if read_raw_line(&mut self.reader, &mut self.line)? == 0 {
            return Ok(false);
        }
        self.line_no += 1;

        if is_comment(&self.line) {
            self.line.clear();
        }
        Ok(true)
    }
}
