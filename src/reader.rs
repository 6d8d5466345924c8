use std::io::BufRead;

use crate::error::{Error, Result};

/// Initial capacity of the line buffer; `Vec` doubles it as longer lines arrive
const INITIAL_CAPACITY: usize = 256;

/// A line borrowed from the reader's buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Raw bytes, terminator included when present
    pub bytes: &'a [u8],
    /// Number of newline-terminated lines delivered before this one
    pub index: usize,
}

impl Line<'_> {
    pub fn is_terminated(&self) -> bool {
        self.bytes.last() == Some(&b'\n')
    }

    /// Exact byte-prefix comparison
    #[inline]
    pub fn starts_with(&self, tag: &[u8]) -> bool {
        self.bytes.starts_with(tag)
    }
}

/// Reads one line at a time into a single reusable buffer
pub struct LineReader<R> {
    input: R,
    buffer: Vec<u8>,
    /// Newline-terminated lines delivered so far, excluding the current one
    consumed: usize,
    /// Whether the current line ended with a newline
    pending: bool,
    bytes_read: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self::with_capacity(input, INITIAL_CAPACITY)
    }

    pub fn with_capacity(input: R, capacity: usize) -> Self {
        Self {
            input,
            buffer: Vec::with_capacity(capacity),
            consumed: 0,
            pending: false,
            bytes_read: 0,
        }
    }

    /// Fetch the next line, or `None` at end of stream
    pub fn next_line(&mut self) -> Result<Option<Line<'_>>> {
        if self.pending {
            self.consumed += 1;
            self.pending = false;
        }

        self.buffer.clear();
        let n = self.input.read_until(b'\n', &mut self.buffer).map_err(Error::Io)?;
        if n == 0 {
            return Ok(None);
        }

        self.bytes_read += n;
        self.pending = self.buffer.last() == Some(&b'\n');

        Ok(Some(Line {
            bytes: &self.buffer,
            index: self.consumed,
        }))
    }

    /// Newline-terminated lines fully delivered before the current one
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}
