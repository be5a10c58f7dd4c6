// crates/line_index/src/lib.rs

//! Line/offset bookkeeping shared by the scanner crates.
//!
//!  * **`Position` / `Range`** – plain (line, column) value types, both
//!    0-based, ordered line-first.
//!  * **`LineAccessor`** – the minimal capability the locator needs from a
//!    text buffer: line lookup plus offset↔position conversion. Hosts with
//!    their own document model implement this; everyone else uses
//!    [`LineIndex`].
//!  * **`LineIndex`** – a string-backed implementation that precomputes
//!    line starts in one pass.
//!
//! All offsets are byte offsets into UTF-8 text.

/// A location in a text buffer: 0-based line and 0-based byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// An ordered pair of positions, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Abstracts the minimum the scanner needs from a text buffer.
///
/// Lines are the maximal `\n`-separated segments of the text; a trailing
/// newline yields a final empty line. Line arguments must be below
/// [`line_count`](Self::line_count).
pub trait LineAccessor {
    /// Number of lines in the buffer (at least 1, even for empty text).
    fn line_count(&self) -> usize;

    /// Text of line `line`, without its terminator.
    fn line_text(&self, line: usize) -> &str;

    /// Byte offset of column 0 of line `line`.
    fn line_start_offset(&self, line: usize) -> usize;

    /// Converts a byte offset to a position. Offsets past the end clamp to
    /// the last position of the buffer.
    fn offset_to_position(&self, offset: usize) -> Position;

    /// Converts a position back to a byte offset. Columns past the end of
    /// the line clamp to the line's end (the position of its terminator).
    fn position_to_offset(&self, pos: Position) -> usize;
}

/// String-backed [`LineAccessor`]: scans for `\n` once at construction and
/// answers every query from the precomputed line-start table.
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    /// Byte offset one past the last content byte of `line` (i.e. the
    /// offset of its `\n`, or the text length for the final line).
    fn line_end_offset(&self, line: usize) -> usize {
        match self.line_starts.get(line + 1) {
            Some(&next_start) => next_start - 1,
            None => self.text.len(),
        }
    }
}

impl LineAccessor for LineIndex<'_> {
    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_text(&self, line: usize) -> &str {
        &self.text[self.line_starts[line]..self.line_end_offset(line)]
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.line_starts[line]
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        // partition_point returns the count of line starts <= offset; the
        // containing line is the last of those.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position::new(line, offset - self.line_starts[line])
    }

    fn position_to_offset(&self, pos: Position) -> usize {
        let line = pos.line.min(self.line_count() - 1);
        let line_len = self.line_end_offset(line) - self.line_starts[line];
        self.line_starts[line] + pos.column.min(line_len)
    }
}
