use crate::error::CursorError;

/// Immutable position in a source text.
///
/// A cursor borrows the whole source and records where it points: the
/// absolute character offset plus a 1-based line and column. Advancing never
/// mutates a cursor, it builds the next one, so any cursor a combinator held
/// on to stays valid as a backtracking point.
///
/// Line breaks are `"\n"`, `"\r"` and `"\r\n"`. A `"\r\n"` pair counts as one
/// break: consuming `'\r'` only starts a new line when the following character
/// is not `'\n'`. After every break the column restarts at 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextCursor<'code> {
    source: &'code str,
    /// Byte index into `source`, always on a char boundary
    byte: usize,
    /// Character index into `source`
    offset: usize,
    line: usize,
    column: usize,
}

impl<'code> TextCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        TextCursor {
            source,
            byte: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character under the cursor
    pub fn current(&self) -> Result<char, CursorError> {
        self.remaining()
            .chars()
            .next()
            .ok_or_else(|| self.end_of_input())
    }

    pub fn at_end(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Step over the current character, updating line and column
    pub fn advance(self) -> Result<Self, CursorError> {
        let current = self.current()?;
        let byte = self.byte + current.len_utf8();

        let breaks_line = match current {
            '\n' => true,
            // "\r\n" is resolved when the '\n' is consumed
            '\r' => !self.source[byte..].starts_with('\n'),
            _ => false,
        };

        let (line, column) = if breaks_line {
            (self.line + 1, 1)
        } else {
            (self.line, self.column + 1)
        };

        Ok(TextCursor {
            source: self.source,
            byte,
            offset: self.offset + 1,
            line,
            column,
        })
    }

    /// Absolute character offset from the start of the source
    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn byte_offset(&self) -> usize {
        self.byte
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The text not yet consumed
    pub fn remaining(&self) -> &'code str {
        &self.source[self.byte..]
    }

    fn end_of_input(&self) -> CursorError {
        CursorError::EndOfInput {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }
}
