use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// The stretch of source a parser matched, as the cursors before and after it
///
/// Only [`Spanned::parse_span`] builds one, so `start` never lies past `end`
/// and both point into the same source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    start: TextCursor<'code>,
    end: TextCursor<'code>,
}

impl<'code> Span<'code> {
    pub fn start(&self) -> TextCursor<'code> {
        self.start
    }

    pub fn end(&self) -> TextCursor<'code> {
        self.end
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.end.position() - self.start.position()
    }

    pub fn is_empty(&self) -> bool {
        self.start.position() == self.end.position()
    }

    /// The matched text
    pub fn as_str(&self) -> &'code str {
        &self.start.source()[self.start.byte_offset()..self.end.byte_offset()]
    }
}

/// A parser combinator that records where a successful parse started and
/// ended alongside its value
///
/// The value type of a [`Parser`] cannot borrow the input, so the start and
/// end come back as offsets and line/column pairs instead of a [`Span`];
/// use [`Spanned::parse_span`] when the borrowed form is needed.
pub struct Spanned<P> {
    parser: P,
}

/// Position of a match: `(offset, line, column)` of its start and end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub start: (usize, usize, usize),
    pub end: (usize, usize, usize),
}

fn triple(cursor: &TextCursor<'_>) -> (usize, usize, usize) {
    (cursor.position(), cursor.line(), cursor.column())
}

impl<P: Parser> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }

    /// Run the inner parser and return its value with the borrowed span
    pub fn parse_span<'code>(
        &self,
        cursor: TextCursor<'code>,
    ) -> Outcome<'code, (P::Output, Span<'code>)> {
        let (value, end) = self.parser.parse(cursor)?;
        Ok(((value, Span { start: cursor, end }), end))
    }
}

impl<P: Parser> Parser for Spanned<P> {
    type Output = (P::Output, Location);

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, end) = self.parser.parse(cursor)?;
        let location = Location {
            start: triple(&cursor),
            end: triple(&end),
        };
        Ok(((value, location), end))
    }
}

/// Extension trait to add position tracking to any parser
pub trait SpannedExt: Parser + Sized {
    /// Wrap this parser to capture its position span
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<P> SpannedExt for P where P: Parser {}

/// Convenience function to create a Spanned combinator
pub fn spanned<P: Parser>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::text::{character, generic_newline, string};

    #[test]
    fn test_spanned_single_char() {
        let parser = character('h').spanned();
        let ((c, location), cursor) = parser.parse(TextCursor::new("hello")).unwrap();
        assert_eq!(c, 'h');
        assert_eq!(location.start, (0, 1, 1));
        assert_eq!(location.end, (1, 1, 2));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_spanned_after_line_break() {
        let parser = string("ab").then(generic_newline()).then(spanned(string("cd")));
        let ((word, location), _) = parser.parse(TextCursor::new("ab\r\ncd")).unwrap();
        assert_eq!(word, "cd");
        assert_eq!(location.start, (4, 2, 1));
        assert_eq!(location.end, (6, 2, 3));
    }

    #[test]
    fn test_parse_span_borrows_source() {
        let cursor = TextCursor::new("hello world");
        let ((_, span), _) = string("hello").spanned().parse_span(cursor).unwrap();
        assert_eq!(span.as_str(), "hello");
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_bounds_come_from_the_parse() {
        let cursor = TextCursor::new("ab\ncd");
        let parser = string("ab").then(generic_newline()).spanned();
        let ((_, span), rest) = parser.parse_span(cursor).unwrap();
        assert_eq!(span.start(), cursor);
        assert_eq!(span.end(), rest);
        assert_eq!((span.end().line(), span.end().column()), (2, 1));
        assert_eq!(span.as_str(), "ab\n");
    }

    #[test]
    fn test_empty_span() {
        let cursor = TextCursor::new("xyz");
        let ((_, span), _) = crate::pure::pure(()).spanned().parse_span(cursor).unwrap();
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(span.as_str(), "");
    }

    #[test]
    fn test_span_of_multibyte_text() {
        let cursor = TextCursor::new("åäö!");
        let ((_, span), _) = spanned(string("åäö")).parse_span(cursor).unwrap();
        assert_eq!(span.as_str(), "åäö");
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_spanned_error_propagation() {
        assert!(character('a').spanned().parse(TextCursor::new("xyz")).is_err());
    }
}
