use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Shared repetition loop: applies `parser` until it fails, starting with
/// `results` already collected.
///
/// An application that succeeds without moving the cursor ends the loop; its
/// value is kept only when nothing was collected before it. Without that rule
/// a parser that can succeed on empty input (`many(many(p))`, `many(optional(p))`)
/// would repeat forever.
fn repeat<'code, P: Parser>(
    parser: &P,
    mut results: Vec<P::Output>,
    mut cursor: TextCursor<'code>,
) -> (Vec<P::Output>, TextCursor<'code>) {
    while let Ok((value, next_cursor)) = parser.parse(cursor) {
        if next_cursor.position() == cursor.position() {
            if results.is_empty() {
                results.push(value);
            }
            break;
        }
        results.push(value);
        cursor = next_cursor;
    }
    (results, cursor)
}

/// Parser combinator that matches zero or more occurrences of the given parser
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P: Parser> Parser for Many<P> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        // Many matches zero or more, so errors are never propagated
        Ok(repeat(&self.parser, Vec::new(), cursor))
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<P: Parser> Parser for Many1<P> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        // First parse must succeed
        let (first_value, cursor) = self.parser.parse(cursor)?;
        Ok(repeat(&self.parser, vec![first_value], cursor))
    }
}

/// Zero or more occurrences, discarding the values
pub struct SkipMany<P> {
    parser: P,
}

impl<P: Parser> Parser for SkipMany<P> {
    type Output = ();

    fn parse<'code>(&self, mut cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        while let Ok((_, next_cursor)) = self.parser.parse(cursor) {
            if next_cursor.position() == cursor.position() {
                break;
            }
            cursor = next_cursor;
        }
        Ok(((), cursor))
    }
}

/// One or more occurrences, discarding the values
pub struct SkipMany1<P> {
    parser: P,
}

impl<P: Parser> Parser for SkipMany1<P> {
    type Output = ();

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (_, cursor) = self.parser.parse(cursor)?;
        SkipMany {
            parser: &self.parser,
        }
        .parse(cursor)
    }
}

/// Convenience function to create a Many parser
pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<P: Parser>(parser: P) -> Many1<P> {
    Many1::new(parser)
}

pub fn skip_many<P: Parser>(parser: P) -> SkipMany<P> {
    SkipMany { parser }
}

pub fn skip_many1<P: Parser>(parser: P) -> SkipMany1<P> {
    SkipMany1 { parser }
}

/// Extension trait adding the repetition combinators as methods
pub trait ManyExt: Parser + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }

    fn skip_many(self) -> SkipMany<Self> {
        SkipMany { parser: self }
    }

    fn skip_many1(self) -> SkipMany1<Self> {
        SkipMany1 { parser: self }
    }
}

impl<P> ManyExt for P where P: Parser {}
