use crate::cursor::TextCursor;
use crate::error::ParseFailure;
use crate::parser::{Outcome, Parser};

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is a plain failure; the caller resumes from its own cursor.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<P, F> Parser for FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, new_cursor) = self.parser.parse(cursor)?;
        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(ParseFailure)
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser + Sized {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<P: Parser> FilterExt for P {}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}
