//! Ordered alternation.
//!
//! Backtracking here is unconditional: when an alternative fails, the next
//! one starts over from the original cursor no matter how much input the
//! failed one looked at. Unlike the classic convention of committing once an
//! alternative consumes input, every alternative always gets a full attempt.
//! Grammars with deeply nested choices over shared prefixes can therefore do
//! exponential work.

use crate::cursor::TextCursor;
use crate::error::ParseFailure;
use crate::parser::{Outcome, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser from the same cursor
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    Or::new(parser1, parser2)
}

/// Tries each parser in order from the same cursor; fails only if all fail
///
/// Alternatives of different types can be collected through
/// [`BoxedParser`](crate::parser::BoxedParser).
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<P: Parser> Parser for Choice<P> {
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        self.parsers
            .iter()
            .find_map(|parser| parser.parse(cursor).ok())
            .ok_or(ParseFailure)
    }
}

/// Convenience function to create a Choice parser
pub fn choice<P: Parser>(parsers: impl IntoIterator<Item = P>) -> Choice<P> {
    Choice::new(parsers.into_iter().collect())
}
