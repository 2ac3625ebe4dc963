use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The nesting
/// follows the parsing order, so destructuring mirrors the grammar.
///
/// Example:
/// ```
/// use charcomb::and::AndExt;
/// use charcomb::text::{character, number};
/// use charcomb::{Parser, TextCursor};
///
/// let cursor = TextCursor::new("123.456");
/// let (((int_part, _), frac_part), _) = number()
///     .and(character('.'))
///     .and(number())
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = (P1::Output, P2::Output);

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Sequences two parsers and keeps the first result
pub struct Skip<P1, P2> {
    parser: P1,
    skipped: P2,
}

impl<P1, P2> Parser for Skip<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = P1::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (result, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.skipped.parse(cursor)?;
        Ok((result, cursor))
    }
}

/// Sequences two parsers and keeps the second result
pub struct Then<P1, P2> {
    skipped: P1,
    parser: P2,
}

impl<P1, P2> Parser for Then<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = P2::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (_, cursor) = self.skipped.parse(cursor)?;
        self.parser.parse(cursor)
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and(), .skip() and .then() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser,
    {
        And::new(self, other)
    }

    /// Run `other` after this parser and drop its result
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser,
    {
        Skip {
            parser: self,
            skipped: other,
        }
    }

    /// Run `other` after this parser and keep only its result
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser,
    {
        Then {
            skipped: self,
            parser: other,
        }
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}
