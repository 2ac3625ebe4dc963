use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Runs every parser in order, each from where the previous one stopped,
/// and collects their results. Fails as soon as one of them fails.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<P: Parser> Parser for Sequence<P> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<P: Parser>(parsers: impl IntoIterator<Item = P>) -> Sequence<P> {
    Sequence::new(parsers.into_iter().collect())
}

/// Lenient [`Sequence`]: stops at the first failing parser and succeeds with
/// whatever was collected before it
pub struct Subsequence<P> {
    parsers: Vec<P>,
}

impl<P> Subsequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Subsequence { parsers }
    }
}

impl<P: Parser> Parser for Subsequence<P> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(_) => break,
            }
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Subsequence parser
pub fn subsequence<P: Parser>(parsers: impl IntoIterator<Item = P>) -> Subsequence<P> {
    Subsequence::new(parsers.into_iter().collect())
}

/// Runs a parser exactly `n` times in a row
pub struct Count<P> {
    parser: P,
    n: usize,
}

impl<P> Count<P> {
    pub fn new(parser: P, n: usize) -> Self {
        Count { parser, n }
    }
}

impl<P: Parser> Parser for Count<P> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::new();
        for _ in 0..self.n {
            let (value, next_cursor) = self.parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Count parser
pub fn count<P: Parser>(parser: P, n: usize) -> Count<P> {
    Count::new(parser, n)
}
