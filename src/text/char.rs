use crate::cursor::TextCursor;
use crate::error::ParseFailure;
use crate::parser::{Outcome, Parser};

/// Parser that consumes one character if it satisfies a predicate
///
/// This is the only primitive that consumes input; every other matcher is
/// built from it.
#[derive(Clone)]
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<F> Parser for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let current = cursor.current().map_err(|_| ParseFailure)?;
        if !(self.predicate)(current) {
            return Err(ParseFailure);
        }
        let next = cursor.advance().map_err(|_| ParseFailure)?;
        Ok((current, next))
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Any single character
pub fn any_char() -> impl Parser<Output = char> {
    satisfy(|_| true)
}

/// Exactly the given character
pub fn character(expected: char) -> impl Parser<Output = char> {
    satisfy(move |c| c == expected)
}

/// The given character in either case, returning the character as it
/// appears in the input
pub fn char_ignore_case(expected: char) -> impl Parser<Output = char> {
    satisfy(move |c| c.to_lowercase().eq(expected.to_lowercase()))
}

/// A character in the inclusive range `low..=high`
pub fn char_range(low: char, high: char) -> impl Parser<Output = char> {
    satisfy(move |c| (low..=high).contains(&c))
}

/// Any character contained in `options`
pub fn one_of(options: &str) -> impl Parser<Output = char> + use<> {
    let options: Vec<char> = options.chars().collect();
    satisfy(move |c| options.contains(&c))
}

/// Any character not contained in `options`
pub fn none_of(options: &str) -> impl Parser<Output = char> + use<> {
    let options: Vec<char> = options.chars().collect();
    satisfy(move |c| !options.contains(&c))
}
