use crate::cursor::TextCursor;
use crate::error::ParseFailure;
use crate::many::many1;
use crate::parser::{Outcome, Parser};
use crate::text::digit::digit;

/// Parser that matches one or more decimal digits and returns them as a u64
///
/// Leading zeros are accepted. A digit run too large for `u64` is a failure.
pub fn number() -> impl Parser<Output = u64> {
    NumberParser
}

struct NumberParser;

impl Parser for NumberParser {
    type Output = u64;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (digits, cursor) = many1(digit()).parse(cursor)?;
        let value = digits.iter().try_fold(0u64, |acc, d| {
            let d = d.to_digit(10).ok_or(ParseFailure)?;
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add(u64::from(d)))
                .ok_or(ParseFailure)
        })?;
        Ok((value, cursor))
    }
}
