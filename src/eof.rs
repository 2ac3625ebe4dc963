use crate::cursor::TextCursor;
use crate::error::ParseFailure;
use crate::parser::{Outcome, Parser};

/// Succeeds, consuming nothing, only when no input is left
pub struct Eof;

impl Parser for Eof {
    type Output = ();

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        if cursor.at_end() {
            Ok(((), cursor))
        } else {
            Err(ParseFailure)
        }
    }
}

pub fn eof() -> Eof {
    Eof
}
