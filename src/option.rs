use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Tries a parser and falls back to a default value, consuming nothing, when
/// it fails
pub struct WithDefault<P, T> {
    parser: P,
    default: T,
}

impl<P, T> Parser for WithDefault<P, T>
where
    P: Parser<Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

/// Tries a parser and reports whether it matched as an `Option`
pub struct Maybe<P> {
    parser: P,
}

impl<P: Parser> Parser for Maybe<P> {
    type Output = Option<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Tries a parser and discards its value; always succeeds
pub struct Optional<P> {
    parser: P,
}

impl<P: Parser> Parser for Optional<P> {
    type Output = ();

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((_, cursor)) => Ok(((), cursor)),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// `parser`, or `default` without consuming input
pub fn option<P, T>(parser: P, default: T) -> WithDefault<P, T>
where
    P: Parser<Output = T>,
    T: Clone,
{
    WithDefault { parser, default }
}

/// `Some` of the parsed value, or `None` without consuming input
pub fn option_maybe<P: Parser>(parser: P) -> Maybe<P> {
    Maybe { parser }
}

/// Consumes `parser` if it matches, otherwise nothing
pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional { parser }
}

/// Extension trait adding the optional combinators as methods
pub trait OptionExt: Parser + Sized {
    fn option(self, default: Self::Output) -> WithDefault<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        option(self, default)
    }

    fn option_maybe(self) -> Maybe<Self> {
        option_maybe(self)
    }

    fn optional(self) -> Optional<Self> {
        optional(self)
    }
}

impl<P> OptionExt for P where P: Parser {}
