use crate::cursor::TextCursor;
use crate::error::ParseFailure;
use crate::parser::{Outcome, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns a clone of
/// its value
#[derive(Debug, Clone)]
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<T: Clone> Parser for Pure<T> {
    type Output = T;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}

/// Parser that always fails without consuming input
pub struct Fail<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new() -> Self {
        Fail {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Fail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Parser for Fail<T> {
    type Output = T;

    fn parse<'code>(&self, _cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Err(ParseFailure)
    }
}

/// Convenience function to create a parser that never matches
pub fn fail<T>() -> Fail<T> {
    Fail::new()
}
