use thiserror::Error;

/// The single way a parser attempt can fail.
///
/// Carries no position, no expected-token set and no message: backtracking
/// combinators already hold the cursor they started from, so a failure is
/// nothing more than a signal to roll back to it.
#[derive(Error, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[error("input did not match the parser")]
pub struct ParseFailure;

/// Precondition violation on a [`TextCursor`](crate::TextCursor) accessor.
///
/// Combinators never trigger this: they check `at_end()` before reading.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("cannot read past end of input (offset {offset}, line {line}, column {column})")]
    EndOfInput {
        offset: usize,
        line: usize,
        column: usize,
    },
}
