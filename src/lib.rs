//! # charcomb - Parser Combinator Library
//!
//! Monadic parser combinators over an immutable text cursor that tracks
//! offset, line and column.
//!
//! A parser is any value implementing [`Parser`]: a pure function from a
//! [`TextCursor`] to an [`Outcome`], either the parsed value with the cursor
//! just past it or a [`ParseFailure`]. Grammars are built bottom-up from
//! [`satisfy`](text::satisfy) and the character matchers in [`text`], then
//! combined with sequencing ([`bind`](bind::BindExt::bind),
//! [`and`](and::AndExt::and)), ordered choice ([`or`](or::OrExt::or)),
//! repetition, separators and operator chains.
//!
//! - **No exceptions for control flow**: failure is a returned value and every
//!   backtracking combinator simply retries from the cursor it still holds
//! - **Full backtracking**: alternatives always restart from the original
//!   cursor, however far the failed branch got
//! - **Iterative repetition**: `many`, the separator families and `chainl1`
//!   loop instead of recursing, so long inputs do not grow the stack
//!
//! ```
//! use charcomb::or::OrExt;
//! use charcomb::text::string;
//! use charcomb::run;
//!
//! let keyword = string("foo").or(string("bar"));
//! assert_eq!(run(&keyword, "bar").unwrap(), "bar");
//! ```

pub mod and;
pub mod between;
pub mod bind;
pub mod chain;
pub mod cursor;
pub mod eof;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod many;
pub mod map;
pub mod option;
pub mod or;
pub mod parser;
pub mod pure;
pub mod separated;
pub mod sequence;
pub mod span;
pub mod text;

pub use and::{AndExt, and};
pub use between::between;
pub use bind::{BindExt, bind};
pub use chain::{chainl, chainl1};
pub use cursor::TextCursor;
pub use eof::eof;
pub use error::{CursorError, ParseFailure};
pub use filter::{FilterExt, filter};
pub use lazy::lazy;
pub use many::{ManyExt, many, many1, skip_many, skip_many1};
pub use map::{MapExt, map};
pub use option::{OptionExt, option, option_maybe, optional};
pub use or::{OrExt, choice, or};
pub use parser::{BoxedExt, BoxedParser, Outcome, Parser, run, run_partial};
pub use pure::{fail, pure};
pub use separated::{end_by, end_by1, sep_by, sep_by1, sep_end_by, sep_end_by1};
pub use sequence::{count, sequence, subsequence};
pub use span::{Location, Span, SpannedExt, spanned};
