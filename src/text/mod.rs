//! Character-level matchers built on [`satisfy`].

pub mod alphanumeric;
pub mod char;
pub mod digit;
pub mod letter;
pub mod number;
pub mod string;
pub mod whitespace;

pub use alphanumeric::alpha_num;
pub use char::{Satisfy, any_char, char_ignore_case, char_range, character, none_of, one_of, satisfy};
pub use digit::{digit, hex_digit, oct_digit};
pub use letter::{letter, lower, upper};
pub use number::number;
pub use string::{TextExt, string, string_ignore_case};
pub use whitespace::{generic_newline, newline, space, spaces, tab};
