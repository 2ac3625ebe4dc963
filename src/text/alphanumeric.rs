use crate::or::OrExt;
use crate::parser::Parser;
use crate::text::digit::digit;
use crate::text::letter::letter;

/// A letter or a decimal digit
pub fn alpha_num() -> impl Parser<Output = char> {
    letter().or(digit())
}
