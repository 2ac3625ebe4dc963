use crate::or::OrExt;
use crate::parser::Parser;
use crate::text::char::satisfy;

/// An uppercase letter
pub fn upper() -> impl Parser<Output = char> {
    satisfy(char::is_uppercase)
}

/// A lowercase letter
pub fn lower() -> impl Parser<Output = char> {
    satisfy(char::is_lowercase)
}

/// An uppercase or lowercase letter
pub fn letter() -> impl Parser<Output = char> {
    upper().or(lower())
}
