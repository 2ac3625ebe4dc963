use crate::parser::Parser;
use crate::text::char::satisfy;

/// A decimal digit `0-9`
pub fn digit() -> impl Parser<Output = char> {
    satisfy(|c| c.is_ascii_digit())
}

/// A hexadecimal digit in either case
pub fn hex_digit() -> impl Parser<Output = char> {
    satisfy(|c| c.is_ascii_hexdigit())
}

/// An octal digit `0-7`
pub fn oct_digit() -> impl Parser<Output = char> {
    satisfy(|c| matches!(c, '0'..='7'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextCursor;

    #[test]
    fn test_decimal_digits() {
        for d in '0'..='9' {
            let input = d.to_string();
            let (c, _) = digit().parse(TextCursor::new(&input)).unwrap();
            assert_eq!(c, d);
        }
        assert!(digit().parse(TextCursor::new("a")).is_err());
        // Arabic-Indic digit one
        assert!(digit().parse(TextCursor::new("\u{0661}")).is_err());
    }

    #[test]
    fn test_hex_digits() {
        for input in ["0", "9", "a", "f", "A", "F"] {
            assert!(hex_digit().parse(TextCursor::new(input)).is_ok(), "{}", input);
        }
        assert!(hex_digit().parse(TextCursor::new("g")).is_err());
    }

    #[test]
    fn test_oct_digits() {
        assert!(oct_digit().parse(TextCursor::new("7")).is_ok());
        assert!(oct_digit().parse(TextCursor::new("8")).is_err());
    }
}
