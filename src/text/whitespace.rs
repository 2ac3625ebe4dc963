use crate::many::ManyExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::text::char::{character, satisfy};
use crate::text::string::string;

/// A single whitespace character
pub fn space() -> impl Parser<Output = char> {
    satisfy(char::is_whitespace)
}

/// Zero or more whitespace characters
pub fn spaces() -> impl Parser<Output = ()> {
    space().skip_many()
}

pub fn tab() -> impl Parser<Output = char> {
    character('\t')
}

/// A line feed
pub fn newline() -> impl Parser<Output = char> {
    character('\n')
}

/// Any line ending: `"\n"`, `"\r\n"` or `"\r"`, tried in that order
pub fn generic_newline() -> impl Parser<Output = String> {
    string("\n").or(string("\r\n")).or(string("\r"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextCursor;
    use crate::and::AndExt;

    #[test]
    fn test_space() {
        for input in [" ", "\t", "\n", "\r", "\u{00A0}", "\u{3000}"] {
            assert!(space().parse(TextCursor::new(input)).is_ok(), "{:?}", input);
        }
        assert!(space().parse(TextCursor::new("a")).is_err());
    }

    #[test]
    fn test_spaces_skips_run() {
        let (_, cursor) = spaces().parse(TextCursor::new(" \t\n x")).unwrap();
        assert_eq!(cursor.current().unwrap(), 'x');
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }

    #[test]
    fn test_spaces_succeeds_on_nothing() {
        let cursor = TextCursor::new("x");
        let (_, rest) = spaces().parse(cursor).unwrap();
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_tab_and_newline() {
        assert!(tab().parse(TextCursor::new("\t")).is_ok());
        assert!(newline().parse(TextCursor::new("\n")).is_ok());
        assert!(newline().parse(TextCursor::new("\r")).is_err());
    }

    #[test]
    fn test_generic_newline_variants() {
        let (value, cursor) = generic_newline().parse(TextCursor::new("\nx")).unwrap();
        assert_eq!(value, "\n");
        assert_eq!(cursor.position(), 1);

        let (value, cursor) = generic_newline().parse(TextCursor::new("\r\nx")).unwrap();
        assert_eq!(value, "\r\n");
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.line(), 2);

        let (value, cursor) = generic_newline().parse(TextCursor::new("\rx")).unwrap();
        assert_eq!(value, "\r");
        assert_eq!(cursor.position(), 1);

        assert!(generic_newline().parse(TextCursor::new("x")).is_err());
    }

    #[test]
    fn test_lines_separated_by_generic_newline() {
        let parser = character('a').skip(generic_newline()).and(character('b'));
        let ((a, b), cursor) = parser.parse(TextCursor::new("a\r\nb")).unwrap();
        assert_eq!((a, b), ('a', 'b'));
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }
}
