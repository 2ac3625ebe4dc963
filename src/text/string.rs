use crate::map::Map;
use crate::parser::Parser;
use crate::sequence::sequence;
use crate::text::char::{char_ignore_case, character};

/// Extension trait collecting a parsed `Vec<char>` into a `String`
pub trait TextExt: Parser<Output = Vec<char>> + Sized {
    fn text(self) -> Map<Self, fn(Vec<char>) -> String> {
        fn collect(chars: Vec<char>) -> String {
            chars.into_iter().collect()
        }
        Map::new(self, collect as fn(Vec<char>) -> String)
    }
}

impl<P> TextExt for P where P: Parser<Output = Vec<char>> {}

/// Parser that matches an exact string character by character
pub fn string(expected: &str) -> impl Parser<Output = String> + use<> {
    sequence(expected.chars().map(character).collect::<Vec<_>>()).text()
}

/// Like [`string`], ignoring case; returns the text as found in the input
pub fn string_ignore_case(expected: &str) -> impl Parser<Output = String> + use<> {
    sequence(expected.chars().map(char_ignore_case).collect::<Vec<_>>()).text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextCursor;
    use crate::many::many;
    use crate::text::char::any_char;

    #[test]
    fn test_exact_match() {
        let (result, cursor) = string("abc").parse(TextCursor::new("abc")).unwrap();
        assert_eq!(result, "abc");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_mismatch_on_last_char() {
        assert!(string("abc").parse(TextCursor::new("abd")).is_err());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let (result, cursor) = string("hello").parse(TextCursor::new("hello world")).unwrap();
        assert_eq!(result, "hello");
        assert_eq!(cursor.current().unwrap(), ' ');
    }

    #[test]
    fn test_input_too_short() {
        assert!(string("hello").parse(TextCursor::new("hel")).is_err());
    }

    #[test]
    fn test_unicode_string() {
        let (result, cursor) = string("こんにちは").parse(TextCursor::new("こんにちは世界")).unwrap();
        assert_eq!(result, "こんにちは");
        assert_eq!(cursor.remaining(), "世界");
        assert_eq!(cursor.column(), 6);
    }

    #[test]
    fn test_empty_string_matches_without_consuming() {
        let cursor = TextCursor::new("abc");
        let (result, rest) = string("").parse(cursor).unwrap();
        assert_eq!(result, "");
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_string_ignore_case() {
        let parser = string_ignore_case("select");
        let (result, _) = parser.parse(TextCursor::new("SeLeCt *")).unwrap();
        assert_eq!(result, "SeLeCt");
        assert!(parser.parse(TextCursor::new("selec")).is_err());
    }

    #[test]
    fn test_text_collects_chars() {
        let parser = many(any_char()).text();
        let (result, _) = parser.parse(TextCursor::new("xyz")).unwrap();
        assert_eq!(result, "xyz");
    }
}
