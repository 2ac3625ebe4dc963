use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value with
/// the delimiters discarded. Does not skip whitespace; wrap the delimiters in
/// a lexeme parser for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    close: P3,
    content: P2,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, close: P3, content: P2) -> Self {
        Between {
            open,
            close,
            content,
        }
    }
}

impl<P1, P2, P3> Parser for Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    type Output = P2::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((content, cursor))
    }
}

/// Convenience function to create a Between parser
pub fn between<P1, P2, P3>(open: P1, close: P3, content: P2) -> Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    Between::new(open, close, content)
}
