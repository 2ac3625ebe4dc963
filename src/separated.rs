//! Lists of elements delimited by a separator parser.
//!
//! Separators are matched and discarded; elements come back in input order.
//! A separator that is not followed by an element is rolled back rather
//! than treated as an error, so `"1,2,"` parsed with [`sep_by`] yields
//! `[1, 2]` and leaves the trailing `","` for the caller.

use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Collects `(separator, element)` pairs after the first element. A pair is
/// only committed when both halves match and the cursor moved.
fn separated_tail<'code, P: Parser, S: Parser>(
    parser: &P,
    separator: &S,
    mut results: Vec<P::Output>,
    mut cursor: TextCursor<'code>,
) -> (Vec<P::Output>, TextCursor<'code>) {
    loop {
        let Ok((_, after_separator)) = separator.parse(cursor) else {
            break;
        };
        let Ok((value, next_cursor)) = parser.parse(after_separator) else {
            break;
        };
        if next_cursor.position() == cursor.position() {
            break;
        }
        results.push(value);
        cursor = next_cursor;
    }
    (results, cursor)
}

/// Collects `(element, separator)` pairs. A pair is only committed when both
/// halves match and the cursor moved.
fn terminated<'code, P: Parser, S: Parser>(
    parser: &P,
    separator: &S,
    mut results: Vec<P::Output>,
    mut cursor: TextCursor<'code>,
) -> (Vec<P::Output>, TextCursor<'code>) {
    loop {
        let Ok((value, after_element)) = parser.parse(cursor) else {
            break;
        };
        let Ok((_, next_cursor)) = separator.parse(after_element) else {
            break;
        };
        if next_cursor.position() == cursor.position() {
            break;
        }
        results.push(value);
        cursor = next_cursor;
    }
    (results, cursor)
}

/// Consumes one trailing separator if present
fn trailing<'code, S: Parser>(separator: &S, cursor: TextCursor<'code>) -> TextCursor<'code> {
    match separator.parse(cursor) {
        Ok((_, cursor)) => cursor,
        Err(_) => cursor,
    }
}

/// Zero or more elements separated by `separator`
pub struct SepBy<P, S> {
    parser: P,
    separator: S,
}

impl<P: Parser, S: Parser> Parser for SepBy<P, S> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((first, cursor)) => Ok(separated_tail(
                &self.parser,
                &self.separator,
                vec![first],
                cursor,
            )),
            Err(_) => Ok((Vec::new(), cursor)),
        }
    }
}

/// One or more elements separated by `separator`
pub struct SepBy1<P, S> {
    parser: P,
    separator: S,
}

impl<P: Parser, S: Parser> Parser for SepBy1<P, S> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (first, cursor) = self.parser.parse(cursor)?;
        Ok(separated_tail(
            &self.parser,
            &self.separator,
            vec![first],
            cursor,
        ))
    }
}

/// Zero or more elements, each followed by `separator`
pub struct EndBy<P, S> {
    parser: P,
    separator: S,
}

impl<P: Parser, S: Parser> Parser for EndBy<P, S> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Ok(terminated(&self.parser, &self.separator, Vec::new(), cursor))
    }
}

/// One or more elements, each followed by `separator`
pub struct EndBy1<P, S> {
    parser: P,
    separator: S,
}

impl<P: Parser, S: Parser> Parser for EndBy1<P, S> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (first, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.separator.parse(cursor)?;
        Ok(terminated(
            &self.parser,
            &self.separator,
            vec![first],
            cursor,
        ))
    }
}

/// Zero or more elements separated by `separator`, with an optional
/// trailing separator
pub struct SepEndBy<P, S> {
    parser: P,
    separator: S,
}

impl<P: Parser, S: Parser> Parser for SepEndBy<P, S> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let Ok((first, cursor)) = self.parser.parse(cursor) else {
            return Ok((Vec::new(), cursor));
        };
        let (results, cursor) =
            separated_tail(&self.parser, &self.separator, vec![first], cursor);
        Ok((results, trailing(&self.separator, cursor)))
    }
}

/// One or more elements separated by `separator`, with an optional
/// trailing separator
pub struct SepEndBy1<P, S> {
    parser: P,
    separator: S,
}

impl<P: Parser, S: Parser> Parser for SepEndBy1<P, S> {
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (first, cursor) = self.parser.parse(cursor)?;
        let (results, cursor) =
            separated_tail(&self.parser, &self.separator, vec![first], cursor);
        Ok((results, trailing(&self.separator, cursor)))
    }
}

pub fn sep_by<P: Parser, S: Parser>(parser: P, separator: S) -> SepBy<P, S> {
    SepBy { parser, separator }
}

pub fn sep_by1<P: Parser, S: Parser>(parser: P, separator: S) -> SepBy1<P, S> {
    SepBy1 { parser, separator }
}

pub fn end_by<P: Parser, S: Parser>(parser: P, separator: S) -> EndBy<P, S> {
    EndBy { parser, separator }
}

pub fn end_by1<P: Parser, S: Parser>(parser: P, separator: S) -> EndBy1<P, S> {
    EndBy1 { parser, separator }
}

pub fn sep_end_by<P: Parser, S: Parser>(parser: P, separator: S) -> SepEndBy<P, S> {
    SepEndBy { parser, separator }
}

pub fn sep_end_by1<P: Parser, S: Parser>(parser: P, separator: S) -> SepEndBy1<P, S> {
    SepEndBy1 { parser, separator }
}
