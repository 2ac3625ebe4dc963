use crate::cursor::TextCursor;
use crate::error::ParseFailure;

/// Result of running a parser: the produced value and the cursor just past
/// the consumed input, or a [`ParseFailure`].
pub type Outcome<'code, T> = Result<(T, TextCursor<'code>), ParseFailure>;

/// Core parser trait for parser combinators
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the advanced cursor on success.
    /// A failure carries no cursor: whoever called `parse` still holds the
    /// cursor it passed in and resumes from there.
    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, for collections of differently built alternatives and
/// for recursive grammars whose types would otherwise be infinite
pub struct BoxedParser<'p, T> {
    inner: Box<dyn Parser<Output = T> + 'p>,
}

impl<'p, T> BoxedParser<'p, T> {
    pub fn new(parser: impl Parser<Output = T> + 'p) -> Self {
        BoxedParser {
            inner: Box::new(parser),
        }
    }
}

impl<T> Parser for BoxedParser<'_, T> {
    type Output = T;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed<'p>(self) -> BoxedParser<'p, Self::Output>
    where
        Self: 'p,
    {
        BoxedParser::new(self)
    }
}

impl<P> BoxedExt for P where P: Parser {}

/// Run `parser` over `text` and return the produced value.
///
/// Does not require the whole text to be consumed; sequence the grammar with
/// [`eof`](crate::eof::eof) for that. Leftover text is only reported as a
/// debug event; callers that need to act on it use [`run_partial`].
pub fn run<P: Parser>(parser: &P, text: &str) -> Result<P::Output, ParseFailure> {
    let (value, rest) = run_partial(parser, text)?;
    if !rest.at_end() {
        tracing::debug!(
            offset = rest.position(),
            line = rest.line(),
            column = rest.column(),
            remaining = rest.remaining().len(),
            "parse finished with unconsumed input"
        );
    }
    Ok(value)
}

/// Like [`run`], but also hands back the cursor where parsing stopped
pub fn run_partial<'code, P: Parser>(parser: &P, text: &'code str) -> Outcome<'code, P::Output> {
    tracing::trace!(len = text.len(), "running parser");
    let result = parser.parse(TextCursor::new(text));
    if result.is_err() {
        tracing::debug!("parse failed");
    }
    result
}
