use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Monadic bind: run a parser, feed its value to a function that picks the
/// next parser, and run that one where the first stopped
///
/// Together with [`pure`](crate::pure::pure) this satisfies the monad laws:
///
/// - `pure(x).bind(f)` behaves like `f(x)`
/// - `p.bind(pure)` behaves like `p`
/// - `p.bind(f).bind(g)` behaves like `p.bind(|x| f(x).bind(g))`
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<P, F, Q> Parser for Bind<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    type Output = Q::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt: Parser + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<P> BindExt for P where P: Parser {}
