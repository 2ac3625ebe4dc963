use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Left-folds `operand (operator operand)*`
///
/// The operator parser yields the binary function that combines the running
/// accumulator with the next operand, so `1-2-3` folds as `(1 - 2) - 3`. An
/// operator that is not followed by an operand is rolled back.
pub struct ChainL1<P, O> {
    operand: P,
    operator: O,
}

impl<P, O> ChainL1<P, O> {
    pub fn new(operand: P, operator: O) -> Self {
        ChainL1 { operand, operator }
    }
}

impl<P, O, F> Parser for ChainL1<P, O>
where
    P: Parser,
    O: Parser<Output = F>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (mut acc, mut cursor) = self.operand.parse(cursor)?;
        loop {
            let Ok((combine, after_operator)) = self.operator.parse(cursor) else {
                break;
            };
            let Ok((rhs, next_cursor)) = self.operand.parse(after_operator) else {
                break;
            };
            if next_cursor.position() == cursor.position() {
                break;
            }
            acc = combine(acc, rhs);
            cursor = next_cursor;
        }
        Ok((acc, cursor))
    }
}

/// [`ChainL1`] that succeeds with a default value, consuming nothing, when
/// not even one operand matches
pub struct ChainL<P, O, T> {
    chain: ChainL1<P, O>,
    default: T,
}

impl<P, O, F, T> Parser for ChainL<P, O, T>
where
    P: Parser<Output = T>,
    O: Parser<Output = F>,
    F: Fn(T, T) -> T,
    T: Clone,
{
    type Output = T;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.chain.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

/// Convenience function to create a ChainL1 parser
pub fn chainl1<P, O, F>(operand: P, operator: O) -> ChainL1<P, O>
where
    P: Parser,
    O: Parser<Output = F>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    ChainL1::new(operand, operator)
}

/// Convenience function to create a ChainL parser
pub fn chainl<P, O, F, T>(operand: P, operator: O, default: T) -> ChainL<P, O, T>
where
    P: Parser<Output = T>,
    O: Parser<Output = F>,
    F: Fn(T, T) -> T,
    T: Clone,
{
    ChainL {
        chain: ChainL1::new(operand, operator),
        default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::text::{character, number};

    type BinOp = fn(i64, i64) -> i64;

    fn integer() -> impl Parser<Output = i64> {
        number().map(|n| n as i64)
    }

    fn add_sub() -> impl Parser<Output = BinOp> {
        character('+')
            .map(|_| (|a: i64, b: i64| a + b) as BinOp)
            .or(character('-').map(|_| (|a: i64, b: i64| a - b) as BinOp))
    }

    #[test]
    fn test_chainl1_sum() {
        let parser = chainl1(integer(), add_sub());
        let (value, cursor) = parser.parse(TextCursor::new("1+2+3")).unwrap();
        assert_eq!(value, 6);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_chainl1_folds_left() {
        let parser = chainl1(integer(), add_sub());
        // (10 - 4) - 3, a right fold would give 9
        let (value, _) = parser.parse(TextCursor::new("10-4-3")).unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_chainl1_single_operand() {
        let parser = chainl1(integer(), add_sub());
        let (value, _) = parser.parse(TextCursor::new("42")).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_chainl1_dangling_operator_rolled_back() {
        let parser = chainl1(integer(), add_sub());
        let (value, cursor) = parser.parse(TextCursor::new("1+2+")).unwrap();
        assert_eq!(value, 3);
        assert_eq!(cursor.remaining(), "+");
    }

    #[test]
    fn test_chainl1_requires_operand() {
        let parser = chainl1(integer(), add_sub());
        assert!(parser.parse(TextCursor::new("+1")).is_err());
    }

    #[test]
    fn test_chainl_default() {
        let parser = chainl(integer(), add_sub(), -1);

        let (value, cursor) = parser.parse(TextCursor::new("x")).unwrap();
        assert_eq!(value, -1);
        assert_eq!(cursor.position(), 0);

        let (value, _) = parser.parse(TextCursor::new("5-1")).unwrap();
        assert_eq!(value, 4);
    }

    #[test]
    fn test_chainl1_string_concat_order() {
        let word = character('a').or(character('b')).map(|c| c.to_string());
        let concat = character('.').map(|_| |a: String, b: String| format!("({}{})", a, b));
        let (value, _) = chainl1(word, concat).parse(TextCursor::new("a.b.a")).unwrap();
        assert_eq!(value, "((ab)a)");
    }
}
