//! Property-based tests for the combinator algebra
//!
//! These tests use proptest to generate random inputs and check the monad
//! laws and the repetition/alternation invariants on every one of them,
//! including inputs on which the parsers fail.

use charcomb::sequence::count;
use charcomb::text::{TextExt, any_char, character, digit, letter, string};
use charcomb::{
    BindExt, FilterExt, ManyExt, MapExt, OptionExt, OrExt, Parser, TextCursor, choice, many, pure,
    sep_by,
};
use proptest::prelude::*;

fn word() -> impl Parser<Output = String> {
    letter().many1().text()
}

/// Reads as many more characters as the word is long, modulo 3
fn f(word: String) -> impl Parser<Output = String> {
    count(any_char(), word.len() % 3)
        .text()
        .map(move |tail| format!("{}|{}", word, tail))
}

/// Requires a digit after odd-length values and appends it
fn g(value: String) -> impl Parser<Output = String> {
    let odd = value.len() % 2 == 1;
    digit()
        .option_maybe()
        .filter(move |d| !odd || d.is_some())
        .map(move |d| match d {
            Some(d) => format!("{}{}", value, d),
            None => value.clone(),
        })
}

proptest! {
    #[test]
    fn left_identity(x in "[a-c]{0,4}", input in "[a-c0-9]{0,10}") {
        let cursor = TextCursor::new(&input);
        let lhs = pure(x.clone()).bind(f).parse(cursor);
        let rhs = f(x).parse(cursor);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn right_identity(input in "[a-c0-9 ]{0,10}") {
        let cursor = TextCursor::new(&input);
        let lhs = word().bind(pure).parse(cursor);
        let rhs = word().parse(cursor);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn associativity(input in "[a-c0-9 ]{0,12}") {
        let cursor = TextCursor::new(&input);
        let lhs = word().bind(f).bind(g).parse(cursor);
        let rhs = word().bind(|x| f(x).bind(g)).parse(cursor);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn map_is_bind_then_pure(input in "[a-c0-9]{0,10}") {
        let cursor = TextCursor::new(&input);
        let lhs = word().map(|w| w.len()).parse(cursor);
        let rhs = word().bind(|w| pure(w.len())).parse(cursor);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn many_never_fails(input in "[ab]{0,16}") {
        let cursor = TextCursor::new(&input);
        let (values, rest) = many(character('a')).parse(cursor).unwrap();
        prop_assert_eq!(values.len(), rest.position());
        prop_assert!(input[values.len()..].chars().next() != Some('a'));
    }

    #[test]
    fn many_of_many_has_one_element(input in "[ab]{0,16}") {
        let (values, _) = many(many(character('a'))).parse(TextCursor::new(&input)).unwrap();
        prop_assert_eq!(values.len(), 1);
    }

    #[test]
    fn success_never_moves_backwards(input in "[a-c0-9, ]{0,16}", skip in 0usize..4) {
        let mut cursor = TextCursor::new(&input);
        for _ in 0..skip {
            if let Ok(next) = cursor.advance() {
                cursor = next;
            }
        }
        if let Ok((_, rest)) = sep_by(word(), character(',')).parse(cursor) {
            prop_assert!(rest.position() >= cursor.position());
        }
    }

    #[test]
    fn or_restarts_from_original_cursor(prefix in "fo{0,2}", tail in "[a-z]{0,4}") {
        let input = format!("{}{}", prefix, tail);
        let cursor = TextCursor::new(&input);
        let parser = string("foo").or(word());
        let (value, _) = parser.parse(cursor).unwrap();
        if input.starts_with("foo") {
            prop_assert_eq!(value, "foo");
        } else {
            // the second alternative saw the whole word, not what "foo" left over
            prop_assert_eq!(value, input);
        }
    }

    #[test]
    fn choice_agrees_with_or(input in "[a-d]{0,6}") {
        let cursor = TextCursor::new(&input);
        let via_or = string("ab").or(string("a")).or(string("cd")).parse(cursor);
        let via_choice = choice(vec![string("ab"), string("a"), string("cd")]).parse(cursor);
        prop_assert_eq!(via_or, via_choice);
    }
}
