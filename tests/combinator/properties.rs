//! Property tests for the combinator core.

use bestiary_combinator::{Cursor, fold_case, int, literal, remainder, word, zip};
use proptest::prelude::*;

proptest! {
    #[test]
    fn fold_case_keeps_char_count(text in "\\PC{0,40}") {
        prop_assert_eq!(fold_case(&text).chars().count(), text.chars().count());
    }

    #[test]
    fn consumed_plus_rest_is_input(text in "[a-z0-9 ,.]{0,40}") {
        if let Some((value, rest)) = word().run_partial(&text) {
            prop_assert!(text.ends_with(rest.as_str()));
            prop_assert!(text.contains(value.as_str()));
        }
    }

    #[test]
    fn parsing_is_deterministic(text in "[a-z0-9 ]{0,40}") {
        let parser = zip(word(), remainder());
        prop_assert_eq!(parser.run(&text), parser.run(&text));
        prop_assert_eq!(word().matches(&text), word().matches(&text));
    }

    #[test]
    fn failure_never_moves_the_caller(text in "[a-z ]{0,20}") {
        let chars: Vec<char> = text.chars().collect();
        let start = Cursor::new(&chars);
        let parser = zip(literal("hit"), int());
        prop_assert!(parser.parse(start).is_none());
        prop_assert_eq!(start.position(), 0);
        prop_assert_eq!(word().parse(start).map(|(w, _)| w), word().run(&text));
    }

    #[test]
    fn int_roundtrips(n in 0i32..1_000_000) {
        prop_assert_eq!(int().run(&n.to_string()), Some(n));
    }
}
