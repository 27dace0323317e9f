//! Integration tests for backtracking and alternation order.

use bestiary_combinator::{
    Cursor, Parser, either, fold_case, int, literal, word, zip4,
};

#[derive(Debug, PartialEq)]
enum Reach {
    Melee(i32),
    Both(i32, i32),
}

fn reach_only() -> Parser<Reach> {
    zip4(literal("reach "), int(), literal(" ft."), literal(","))
        .map(|(_, n, _, _)| Reach::Melee(n))
}

fn reach_or_range() -> Parser<Reach> {
    zip4(literal("reach "), int(), literal(" ft. or range "), int())
        .map(|(_, reach, _, range)| Reach::Both(reach, range))
}

#[test]
fn failed_alternative_does_not_consume() {
    // The first alternative matches "reach 5 ft." before failing.
    let parser = either([reach_only(), reach_or_range()]);
    assert_eq!(parser.run("reach 5 ft. or range 20"), Some(Reach::Both(5, 20)));
    assert_eq!(parser.run("reach 10 ft., one target"), Some(Reach::Melee(10)));
}

#[test]
fn alternation_order_decides() {
    let greedy = either([literal("fire").map(|_| 1), literal("fire damage").map(|_| 2)]);
    let specific = either([literal("fire damage").map(|_| 2), literal("fire").map(|_| 1)]);
    assert_eq!(greedy.run("fire damage"), Some(1));
    assert_eq!(specific.run("fire damage"), Some(2));
}

#[test]
fn failed_parse_leaves_cursor_usable() {
    let chars: Vec<char> = "reach 5 ft. or range 20".chars().collect();
    let start = Cursor::new(&chars);
    assert!(reach_only().parse(start).is_none());
    let (value, rest) = reach_or_range().parse(start).unwrap();
    assert_eq!(value, Reach::Both(5, 20));
    assert!(rest.is_at_end());
}

#[test]
fn matches_report_char_ranges_in_folded_text() {
    let text = "Ñame: Bite. Reach 5 ft.";
    let folded = fold_case(text);
    let found = literal("reach").matches(&folded);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text(text), Some("Reach"));
}

#[test]
fn words_skip_punctuation() {
    let words = word().matches("bless, cure wounds; sanctuary");
    let values: Vec<&str> = words.iter().map(|w| w.value.as_str()).collect();
    assert_eq!(values, vec!["bless", "cure", "wounds", "sanctuary"]);
}
