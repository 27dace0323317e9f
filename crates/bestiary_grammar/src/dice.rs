//! Dice expression grammar.
//!
//! Parses `1d6`, `2d8 + 1d4 - 1`, `7`, and bare hit modifiers such as `+5`
//! (read as `1d20 + 5`).

use bestiary_combinator::{Parser, character, either, fold_case, int, many0, one_of, zip, zip3};
use bestiary_foundation::{DiceExpression, Die, Located, Operator};

fn dice() -> Parser<DiceExpression> {
    zip3(int(), character('d'), int()).map(|(count, _, sides)| DiceExpression::dice(count, sides))
}

fn number() -> Parser<DiceExpression> {
    int().map(DiceExpression::Number)
}

fn term() -> Parser<DiceExpression> {
    either([dice(), number()])
}

fn sign() -> Parser<Operator> {
    one_of("+-").map(|op| if op == '+' { Operator::Add } else { Operator::Subtract })
}

fn operator() -> Parser<Operator> {
    let spaces = || many0(character(' '));
    zip3(spaces(), sign(), spaces()).map(|(_, op, _)| op)
}

// The sign must touch the number; the match starts at the sign.
fn modifier() -> Parser<DiceExpression> {
    zip(sign(), number()).map(|(op, n)| {
        DiceExpression::compound(
            DiceExpression::Dice {
                count: 1,
                die: Die::D20,
            },
            op,
            n,
        )
    })
}

/// A dice expression, folded left to right.
#[must_use]
pub fn dice_expression() -> Parser<DiceExpression> {
    zip(term(), many0(zip(operator(), term())))
        .map(|(first, rest)| {
            rest.into_iter()
                .fold(first, |lhs, (op, rhs)| DiceExpression::compound(lhs, op, rhs))
        })
        .or(modifier())
}

/// Parses `text` as a single dice expression, ignoring surrounding
/// whitespace. Trailing text makes the parse fail.
#[must_use]
pub fn parse_dice_expression(text: &str) -> Option<DiceExpression> {
    let (expr, rest) = dice_expression().run_partial(text.trim())?;
    rest.is_empty().then_some(expr)
}

/// Every dice expression embedded in `text` that rolls at least one die,
/// with its `char` range.
#[must_use]
pub fn dice_matches(text: &str) -> Vec<Located<DiceExpression>> {
    dice_expression()
        .matches(&fold_case(text))
        .into_iter()
        .filter(|m| m.value.dice_count() > 0)
        .collect()
}
