//! Limited-use patterns found in action and feature names.
//!
//! Recognizes, in order: `N/day`, `recharge N[-M]`, `recharges after a
//! short or long rest`, `recharges after a long rest`, and `recharges after
//! a short rest`.

use bestiary_combinator::{Parser, either, fold_case, int, literal, one_of, zip, zip3};
use bestiary_foundation::Located;

use crate::mechanics::LimitedUse;

/// Dashes accepted between the faces of a recharge range.
const RANGE_DASHES: &str = "-–—";

fn per_day() -> Parser<LimitedUse> {
    zip(int(), literal("/day")).map(|(n, _)| LimitedUse::per_day(n))
}

fn recharge_range() -> Parser<LimitedUse> {
    zip3(
        literal("recharge "),
        zip(int(), one_of(RANGE_DASHES)).map(|(n, _)| n).optional(),
        int(),
    )
    .map(|(_, lower, upper)| LimitedUse::recharge(lower.unwrap_or(upper)..=upper))
}

fn rest() -> Parser<LimitedUse> {
    either([
        literal("recharges after a short or long rest").map(|_| LimitedUse::rest(true, true)),
        literal("recharges after a long rest").map(|_| LimitedUse::rest(false, true)),
        literal("recharges after a short rest").map(|_| LimitedUse::rest(true, false)),
    ])
}

/// A limited-use pattern at the current position of case-folded text.
#[must_use]
pub fn limited_use() -> Parser<LimitedUse> {
    either([per_day(), recharge_range(), rest()])
}

/// Finds the first limited-use pattern anywhere in `name`.
///
/// The range is in `char`s of `name`.
#[must_use]
pub fn limited_use_in_name(name: &str) -> Option<Located<LimitedUse>> {
    limited_use()
        .located()
        .skipping_any_before()
        .run(&fold_case(name))
}
