//! Weapon attack grammar.
//!
//! ```text
//! melee weapon attack: +4 to hit, reach 5 ft., one target. hit: 5 (1d6 + 2) slashing damage.
//! └──── skipped ─────┘ └─ hit ─┘  └ ranges ┘ └─ skipped ─┘ └────────── effects ──────────┘
//! ```

use bestiary_combinator::{
    Parser, character, chars_while, either, int, literal, many, nothing, one_or_more, skip_until,
    whitespace, zip, zip3, zip4, zip5, zip6, zip7,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effects::{AttackEffect, hit_effects, signed_modifier};

/// How far a weapon attack reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttackRange {
    /// Melee reach in feet.
    Reach(i32),
    /// Normal and long range in feet.
    Range {
        /// Normal range.
        normal: i32,
        /// Long range, attacked at disadvantage.
        long: Option<i32>,
    },
}

/// A to-hit bonus that applies only under some condition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionalHitModifier {
    /// The bonus.
    pub hit_modifier: i32,
    /// When it applies, such as `with shillelagh`.
    pub condition: String,
}

/// A parsed weapon attack.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeaponAttack {
    /// The to-hit bonus.
    pub hit_modifier: i32,
    /// Alternative bonuses listed in parentheses.
    pub conditional_hit_modifiers: Vec<ConditionalHitModifier>,
    /// Reach and range entries, in order.
    pub ranges: Vec<AttackRange>,
    /// What a hit does.
    pub effects: Vec<AttackEffect>,
}

fn reach() -> Parser<AttackRange> {
    zip5(
        whitespace().optional(),
        literal("reach "),
        int(),
        whitespace(),
        literal("ft."),
    )
    .map(|(_, _, feet, _, _)| AttackRange::Reach(feet))
}

fn range() -> Parser<AttackRange> {
    zip6(
        whitespace().optional(),
        literal("range "),
        int(),
        zip4(
            whitespace().optional(),
            character('/'),
            whitespace().optional(),
            int(),
        )
        .map(|(_, _, _, long)| long)
        .optional(),
        literal(" ft"),
        literal(".").optional(),
    )
    .map(|(_, _, normal, long, _, _)| AttackRange::Range { normal, long })
}

/// `+4 (+5 to hit with shillelagh)` inside the parentheses
fn conditional_hit_modifier() -> Parser<ConditionalHitModifier> {
    zip4(
        signed_modifier(),
        whitespace().optional(),
        literal("to hit"),
        zip4(
            whitespace().optional(),
            literal("with"),
            whitespace(),
            chars_while(|c| c != ',' && c != ';'),
        )
        .map(|(_, _, _, condition)| condition)
        .optional(),
    )
    .map(|(hit_modifier, _, _, condition)| ConditionalHitModifier {
        hit_modifier,
        condition: condition.map_or_else(
            || "conditional".to_string(),
            |c| format!("with {}", c.trim()),
        ),
    })
}

fn hit_modifier() -> Parser<(i32, Vec<ConditionalHitModifier>)> {
    zip3(
        signed_modifier(),
        zip(whitespace(), literal("to hit")).optional(),
        zip3(whitespace().optional(), character('('), skip_until(character(')')))
            .map(|(_, _, (inside, _))| inside)
            .optional(),
    )
    .map(|(modifier, _, inside)| {
        let conditional = inside
            .map(|text| {
                conditional_hit_modifier()
                    .matches(&text)
                    .into_iter()
                    .map(|m| m.value)
                    .collect()
            })
            .unwrap_or_default();
        (modifier, conditional)
    })
}

/// A complete weapon attack description, in case-folded text.
#[must_use]
pub fn weapon_attack() -> Parser<WeaponAttack> {
    zip7(
        skip_until(literal(":")),
        whitespace(),
        hit_modifier(),
        zip(literal(","), whitespace().optional()).optional(),
        many(
            either([reach(), range()]),
            one_or_more(either([literal(","), literal("or")]).trimming(whitespace())),
            nothing(),
        ),
        zip3(
            literal(","),
            whitespace().optional(),
            skip_until(zip(literal("."), whitespace())),
        )
        .optional(),
        hit_effects().optional(),
    )
    .map(|(_, _, (hit_modifier, conditional_hit_modifiers), _, ranges, _, effects)| WeaponAttack {
        hit_modifier,
        conditional_hit_modifiers,
        ranges,
        effects: effects.unwrap_or_default(),
    })
    .log("weapon_attack")
}
