//! Spellcasting blocks in creature features.
//!
//! The description is scanned for independent fragments, each matched
//! wherever it occurs and folded left to right:
//!
//! ```text
//! The lich is an 18th-level spellcaster. Its spellcasting ability is
//! Intelligence (spell save DC 20, +12 to hit with spell attacks).
//!
//! Cantrips (at will): mage hand, prestidigitation, ray of frost
//! 1st level (4 slots): detect magic, magic missile, shield, thunderwave
//! ```

use std::collections::BTreeMap;

use bestiary_combinator::{
    Parser, character, chars_while, either, fold_case, horizontal_whitespace, int, literal, many0,
    word, zip, zip3, zip5,
};
use bestiary_foundation::{CompendiumItemReferenceAnnotation, CompendiumItemType, Located};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effects::signed_modifier;
use crate::mechanics::{Ability, LimitedUse};

/// Spells castable under one limited use.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LimitedUseSpellGroup {
    /// The spells, located in the feature description.
    pub spells: Vec<Located<CompendiumItemReferenceAnnotation>>,
    /// How often; `None` means at will.
    pub limited_use: Option<LimitedUse>,
}

/// A creature's spellcasting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spellcasting {
    /// Innate spellcasting needs no components or slots.
    pub innate: bool,
    /// Caster level.
    pub spellcaster_level: Option<i32>,
    /// Spellcasting ability.
    pub ability: Option<Ability>,
    /// Spell save DC.
    pub spell_save_dc: Option<i32>,
    /// Bonus to hit with spell attacks.
    pub spell_attack_hit: Option<i32>,
    /// Slots per spell level.
    pub slots_by_level: BTreeMap<i32, i32>,
    /// Spells per spell level; cantrips are level 0.
    pub spells_by_level: BTreeMap<i32, Vec<Located<CompendiumItemReferenceAnnotation>>>,
    /// Spells per use count.
    pub limited_use_spells: Vec<LimitedUseSpellGroup>,
}

impl Spellcasting {
    /// Every spell reference, in level order then use order.
    pub fn spell_references(
        &self,
    ) -> impl Iterator<Item = &Located<CompendiumItemReferenceAnnotation>> {
        self.spells_by_level
            .values()
            .flatten()
            .chain(self.limited_use_spells.iter().flat_map(|g| g.spells.iter()))
    }

    /// Every spell reference, mutably.
    pub fn spell_references_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut Located<CompendiumItemReferenceAnnotation>> {
        self.spells_by_level
            .values_mut()
            .flatten()
            .chain(self.limited_use_spells.iter_mut().flat_map(|g| g.spells.iter_mut()))
    }

    // `folded` is the case-folded description the fragments were read from.
    fn apply(&mut self, fragment: Fragment, folded: &str) {
        let reference = |spell: Located<String>| {
            let text = spell.text(folded).unwrap_or(spell.value.as_str()).to_string();
            spell.map(|_| {
                CompendiumItemReferenceAnnotation::unresolved(text, Some(CompendiumItemType::Spell))
            })
        };
        match fragment {
            Fragment::SpellcasterLevel(level) => {
                self.spellcaster_level.get_or_insert(level);
            }
            Fragment::Ability(ability) => {
                self.ability.get_or_insert(ability);
            }
            Fragment::Save(dc) => {
                self.spell_save_dc.get_or_insert(dc);
            }
            Fragment::Hit(modifier) => {
                self.spell_attack_hit.get_or_insert(modifier);
            }
            Fragment::SpellsByLevel { level, slots, spells } => {
                if let Some(slots) = slots {
                    self.slots_by_level.insert(level, slots);
                }
                self.spells_by_level
                    .entry(level)
                    .or_default()
                    .extend(spells.into_iter().map(reference));
            }
            Fragment::SpellsByUse { limited_use, spells } => {
                self.limited_use_spells
                    .extend(spells.into_iter().map(|spell| LimitedUseSpellGroup {
                        spells: vec![reference(spell)],
                        limited_use: limited_use.clone(),
                    }));
            }
        }
    }
}

#[derive(Clone, Debug)]
enum Fragment {
    SpellcasterLevel(i32),
    Ability(Ability),
    Save(i32),
    Hit(i32),
    SpellsByLevel {
        level: i32,
        slots: Option<i32>,
        spells: Vec<Located<String>>,
    },
    SpellsByUse {
        limited_use: Option<LimitedUse>,
        spells: Vec<Located<String>>,
    },
}

fn spellcaster_level() -> Parser<Fragment> {
    zip3(int(), chars_while(char::is_alphabetic), literal("-level spellcaster"))
        .map(|(level, _, _)| Fragment::SpellcasterLevel(level))
}

fn ability() -> Parser<Fragment> {
    either([
        zip(literal("spellcasting ability is "), word()).map(|(_, name)| name),
        zip3(literal("using "), word(), literal(" as the spellcasting ability"))
            .map(|(_, name, _)| name),
    ])
    .flat_map(|name| Ability::from_name(name))
    .map(Fragment::Ability)
}

fn save() -> Parser<Fragment> {
    zip(literal("spell save dc "), int()).map(|(_, dc)| Fragment::Save(dc))
}

fn hit() -> Parser<Fragment> {
    zip(signed_modifier(), literal(" to hit with spell attacks")).map(|(m, _)| Fragment::Hit(m))
}

/// One spell name: words joined by single spaces or tabs.
fn spell_name() -> Parser<Located<String>> {
    zip(word(), many0(zip(horizontal_whitespace(), word())))
        .map(|(first, rest)| {
            rest.into_iter().fold(first, |mut name, (_, next)| {
                name.push(' ');
                name.push_str(&next);
                name
            })
        })
        .located()
}

fn spell_list() -> Parser<Vec<Located<String>>> {
    many0(
        zip3(
            spell_name(),
            many0(character('*')),
            literal(",").trimming(horizontal_whitespace()).optional(),
        )
        .map(|(name, _, _)| name),
    )
}

fn spells_by_level() -> Parser<Fragment> {
    zip5(
        either([
            literal("cantrips").map(|_| 0),
            zip3(int(), word(), literal(" level")).map(|(level, _, _)| level),
        ]),
        literal(" ("),
        either([
            literal("at will").map(|_| None),
            zip3(int(), literal(" slot"), word().optional()).map(|(slots, _, _)| Some(slots)),
        ]),
        literal("): "),
        spell_list(),
    )
    .map(|(level, _, slots, _, spells)| Fragment::SpellsByLevel { level, slots, spells })
}

fn spells_by_use() -> Parser<Fragment> {
    zip3(
        either([
            literal("at will").map(|_| None),
            zip3(int(), character('e').optional(), literal("/day each"))
                .map(|(n, _, _)| Some(LimitedUse::per_day(n))),
        ]),
        literal(": "),
        spell_list(),
    )
    .map(|(limited_use, _, spells)| Fragment::SpellsByUse { limited_use, spells })
}

fn fragments() -> Parser<Vec<Fragment>> {
    many0(
        either([
            spellcaster_level(),
            ability(),
            save(),
            hit(),
            spells_by_level(),
            spells_by_use(),
        ])
        .skipping_any_before(),
    )
}

/// Reads the spellcasting block in `description`.
///
/// Scalar fields keep the first value found. Returns `None` when no
/// fragment is found.
#[must_use]
pub fn spellcasting(description: &str, innate: bool) -> Option<Spellcasting> {
    let folded = fold_case(description);
    let fragments = fragments().run(&folded)?;
    if fragments.is_empty() {
        return None;
    }
    let mut result = Spellcasting {
        innate,
        ..Spellcasting::default()
    };
    for fragment in fragments {
        result.apply(fragment, &folded);
    }
    Some(result)
}
