//! Monster type normalization.

use std::fmt;

use bestiary_combinator::{fold_case, satisfy, word, zip};
use bestiary_foundation::{DomainModel, DomainParser, Located, Parseable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Creature types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum MonsterType {
    Aberration,
    Beast,
    Celestial,
    Construct,
    Dragon,
    Elemental,
    Fey,
    Fiend,
    Giant,
    Humanoid,
    Monstrosity,
    Ooze,
    Plant,
    Undead,
}

impl MonsterType {
    /// All monster types, alphabetically.
    pub const ALL: [MonsterType; 14] = [
        MonsterType::Aberration,
        MonsterType::Beast,
        MonsterType::Celestial,
        MonsterType::Construct,
        MonsterType::Dragon,
        MonsterType::Elemental,
        MonsterType::Fey,
        MonsterType::Fiend,
        MonsterType::Giant,
        MonsterType::Humanoid,
        MonsterType::Monstrosity,
        MonsterType::Ooze,
        MonsterType::Plant,
        MonsterType::Undead,
    ];

    /// Lowercase singular name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aberration => "aberration",
            Self::Beast => "beast",
            Self::Celestial => "celestial",
            Self::Construct => "construct",
            Self::Dragon => "dragon",
            Self::Elemental => "elemental",
            Self::Fey => "fey",
            Self::Fiend => "fiend",
            Self::Giant => "giant",
            Self::Humanoid => "humanoid",
            Self::Monstrosity => "monstrosity",
            Self::Ooze => "ooze",
            Self::Plant => "plant",
            Self::Undead => "undead",
        }
    }

    /// Looks up a lowercase singular or plural name.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "aberation" | "aberations" => Some(Self::Aberration),
            "monstrosities" => Some(Self::Monstrosity),
            word => {
                let singular = word.strip_suffix('s').unwrap_or(word);
                Self::ALL
                    .into_iter()
                    .find(|t| t.as_str() == word || t.as_str() == singular)
            }
        }
    }
}

impl fmt::Display for MonsterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.as_str();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

/// A monster type found in free text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedMonsterType {
    /// The type and where it was found, in `char`s of the input.
    pub monster_type: Located<MonsterType>,
}

impl DomainModel for ParsedMonsterType {
    const VERSION: &'static str = "1";
}

/// Finds the first word of `text` naming a monster type.
///
/// Words are only matched whole: `fiendish` is not `fiend`.
#[must_use]
pub fn monster_type_in(text: &str) -> Option<Located<MonsterType>> {
    let boundary = satisfy(|c| !c.is_alphanumeric()).optional();
    let candidates = zip(boundary, word().located()).map(|(_, w)| w);
    candidates
        .matches(&fold_case(text))
        .into_iter()
        .find_map(|w| {
            let found = w.value;
            MonsterType::from_word(&found.value).map(|t| Located::new(t, found.range))
        })
}

#[allow(clippy::ptr_arg)]
fn parse_monster_type(input: &String) -> Option<ParsedMonsterType> {
    monster_type_in(input).map(|monster_type| ParsedMonsterType { monster_type })
}

/// The monster type domain parser.
pub const MONSTER_TYPE_PARSER: DomainParser<String, ParsedMonsterType> =
    DomainParser::new("MonsterTypeDomainParser", "1", parse_monster_type);

/// A monster type as written, with its cached parse.
pub type ParseableMonsterType = Parseable<String, ParsedMonsterType>;
