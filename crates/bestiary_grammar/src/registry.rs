//! The set of domain parsers in effect.

use bestiary_foundation::DomainParser;

use crate::action::{CREATURE_ACTION_PARSER, CreatureAction, ParsedCreatureAction};
use crate::feature::{CREATURE_FEATURE_PARSER, CreatureFeature, ParsedCreatureFeature};
use crate::monster_type::{MONSTER_TYPE_PARSER, ParsedMonsterType};
use crate::spell::{ParsedSpellDescription, SPELL_DESCRIPTION_PARSER};

/// One descriptor per parseable content kind.
///
/// Passed explicitly to whatever parses, so tests can swap in a descriptor
/// with a different version to force re-parsing.
#[derive(Clone, Copy, Debug)]
pub struct DomainParsers {
    /// Creature actions.
    pub creature_action: DomainParser<CreatureAction, ParsedCreatureAction>,
    /// Creature features.
    pub creature_feature: DomainParser<CreatureFeature, ParsedCreatureFeature>,
    /// Spell descriptions.
    pub spell_description: DomainParser<String, ParsedSpellDescription>,
    /// Monster types.
    pub monster_type: DomainParser<String, ParsedMonsterType>,
}

impl DomainParsers {
    /// The current descriptors.
    pub const CURRENT: DomainParsers = DomainParsers {
        creature_action: CREATURE_ACTION_PARSER,
        creature_feature: CREATURE_FEATURE_PARSER,
        spell_description: SPELL_DESCRIPTION_PARSER,
        monster_type: MONSTER_TYPE_PARSER,
    };
}

impl Default for DomainParsers {
    fn default() -> Self {
        Self::CURRENT
    }
}
