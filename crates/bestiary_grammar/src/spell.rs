//! Spell descriptions: the dice they roll.

use bestiary_foundation::{
    DiceExpression, DomainModel, DomainParser, Located, Parseable, TextAnnotation,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dice::dice_matches;

/// Dice found in a spell description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedSpellDescription {
    /// Every dice expression, in order, with its `char` range.
    pub dice: Vec<Located<DiceExpression>>,
}

impl ParsedSpellDescription {
    /// Dice annotations for the description.
    #[must_use]
    pub fn annotations(&self) -> Vec<Located<TextAnnotation>> {
        self.dice
            .iter()
            .cloned()
            .map(|d| d.map(TextAnnotation::DiceExpression))
            .collect()
    }
}

impl DomainModel for ParsedSpellDescription {
    const VERSION: &'static str = "1";
}

#[allow(clippy::ptr_arg)]
fn parse_spell_description(input: &String) -> Option<ParsedSpellDescription> {
    let dice = dice_matches(input);
    (!dice.is_empty()).then_some(ParsedSpellDescription { dice })
}

/// The spell description domain parser.
pub const SPELL_DESCRIPTION_PARSER: DomainParser<String, ParsedSpellDescription> =
    DomainParser::new("SpellDescriptionDomainParser", "1", parse_spell_description);

/// A spell description with its cached parse.
pub type ParseableSpellDescription = Parseable<String, ParsedSpellDescription>;
