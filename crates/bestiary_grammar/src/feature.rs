//! Creature features (traits such as `Spellcasting` or `Legendary
//! Resistance (3/Day)`) and their domain parser.

use bestiary_foundation::{
    DiceExpression, DomainModel, DomainParser, Located, Parseable, TextAnnotation,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::action::dice_annotations;
use crate::limited_use::limited_use_in_name;
use crate::mechanics::{LimitedUse, Recharge};
use crate::spellcasting::{Spellcasting, spellcasting};

/// A feature as written in a stat block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreatureFeature {
    /// Name, e.g. `Innate Spellcasting`.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

impl CreatureFeature {
    /// Creates a feature.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Everything parsed from a [`CreatureFeature`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedCreatureFeature {
    /// Limited use found in the name. The range is in `char`s of the name.
    pub limited_use: Option<Located<LimitedUse>>,
    /// The spellcasting block, for spellcasting features.
    pub spellcasting: Option<Spellcasting>,
    /// Dice found in the description.
    pub other_description_annotations: Vec<Located<TextAnnotation>>,
}

impl ParsedCreatureFeature {
    /// Returns `None` if every part is empty.
    #[must_use]
    pub fn new(
        limited_use: Option<Located<LimitedUse>>,
        spellcasting: Option<Spellcasting>,
        other_description_annotations: Vec<Located<TextAnnotation>>,
    ) -> Option<Self> {
        if limited_use.is_none()
            && spellcasting.is_none()
            && other_description_annotations.is_empty()
        {
            return None;
        }
        Some(Self {
            limited_use,
            spellcasting,
            other_description_annotations,
        })
    }

    /// Annotations on the name: a recharge roll becomes a `1d6`.
    #[must_use]
    pub fn name_annotations(&self) -> Vec<Located<TextAnnotation>> {
        self.limited_use
            .iter()
            .filter(|l| matches!(l.value.recharge, Some(Recharge::TurnStart(_))))
            .map(|l| {
                l.clone()
                    .map(|_| TextAnnotation::DiceExpression(DiceExpression::dice(1, 6)))
            })
            .collect()
    }

    /// Annotations on the description: dice, then spell references.
    #[must_use]
    pub fn description_annotations(&self) -> Vec<Located<TextAnnotation>> {
        let references = self
            .spellcasting
            .iter()
            .flat_map(Spellcasting::spell_references)
            .map(|r| r.clone().map(TextAnnotation::Reference));
        self.other_description_annotations
            .iter()
            .cloned()
            .chain(references)
            .collect()
    }
}

impl DomainModel for ParsedCreatureFeature {
    const VERSION: &'static str = "1";
}

fn parse_creature_feature(input: &CreatureFeature) -> Option<ParsedCreatureFeature> {
    let name = input.name.to_lowercase();
    let spellcasting = if name.contains("spellcasting") {
        spellcasting(&input.description, name.contains("innate"))
    } else {
        None
    };
    ParsedCreatureFeature::new(
        limited_use_in_name(&input.name),
        spellcasting,
        dice_annotations(&input.description),
    )
}

/// The creature feature domain parser.
pub const CREATURE_FEATURE_PARSER: DomainParser<CreatureFeature, ParsedCreatureFeature> =
    DomainParser::new("CreatureFeatureDomainParser", "2", parse_creature_feature);

/// A creature feature with its cached parse.
pub type ParseableCreatureFeature = Parseable<CreatureFeature, ParsedCreatureFeature>;
