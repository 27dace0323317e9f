//! Creature actions: the raw input, the parsed model, and its domain parser.

use bestiary_combinator::fold_case;
use bestiary_foundation::{
    DiceExpression, DomainModel, DomainParser, Located, Parseable, TextAnnotation,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attack::{WeaponAttack, weapon_attack};
use crate::dice::dice_matches;
use crate::limited_use::limited_use_in_name;
use crate::mechanics::{LimitedUse, Recharge};
use crate::saving_throw::{SavingThrowAction, saving_throw_action};

/// An action as written in a stat block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreatureAction {
    /// Name, e.g. `Fire Breath (Recharge 5-6)`.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

impl CreatureAction {
    /// Creates an action.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The structured reading of an action description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CreatureActionModel {
    /// An attack roll against the target.
    WeaponAttack(WeaponAttack),
    /// A saving throw made by the target.
    SavingThrow(SavingThrowAction),
}

/// Everything parsed from a [`CreatureAction`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedCreatureAction {
    /// Limited use found in the name. The range is in `char`s of the name.
    pub limited_use: Option<Located<LimitedUse>>,
    /// The structured action.
    pub action: Option<CreatureActionModel>,
    /// Dice found in the description.
    pub other_description_annotations: Vec<Located<TextAnnotation>>,
}

impl ParsedCreatureAction {
    /// Returns `None` if every part is empty.
    #[must_use]
    pub fn new(
        limited_use: Option<Located<LimitedUse>>,
        action: Option<CreatureActionModel>,
        other_description_annotations: Vec<Located<TextAnnotation>>,
    ) -> Option<Self> {
        if limited_use.is_none() && action.is_none() && other_description_annotations.is_empty() {
            return None;
        }
        Some(Self {
            limited_use,
            action,
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

    /// Annotations on the description.
    #[must_use]
    pub fn description_annotations(&self) -> &[Located<TextAnnotation>] {
        &self.other_description_annotations
    }
}

impl DomainModel for ParsedCreatureAction {
    const VERSION: &'static str = "1";
}

/// Parses an action description, trying a weapon attack before a
/// saving-throw action.
#[must_use]
pub fn parse_action_model(description: &str) -> Option<CreatureActionModel> {
    let folded = fold_case(description);
    weapon_attack()
        .run(&folded)
        .map(CreatureActionModel::WeaponAttack)
        .or_else(|| saving_throw_action(&folded).map(CreatureActionModel::SavingThrow))
}

/// Dice annotations for every dice expression in `text`.
pub(crate) fn dice_annotations(text: &str) -> Vec<Located<TextAnnotation>> {
    dice_matches(text)
        .into_iter()
        .map(|m| m.map(TextAnnotation::DiceExpression))
        .collect()
}

fn parse_creature_action(input: &CreatureAction) -> Option<ParsedCreatureAction> {
    ParsedCreatureAction::new(
        limited_use_in_name(&input.name),
        parse_action_model(&input.description),
        dice_annotations(&input.description),
    )
}

/// The creature action domain parser.
pub const CREATURE_ACTION_PARSER: DomainParser<CreatureAction, ParsedCreatureAction> =
    DomainParser::new("CreatureActionDomainParser", "1", parse_creature_action);

/// A creature action with its cached parse.
pub type ParseableCreatureAction = Parseable<CreatureAction, ParsedCreatureAction>;
