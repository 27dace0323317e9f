//! Stat blocks: the numbers and free text describing a creature.

use std::fmt;

use bestiary_grammar::{
    CreatureAction, CreatureFeature, ParseableCreatureAction, ParseableCreatureFeature,
    ParseableMonsterType,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Creature size categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum CreatureSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl fmt::Display for CreatureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tiny => "Tiny",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Huge => "Huge",
            Self::Gargantuan => "Gargantuan",
        };
        f.write_str(name)
    }
}

/// Legendary actions and their preamble.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Legendary {
    /// The preamble, e.g. "The dragon can take 3 legendary actions...".
    pub description: Option<String>,
    /// The legendary actions.
    pub actions: Vec<ParseableCreatureAction>,
}

/// A creature's statistics.
///
/// Every free-text field that a grammar understands is held as a
/// `Parseable`, so its structured reading travels with it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatBlock {
    /// Creature name.
    pub name: String,
    /// Size category.
    pub size: Option<CreatureSize>,
    /// Creature type as written, e.g. `swarm of Tiny beasts`.
    pub creature_type: Option<ParseableMonsterType>,
    /// Subtype, e.g. `goblinoid`.
    pub subtype: Option<String>,
    /// Armor class.
    pub armor_class: Option<i32>,
    /// Average hit points.
    pub hit_points: Option<i32>,
    /// Challenge rating as written, e.g. `1/4`.
    pub challenge_rating: Option<String>,
    /// Features and traits.
    pub features: Vec<ParseableCreatureFeature>,
    /// Actions.
    pub actions: Vec<ParseableCreatureAction>,
    /// Reactions.
    pub reactions: Vec<ParseableCreatureAction>,
    /// Legendary actions, if any.
    pub legendary: Option<Legendary>,
}

impl StatBlock {
    /// An otherwise empty stat block with a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the creature type text.
    #[must_use]
    pub fn with_type(mut self, creature_type: impl Into<String>) -> Self {
        self.creature_type = Some(ParseableMonsterType::new(creature_type.into()));
        self
    }

    /// Appends a feature.
    #[must_use]
    pub fn with_feature(mut self, feature: CreatureFeature) -> Self {
        self.features.push(ParseableCreatureFeature::new(feature));
        self
    }

    /// Appends an action.
    #[must_use]
    pub fn with_action(mut self, action: CreatureAction) -> Self {
        self.actions.push(ParseableCreatureAction::new(action));
        self
    }

    /// Appends a reaction.
    #[must_use]
    pub fn with_reaction(mut self, reaction: CreatureAction) -> Self {
        self.reactions.push(ParseableCreatureAction::new(reaction));
        self
    }

    /// Appends a legendary action, creating the legendary block if needed.
    #[must_use]
    pub fn with_legendary_action(mut self, action: CreatureAction) -> Self {
        self.legendary
            .get_or_insert_with(Legendary::default)
            .actions
            .push(ParseableCreatureAction::new(action));
        self
    }

    /// Number of parseable fields in this stat block.
    #[must_use]
    pub fn parseable_count(&self) -> usize {
        usize::from(self.creature_type.is_some())
            + self.features.len()
            + self.actions.len()
            + self.reactions.len()
            + self.legendary.as_ref().map_or(0, |l| l.actions.len())
    }
}
