//! Encounters, combatants, and combatant definitions.

use bestiary_foundation::{CompendiumItemKey, CompendiumItemReference};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::compendium::{Character, Monster};
use crate::ids::{AdHocCombatantId, CombatantId, EncounterId, RunningEncounterId};
use crate::stat_block::StatBlock;

/// An encounter: an ordered list of combatants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Encounter {
    /// Encounter id.
    pub id: EncounterId,
    /// Display name.
    pub name: String,
    /// Combatants in turn-list order.
    pub combatants: Vec<Combatant>,
}

impl Encounter {
    /// Creates an empty encounter.
    #[must_use]
    pub fn new(id: EncounterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            combatants: Vec::new(),
        }
    }

    /// Appends a combatant.
    #[must_use]
    pub fn with_combatant(mut self, combatant: Combatant) -> Self {
        self.combatants.push(combatant);
        self
    }

    /// Looks up a combatant by id.
    #[must_use]
    pub fn combatant(&self, id: &CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| &c.id == id)
    }
}

/// Whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Turn {
    /// Round number, starting at 1.
    pub round: u32,
    /// The acting combatant.
    pub combatant_id: CombatantId,
}

/// An encounter being played: the encounter as prepared and as it stands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunningEncounter {
    /// Running encounter id.
    pub id: RunningEncounterId,
    /// The encounter when it was started.
    pub base: Encounter,
    /// The encounter as it stands now.
    pub current: Encounter,
    /// The current turn, if the encounter has started.
    pub turn: Option<Turn>,
}

impl RunningEncounter {
    /// Starts running `encounter`.
    #[must_use]
    pub fn start(id: RunningEncounterId, encounter: Encounter) -> Self {
        Self {
            id,
            current: encounter.clone(),
            base: encounter,
            turn: None,
        }
    }
}

/// Hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hp {
    /// Current hit points.
    pub current: i32,
    /// Maximum hit points.
    pub maximum: i32,
    /// Temporary hit points.
    pub temporary: i32,
}

impl Hp {
    /// Full hit points.
    #[must_use]
    pub const fn full(maximum: i32) -> Self {
        Self {
            current: maximum,
            maximum,
            temporary: 0,
        }
    }
}

/// A tag on a combatant, such as a condition applied by another combatant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CombatantTag {
    /// Tag name, e.g. `Poisoned`.
    pub name: String,
    /// Free-form note.
    pub note: Option<String>,
    /// The combatant the tag came from. Only a lookup key.
    pub source_combatant: Option<CombatantId>,
}

/// One participant in an encounter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Combatant {
    /// Id within the encounter.
    pub id: CombatantId,
    /// What the combatant is.
    pub definition: CombatantDefinition,
    /// Hit points, once tracked.
    pub hp: Option<Hp>,
    /// Initiative roll.
    pub initiative: Option<i32>,
    /// Tags.
    pub tags: Vec<CombatantTag>,
    /// The party the combatant belongs to.
    pub party: Option<CompendiumItemReference>,
}

impl Combatant {
    /// Creates a combatant with nothing tracked yet.
    #[must_use]
    pub fn new(id: CombatantId, definition: CombatantDefinition) -> Self {
        Self {
            id,
            definition,
            hp: None,
            initiative: None,
            tags: Vec::new(),
            party: None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.stats().name
    }
}

/// A one-off creature defined inside an encounter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdHocCombatantDefinition {
    /// Definition id.
    pub id: AdHocCombatantId,
    /// Statistics.
    pub stats: StatBlock,
    /// Character level, for player stand-ins.
    pub level: Option<i32>,
    /// The compendium item this was copied from.
    pub original: Option<CompendiumItemReference>,
}

/// The compendium items that can join an encounter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum CompendiumCombatant {
    Monster(Monster),
    Character(Character),
}

impl CompendiumCombatant {
    /// The item's key.
    #[must_use]
    pub fn key(&self) -> CompendiumItemKey {
        match self {
            Self::Monster(m) => m.key(),
            Self::Character(c) => c.key(),
        }
    }

    /// Statistics.
    #[must_use]
    pub fn stats(&self) -> &StatBlock {
        match self {
            Self::Monster(m) => &m.stats,
            Self::Character(c) => &c.stats,
        }
    }
}

/// A combatant backed by a compendium item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompendiumCombatantDefinition {
    /// A snapshot of the item.
    pub item: CompendiumCombatant,
    /// Whether the combatant outlives the encounter (e.g. a player character).
    pub persistent: bool,
}

/// What a combatant is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum CombatantDefinition {
    AdHoc(AdHocCombatantDefinition),
    Compendium(CompendiumCombatantDefinition),
}

impl CombatantDefinition {
    /// Statistics.
    #[must_use]
    pub fn stats(&self) -> &StatBlock {
        match self {
            Self::AdHoc(d) => &d.stats,
            Self::Compendium(d) => d.item.stats(),
        }
    }

    /// The compendium key, for compendium-backed definitions.
    #[must_use]
    pub fn key(&self) -> Option<CompendiumItemKey> {
        match self {
            Self::AdHoc(_) => None,
            Self::Compendium(d) => Some(d.item.key()),
        }
    }
}
