//! Game-mechanics vocabulary shared by the grammars.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six ability scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Ability {
    /// Strength
    Strength,
    /// Dexterity
    Dexterity,
    /// Constitution
    Constitution,
    /// Intelligence
    Intelligence,
    /// Wisdom
    Wisdom,
    /// Charisma
    Charisma,
}

impl Ability {
    /// All abilities, in stat block order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Lowercase full name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Looks up a lowercase full name.
    #[must_use]
    pub fn from_name(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref();
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }
}

/// Damage types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum DamageType {
    Acid,
    Bludgeoning,
    Cold,
    Fire,
    Force,
    Lightning,
    Necrotic,
    Piercing,
    Poison,
    Psychic,
    Radiant,
    Slashing,
    Thunder,
}

impl DamageType {
    /// All damage types, alphabetically.
    pub const ALL: [DamageType; 13] = [
        DamageType::Acid,
        DamageType::Bludgeoning,
        DamageType::Cold,
        DamageType::Fire,
        DamageType::Force,
        DamageType::Lightning,
        DamageType::Necrotic,
        DamageType::Piercing,
        DamageType::Poison,
        DamageType::Psychic,
        DamageType::Radiant,
        DamageType::Slashing,
        DamageType::Thunder,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acid => "acid",
            Self::Bludgeoning => "bludgeoning",
            Self::Cold => "cold",
            Self::Fire => "fire",
            Self::Force => "force",
            Self::Lightning => "lightning",
            Self::Necrotic => "necrotic",
            Self::Piercing => "piercing",
            Self::Poison => "poison",
            Self::Psychic => "psychic",
            Self::Radiant => "radiant",
            Self::Slashing => "slashing",
            Self::Thunder => "thunder",
        }
    }

    /// Looks up a lowercase name.
    #[must_use]
    pub fn from_name(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref();
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

/// Conditions a creature can suffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum CreatureCondition {
    Blinded,
    Charmed,
    Deafened,
    Fatigued,
    Frightened,
    Grappled,
    Incapacitated,
    Invisible,
    Paralyzed,
    Petrified,
    Poisoned,
    Prone,
    Restrained,
    Stunned,
    Unconscious,
}

impl CreatureCondition {
    /// All conditions, alphabetically.
    pub const ALL: [CreatureCondition; 15] = [
        CreatureCondition::Blinded,
        CreatureCondition::Charmed,
        CreatureCondition::Deafened,
        CreatureCondition::Fatigued,
        CreatureCondition::Frightened,
        CreatureCondition::Grappled,
        CreatureCondition::Incapacitated,
        CreatureCondition::Invisible,
        CreatureCondition::Paralyzed,
        CreatureCondition::Petrified,
        CreatureCondition::Poisoned,
        CreatureCondition::Prone,
        CreatureCondition::Restrained,
        CreatureCondition::Stunned,
        CreatureCondition::Unconscious,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blinded => "blinded",
            Self::Charmed => "charmed",
            Self::Deafened => "deafened",
            Self::Fatigued => "fatigued",
            Self::Frightened => "frightened",
            Self::Grappled => "grappled",
            Self::Incapacitated => "incapacitated",
            Self::Invisible => "invisible",
            Self::Paralyzed => "paralyzed",
            Self::Petrified => "petrified",
            Self::Poisoned => "poisoned",
            Self::Prone => "prone",
            Self::Restrained => "restrained",
            Self::Stunned => "stunned",
            Self::Unconscious => "unconscious",
        }
    }

    /// Looks up a lowercase name. Accepts a few spellings common in
    /// published content.
    #[must_use]
    pub fn from_name(name: impl AsRef<str>) -> Option<Self> {
        match name.as_ref() {
            "unconcious" => Some(Self::Unconscious),
            "poisioned" => Some(Self::Poisoned),
            "paralysed" => Some(Self::Paralyzed),
            name => Self::ALL.into_iter().find(|c| c.as_str() == name),
        }
    }
}

/// A signed bonus such as a to-hit modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Modifier(pub i32);

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// How a limited-use ability comes back.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Recharge {
    /// Uses are restored each day.
    Day,
    /// Uses are restored after a rest.
    Rest {
        /// A short rest suffices.
        short: bool,
        /// A long rest suffices.
        long: bool,
    },
    /// At the start of each turn, a d6 roll showing one of these faces
    /// restores the ability.
    TurnStart(BTreeSet<i32>),
}

/// "Usable `amount` times, recharging by `recharge`".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LimitedUse {
    /// Number of uses.
    pub amount: i32,
    /// How uses come back, if they do.
    pub recharge: Option<Recharge>,
}

impl LimitedUse {
    /// `amount` uses per day.
    #[must_use]
    pub fn per_day(amount: i32) -> Self {
        Self {
            amount,
            recharge: Some(Recharge::Day),
        }
    }

    /// One use, recharging on any d6 face in `faces`.
    #[must_use]
    pub fn recharge(faces: impl IntoIterator<Item = i32>) -> Self {
        Self {
            amount: 1,
            recharge: Some(Recharge::TurnStart(faces.into_iter().collect())),
        }
    }

    /// One use, recharging after the given rests.
    #[must_use]
    pub fn rest(short: bool, long: bool) -> Self {
        Self {
            amount: 1,
            recharge: Some(Recharge::Rest { short, long }),
        }
    }

    fn amount_string(&self) -> String {
        if self.amount == 1 {
            "1 time".to_string()
        } else {
            format!("{} times", self.amount)
        }
    }
}

impl fmt::Display for LimitedUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.amount_string();
        match &self.recharge {
            None | Some(Recharge::Rest { short: false, long: false }) => f.write_str(&amount),
            Some(Recharge::Day) => write!(f, "{}/Day", self.amount),
            Some(Recharge::Rest { short, long }) => {
                let rest = match (short, long) {
                    (true, true) => "Short or Long Rest",
                    (true, false) => "Short Rest",
                    _ => "Long Rest",
                };
                if self.amount == 1 {
                    write!(f, "Recharges after a {rest}")
                } else {
                    write!(f, "{amount} per {rest}")
                }
            }
            Some(Recharge::TurnStart(faces)) => {
                let faces = match (faces.first(), faces.last()) {
                    (Some(low), Some(high)) if low != high => format!("{low}-{high}"),
                    (Some(face), _) => face.to_string(),
                    _ => String::new(),
                };
                if self.amount == 1 {
                    write!(f, "Recharge {faces}")
                } else {
                    write!(f, "{amount}, Recharge {faces}")
                }
            }
        }
    }
}
