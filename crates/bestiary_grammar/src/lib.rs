//! Domain grammars for Bestiary.
//!
//! Each content kind has a grammar built from `bestiary_combinator`, a
//! structured result model, and a versioned [`DomainParser`] descriptor:
//!
//! ```text
//!  CreatureAction ──▶ limited_use_in_name ─┐
//!       │                                  ├─▶ ParsedCreatureAction
//!       └──────────▶ weapon_attack ────────┤
//!                    saving_throw_action ──┤
//!                    dice_matches ─────────┘
//!
//!  CreatureFeature ─▶ limited_use_in_name ─┐
//!                     spellcasting ────────┼─▶ ParsedCreatureFeature
//!                     dice_matches ────────┘
//!
//!  spell description ─▶ dice_matches ─────▶ ParsedSpellDescription
//!  monster type text ─▶ monster_type_in ──▶ ParsedMonsterType
//! ```
//!
//! All grammars run on case-folded text with the same `char` count as the
//! input, so every located range points into the original string.
//!
//! # Modules
//!
//! - [`mechanics`] - Abilities, damage types, conditions, limited use
//! - [`dice`] - Dice expressions in free text
//! - [`limited_use`] - `3/Day`, `Recharge 5-6`, rest recharges
//! - [`effects`] - On-hit effects
//! - [`attack`] - Weapon attacks
//! - [`saving_throw`] - Saving-throw actions with labeled outcomes
//! - [`action`] - Creature actions
//! - [`spellcasting`] - Spellcasting blocks
//! - [`feature`] - Creature features
//! - [`spell`] - Spell descriptions
//! - [`monster_type`] - Monster types
//! - [`registry`] - The [`DomainParsers`] in effect
//!
//! [`DomainParser`]: bestiary_foundation::DomainParser

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc)]

pub mod action;
pub mod attack;
pub mod dice;
pub mod effects;
pub mod feature;
pub mod limited_use;
pub mod mechanics;
pub mod monster_type;
pub mod registry;
pub mod saving_throw;
pub mod spell;
pub mod spellcasting;

pub use action::{
    CREATURE_ACTION_PARSER, CreatureAction, CreatureActionModel, ParseableCreatureAction,
    ParsedCreatureAction, parse_action_model,
};
pub use attack::{AttackRange, ConditionalHitModifier, WeaponAttack, weapon_attack};
pub use dice::{dice_expression, dice_matches, parse_dice_expression};
pub use effects::{
    AttackEffect, AttackType, ConditionEffect, Damage, EffectConditions, SaveEffect, SavingThrow,
    VersatileWeaponGrip,
};
pub use feature::{
    CREATURE_FEATURE_PARSER, CreatureFeature, ParseableCreatureFeature, ParsedCreatureFeature,
};
pub use limited_use::{limited_use, limited_use_in_name};
pub use mechanics::{Ability, CreatureCondition, DamageType, LimitedUse, Modifier, Recharge};
pub use monster_type::{
    MONSTER_TYPE_PARSER, MonsterType, ParseableMonsterType, ParsedMonsterType, monster_type_in,
};
pub use registry::DomainParsers;
pub use saving_throw::{Outcome, OutcomeEffect, SavingThrowAction, saving_throw_action};
pub use spell::{ParseableSpellDescription, ParsedSpellDescription, SPELL_DESCRIPTION_PARSER};
pub use spellcasting::{LimitedUseSpellGroup, Spellcasting, spellcasting};
