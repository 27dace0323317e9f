//! The entity graph for Bestiary.
//!
//! Ownership is a tree:
//!
//! ```text
//! RunningEncounter ─▶ Encounter (base, current)
//! Encounter ─▶ Combatant* ─▶ CombatantDefinition ─▶ StatBlock
//!                              ├─ AdHoc
//!                              └─ Compendium ─▶ Monster | Character
//! CompendiumEntry ─▶ CompendiumItem ─▶ Monster | Character | Spell | Group
//! StatBlock ─▶ monster type, features, actions, reactions, legendary actions
//! ```
//!
//! The only edges that leave the tree are item references and
//! `CombatantTag::source_combatant`, which are lookup keys.
//!
//! This crate provides:
//! - [`StatBlock`] - A creature's statistics with parseable text
//! - [`CompendiumItem`] and [`CompendiumEntry`] - Stored compendium content
//! - [`Encounter`] and [`RunningEncounter`] - Encounters and their combatants
//! - [`GameEntity`] - The top-level entities a visitor pass runs over

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compendium;
pub mod encounter;
pub mod entity;
pub mod ids;
pub mod stat_block;

pub use compendium::{
    Character, CompendiumEntry, CompendiumImportJob, CompendiumItem, CompendiumItemGroup,
    CompendiumSourceDocument, DocumentRef, ImportSourceId, Monster, Origin, Spell, SpellComponent,
};
pub use encounter::{
    AdHocCombatantDefinition, Combatant, CombatantDefinition, CombatantTag, CompendiumCombatant,
    CompendiumCombatantDefinition, Encounter, Hp, RunningEncounter, Turn,
};
pub use entity::GameEntity;
pub use ids::{
    AdHocCombatantId, CharacterId, CombatantId, DocumentId, EncounterId, GroupId, ImportJobId,
    RunningEncounterId,
};
pub use stat_block::{CreatureSize, Legendary, StatBlock};
