//! Visitors over the Bestiary entity graph.
//!
//! A visitor walks the graph in a fixed order and reports whether it
//! changed anything. Two kinds are provided:
//!
//! - [`ReparseVisitor`] - Brings every cached parse result up to date
//! - Rewrites after compendium changes: [`PostDocumentMoveVisitor`],
//!   [`UpdateEntryDocumentVisitor`], [`UpdateImportJobVisitor`], and
//!   [`UpdateItemReferenceVisitor`]
//!
//! [`run_pass`] runs a set of visitors over a slice of top-level entities.
//!
//! # Example
//!
//! ```
//! use bestiary_foundation::RealmId;
//! use bestiary_grammar::CreatureAction;
//! use bestiary_models::{Monster, StatBlock};
//! use bestiary_visitor::{GameModelsVisitor, ReparseVisitor};
//!
//! let mut goblin = Monster::new(
//!     RealmId::core(),
//!     StatBlock::named("Goblin").with_action(CreatureAction::new(
//!         "Scimitar",
//!         "Melee Weapon Attack: +4 to hit, reach 5 ft., one target. Hit: 5 (1d6 + 2) \
//!          slashing damage.",
//!     )),
//! );
//! let mut visitor = ReparseVisitor::default();
//! assert!(visitor.visit_monster(&mut goblin));
//! assert!(!visitor.visit_monster(&mut goblin));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combine;
pub mod document_move;
pub mod entry_document;
pub mod import_job;
pub mod item_reference;
pub mod pass;
pub mod reparse;
pub mod visitor;

pub use combine::{optional_visit, visit_each, visit_value};
pub use document_move::PostDocumentMoveVisitor;
pub use entry_document::UpdateEntryDocumentVisitor;
pub use import_job::UpdateImportJobVisitor;
pub use item_reference::{KeyRemap, UpdateItemReferenceVisitor};
pub use pass::{PassReport, run_pass, visit_entity};
pub use reparse::{ReparseStats, ReparseVisitor};
pub use visitor::{
    GameModelsVisitor, walk_ad_hoc_definition, walk_combatant, walk_compendium_definition,
    walk_compendium_entry, walk_compendium_item, walk_creature_feature, walk_encounter,
    walk_running_encounter, walk_stat_block,
};
