//! Re-keying references to compendium items.

use std::fmt;

use bestiary_foundation::{CompendiumItemKey, CompendiumItemReference};
use bestiary_models::{CharacterId, CompendiumCombatant, CompendiumCombatantDefinition};

use crate::combine::visit_value;
use crate::visitor::{GameModelsVisitor, walk_compendium_definition};

/// Maps an old key to its new key, or `None` to leave it alone.
pub type KeyRemap = Box<dyn Fn(&CompendiumItemKey) -> Option<CompendiumItemKey>>;

/// Applies a key remapping to every item reference and every
/// compendium-backed combatant.
pub struct UpdateItemReferenceVisitor {
    remap: KeyRemap,
}

impl UpdateItemReferenceVisitor {
    /// Creates the visitor.
    pub fn new(remap: impl Fn(&CompendiumItemKey) -> Option<CompendiumItemKey> + 'static) -> Self {
        Self {
            remap: Box::new(remap),
        }
    }
}

impl fmt::Debug for UpdateItemReferenceVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateItemReferenceVisitor").finish_non_exhaustive()
    }
}

impl GameModelsVisitor for UpdateItemReferenceVisitor {
    fn visit_item_reference(&mut self, reference: &mut CompendiumItemReference) -> bool {
        match (self.remap)(&reference.item_key) {
            Some(key) => visit_value(&mut reference.item_key, key),
            None => false,
        }
    }

    fn visit_compendium_definition(
        &mut self,
        definition: &mut CompendiumCombatantDefinition,
    ) -> bool {
        let children = walk_compendium_definition(self, definition);
        let current = definition.item.key();
        let Some(key) = (self.remap)(&current) else {
            return children;
        };
        debug_assert_eq!(
            key.item_type, current.item_type,
            "remapping {current} changes its item type"
        );
        if key.item_type != current.item_type {
            return children;
        }
        let rekeyed = match &mut definition.item {
            CompendiumCombatant::Monster(monster) => {
                let realm = visit_value(&mut monster.realm, key.realm);
                visit_value(&mut monster.stats.name, key.identifier) || realm
            }
            CompendiumCombatant::Character(character) => {
                let realm = visit_value(&mut character.realm, key.realm);
                visit_value(&mut character.id, CharacterId::new(key.identifier)) || realm
            }
        };
        children || rekeyed
    }
}
