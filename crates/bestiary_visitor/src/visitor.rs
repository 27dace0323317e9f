//! The entity-graph visitor.
//!
//! [`GameModelsVisitor`] has one hook per node kind. Each hook returns true
//! if it changed anything. The default hooks recurse through the matching
//! `walk_*` function, so an implementation overrides only the nodes it cares
//! about and calls the `walk_*` function itself when it still wants the
//! children visited.
//!
//! Children are visited in a fixed order:
//!
//! ```text
//! running encounter: base, current
//! encounter:         combatants in order
//! combatant:         definition, party
//! ad-hoc definition: stat block, original
//! entry:             item, created-from reference
//! group:             members in order
//! stat block:        type, features, actions, reactions, legendary actions
//! feature:           spell references in the cached spellcasting block
//! ```

use bestiary_foundation::CompendiumItemReference;
use bestiary_grammar::{
    ParseableCreatureAction, ParseableCreatureFeature, ParseableMonsterType,
    ParseableSpellDescription,
};
use bestiary_models::{
    AdHocCombatantDefinition, Character, Combatant, CombatantDefinition, CompendiumCombatant,
    CompendiumCombatantDefinition, CompendiumEntry, CompendiumImportJob, CompendiumItem,
    CompendiumItemGroup, Encounter, Monster, Origin, RunningEncounter, Spell, StatBlock,
};

use crate::combine::{optional_visit, visit_each};
use crate::visit_all;

/// A mutating walk over the entity graph.
///
/// Every method returns true if the visitor changed anything at or below
/// the node.
#[allow(unused_variables)]
pub trait GameModelsVisitor {
    /// Visits an encounter.
    fn visit_encounter(&mut self, encounter: &mut Encounter) -> bool {
        walk_encounter(self, encounter)
    }

    /// Visits a running encounter.
    fn visit_running_encounter(&mut self, running: &mut RunningEncounter) -> bool {
        walk_running_encounter(self, running)
    }

    /// Visits a combatant.
    fn visit_combatant(&mut self, combatant: &mut Combatant) -> bool {
        walk_combatant(self, combatant)
    }

    /// Visits an ad-hoc combatant definition.
    fn visit_ad_hoc_definition(&mut self, definition: &mut AdHocCombatantDefinition) -> bool {
        walk_ad_hoc_definition(self, definition)
    }

    /// Visits a compendium-backed combatant definition.
    fn visit_compendium_definition(
        &mut self,
        definition: &mut CompendiumCombatantDefinition,
    ) -> bool {
        walk_compendium_definition(self, definition)
    }

    /// Visits a compendium entry.
    fn visit_compendium_entry(&mut self, entry: &mut CompendiumEntry) -> bool {
        walk_compendium_entry(self, entry)
    }

    /// Visits a compendium item.
    fn visit_compendium_item(&mut self, item: &mut CompendiumItem) -> bool {
        walk_compendium_item(self, item)
    }

    /// Visits a monster.
    fn visit_monster(&mut self, monster: &mut Monster) -> bool {
        self.visit_stat_block(&mut monster.stats)
    }

    /// Visits a character.
    fn visit_character(&mut self, character: &mut Character) -> bool {
        self.visit_stat_block(&mut character.stats)
    }

    /// Visits a spell.
    fn visit_spell(&mut self, spell: &mut Spell) -> bool {
        self.visit_spell_description(&mut spell.description)
    }

    /// Visits an item group.
    fn visit_item_group(&mut self, group: &mut CompendiumItemGroup) -> bool {
        visit_each(&mut group.members, |member| self.visit_item_reference(member))
    }

    /// Visits a stat block.
    fn visit_stat_block(&mut self, stats: &mut StatBlock) -> bool {
        walk_stat_block(self, stats)
    }

    /// Visits a creature feature.
    fn visit_creature_feature(&mut self, feature: &mut ParseableCreatureFeature) -> bool {
        walk_creature_feature(self, feature)
    }

    /// Visits a creature action, reaction, or legendary action.
    fn visit_creature_action(&mut self, action: &mut ParseableCreatureAction) -> bool {
        false
    }

    /// Visits a stat block's monster type.
    fn visit_monster_type(&mut self, monster_type: &mut ParseableMonsterType) -> bool {
        false
    }

    /// Visits a spell description.
    fn visit_spell_description(&mut self, description: &mut ParseableSpellDescription) -> bool {
        false
    }

    /// Visits a reference to a compendium item.
    fn visit_item_reference(&mut self, reference: &mut CompendiumItemReference) -> bool {
        false
    }

    /// Visits an import job.
    fn visit_import_job(&mut self, job: &mut CompendiumImportJob) -> bool {
        false
    }
}

/// Visits the combatants in order.
pub fn walk_encounter<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    encounter: &mut Encounter,
) -> bool {
    visit_each(&mut encounter.combatants, |combatant| {
        visitor.visit_combatant(combatant)
    })
}

/// Visits the base encounter, then the current one.
pub fn walk_running_encounter<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    running: &mut RunningEncounter,
) -> bool {
    visit_all!(
        visitor.visit_encounter(&mut running.base),
        visitor.visit_encounter(&mut running.current),
    )
}

/// Visits the definition, then the party reference.
pub fn walk_combatant<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    combatant: &mut Combatant,
) -> bool {
    visit_all!(
        match &mut combatant.definition {
            CombatantDefinition::AdHoc(definition) => visitor.visit_ad_hoc_definition(definition),
            CombatantDefinition::Compendium(definition) => {
                visitor.visit_compendium_definition(definition)
            }
        },
        optional_visit(&mut combatant.party, |party| {
            visitor.visit_item_reference(party)
        }),
    )
}

/// Visits the stat block, then the reference to the original item.
pub fn walk_ad_hoc_definition<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    definition: &mut AdHocCombatantDefinition,
) -> bool {
    visit_all!(
        visitor.visit_stat_block(&mut definition.stats),
        optional_visit(&mut definition.original, |original| {
            visitor.visit_item_reference(original)
        }),
    )
}

/// Visits the monster or character snapshot.
pub fn walk_compendium_definition<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    definition: &mut CompendiumCombatantDefinition,
) -> bool {
    match &mut definition.item {
        CompendiumCombatant::Monster(monster) => visitor.visit_monster(monster),
        CompendiumCombatant::Character(character) => visitor.visit_character(character),
    }
}

/// Visits the item, then the reference it was created from.
pub fn walk_compendium_entry<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    entry: &mut CompendiumEntry,
) -> bool {
    visit_all!(
        visitor.visit_compendium_item(&mut entry.item),
        match &mut entry.origin {
            Origin::Created(Some(reference)) => visitor.visit_item_reference(reference),
            Origin::Created(None) | Origin::Imported(_) => false,
        },
    )
}

/// Dispatches on the item kind.
pub fn walk_compendium_item<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    item: &mut CompendiumItem,
) -> bool {
    match item {
        CompendiumItem::Monster(monster) => visitor.visit_monster(monster),
        CompendiumItem::Character(character) => visitor.visit_character(character),
        CompendiumItem::Spell(spell) => visitor.visit_spell(spell),
        CompendiumItem::Group(group) => visitor.visit_item_group(group),
    }
}

/// Visits the type, features, actions, reactions, and legendary actions.
pub fn walk_stat_block<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    stats: &mut StatBlock,
) -> bool {
    visit_all!(
        optional_visit(&mut stats.creature_type, |t| visitor.visit_monster_type(t)),
        visit_each(&mut stats.features, |f| visitor.visit_creature_feature(f)),
        visit_each(&mut stats.actions, |a| visitor.visit_creature_action(a)),
        visit_each(&mut stats.reactions, |a| visitor.visit_creature_action(a)),
        optional_visit(&mut stats.legendary, |legendary| {
            visit_each(&mut legendary.actions, |a| visitor.visit_creature_action(a))
        }),
    )
}

/// Visits the resolved spell references of a cached spellcasting block.
///
/// Nothing is visited when the feature has no cached result.
pub fn walk_creature_feature<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    feature: &mut ParseableCreatureFeature,
) -> bool {
    let Some(spellcasting) = feature
        .cached_value_mut()
        .and_then(|parsed| parsed.spellcasting.as_mut())
    else {
        return false;
    };
    spellcasting
        .spell_references_mut()
        .fold(false, |changed, spell| {
            optional_visit(&mut spell.value.resolved_to, |reference| {
                visitor.visit_item_reference(reference)
            }) || changed
        })
}
