//! Shared entity graphs.

use bestiary_foundation::{CompendiumItemReference, RealmId};
use bestiary_grammar::{CreatureAction, CreatureFeature};
use bestiary_models::{
    AdHocCombatantDefinition, Combatant, CombatantDefinition, CombatantId, CompendiumCombatant,
    CompendiumCombatantDefinition, CompendiumEntry, CompendiumImportJob, CompendiumItem,
    CompendiumSourceDocument, DocumentId, Encounter, EncounterId, GameEntity, ImportJobId,
    ImportSourceId, Monster, Origin, RunningEncounter, RunningEncounterId, Spell, StatBlock,
};

pub const ACOLYTE_SPELLS: &str = "The acolyte is a 1st-level spellcaster. Its spellcasting \
    ability is Wisdom (spell save DC 12, +4 to hit with spell attacks). The acolyte has following \
    cleric spells prepared:\n\nCantrips (at will): light, sacred flame, thaumaturgy\n1st level (3 \
    slots): bless, cure wounds, sanctuary";

pub fn srd() -> CompendiumSourceDocument {
    CompendiumSourceDocument::new(
        DocumentId::new("srd"),
        RealmId::core(),
        "Systems Reference Document",
    )
}

/// Two parseable leaves: one action and one reaction.
pub fn goblin() -> Monster {
    Monster::new(
        RealmId::core(),
        StatBlock::named("Goblin")
            .with_action(CreatureAction::new(
                "Scimitar",
                "Melee Weapon Attack: +4 to hit, reach 5 ft., one target. Hit: 5 (1d6 + 2) \
                slashing damage.",
            ))
            .with_reaction(CreatureAction::new(
                "Redirect Attack",
                "When a creature the goblin can see targets it with an attack, the goblin chooses \
                another goblin within 5 feet of it.",
            )),
    )
}

/// Three parseable leaves: type, feature, and action.
pub fn acolyte() -> Monster {
    Monster::new(
        RealmId::core(),
        StatBlock::named("Acolyte")
            .with_type("humanoid (any race)")
            .with_feature(CreatureFeature::new("Spellcasting", ACOLYTE_SPELLS))
            .with_action(CreatureAction::new(
                "Club",
                "Melee Weapon Attack: +2 to hit, reach 5 ft., one target. Hit: 2 (1d4) \
                bludgeoning damage.",
            )),
    )
}

pub fn fireball() -> Spell {
    Spell::new(
        RealmId::core(),
        "Fireball",
        "Each creature in a 20-foot radius takes 8d6 fire damage.",
    )
}

pub fn entry(item: CompendiumItem) -> CompendiumEntry {
    CompendiumEntry::new(item, Origin::Imported(Some(ImportJobId::new("job-1"))), srd().reference())
}

pub fn compendium_combatant(id: &str, monster: Monster) -> Combatant {
    Combatant::new(
        CombatantId::new(id),
        CombatantDefinition::Compendium(CompendiumCombatantDefinition {
            item: CompendiumCombatant::Monster(monster),
            persistent: false,
        }),
    )
}

pub fn encounter() -> Encounter {
    let goblin = goblin();
    let original = CompendiumItemReference::new("Goblin", goblin.key());
    Encounter::new(EncounterId::new("ambush"), "Goblin Ambush")
        .with_combatant(compendium_combatant("g1", goblin.clone()))
        .with_combatant(compendium_combatant("a1", acolyte()))
        .with_combatant(Combatant::new(
            CombatantId::new("boss"),
            CombatantDefinition::AdHoc(AdHocCombatantDefinition {
                id: "boss".into(),
                stats: goblin.stats,
                level: None,
                original: Some(original),
            }),
        ))
}

/// A store with every kind of top-level entity.
pub fn store() -> Vec<GameEntity> {
    vec![
        entry(CompendiumItem::Monster(goblin())).into(),
        entry(CompendiumItem::Monster(acolyte())).into(),
        entry(CompendiumItem::Spell(fireball())).into(),
        encounter().into(),
        RunningEncounter::start(RunningEncounterId::new("run-1"), encounter()).into(),
        CompendiumImportJob {
            id: ImportJobId::new("job-1"),
            source_id: ImportSourceId {
                kind: "open5e".into(),
                bookmark: "wotc-srd".into(),
            },
            source_version: Some("1".into()),
            document_id: srd().id,
        }
        .into(),
    ]
}
