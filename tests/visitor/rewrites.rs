//! Rewrites after compendium documents and items move.

use std::collections::HashSet;

use bestiary_foundation::{
    CompendiumItemKey, CompendiumItemReference, CompendiumItemType, ErrorKind, RealmId,
};
use bestiary_models::{
    CombatantDefinition, CompendiumEntry, CompendiumItem, CompendiumItemGroup,
    CompendiumSourceDocument, DocumentId, DocumentRef, GameEntity, GroupId, Monster, Origin,
    StatBlock,
};
use bestiary_visitor::{
    GameModelsVisitor, PostDocumentMoveVisitor, ReparseVisitor, UpdateEntryDocumentVisitor,
    UpdateImportJobVisitor, UpdateItemReferenceVisitor, run_pass,
};

use crate::fixtures::{acolyte, encounter, entry, fireball, goblin, srd, store};

fn shared() -> RealmId {
    RealmId::new("shared")
}

fn monster_key(name: &str, realm: RealmId) -> CompendiumItemKey {
    CompendiumItemKey::new(CompendiumItemType::Monster, realm, name)
}

fn spell_key(name: &str, realm: RealmId) -> CompendiumItemKey {
    CompendiumItemKey::new(CompendiumItemType::Spell, realm, name)
}

fn homebrew_document() -> CompendiumSourceDocument {
    CompendiumSourceDocument::new(DocumentId::new("brew"), RealmId::homebrew(), "House Rules")
}

fn monster_manual() -> DocumentRef {
    DocumentRef {
        id: DocumentId::new("mm"),
        display_name: "Monster Manual".into(),
    }
}

/// An acolyte entry outside the SRD whose spells are resolved to core spells.
fn resolved_acolyte() -> CompendiumEntry {
    let mut entry = CompendiumEntry::new(
        CompendiumItem::Monster(acolyte()),
        Origin::Imported(None),
        monster_manual(),
    );
    ReparseVisitor::default().visit_compendium_entry(&mut entry);
    let CompendiumItem::Monster(monster) = &mut entry.item else {
        unreachable!()
    };
    let spellcasting = monster.stats.features[0]
        .cached_value_mut()
        .and_then(|parsed| parsed.spellcasting.as_mut())
        .expect("acolyte casts spells");
    for spell in spellcasting.spell_references_mut() {
        let title = spell.value.text.clone();
        spell.value.resolved_to = Some(CompendiumItemReference::new(
            title.clone(),
            spell_key(&title, RealmId::core()),
        ));
    }
    entry
}

fn resolved_spells(entity: &GameEntity) -> Vec<(String, RealmId)> {
    let GameEntity::CompendiumEntry(entry) = entity else {
        panic!("expected an entry");
    };
    let CompendiumItem::Monster(monster) = &entry.item else {
        panic!("expected a monster");
    };
    let Some(parsed) = monster.stats.features[0]
        .cached_result()
        .and_then(|r| r.value.as_ref())
    else {
        panic!("feature was parsed");
    };
    parsed
        .spellcasting
        .iter()
        .flat_map(|s| s.spell_references())
        .filter_map(|spell| spell.value.resolved_to.as_ref())
        .map(|r| (r.item_title.clone(), r.item_key.realm.clone()))
        .collect()
}

/// Everything that can point at SRD content.
fn referencing_store() -> Vec<GameEntity> {
    let goblin_ref = CompendiumItemReference::new("Goblin", goblin().key());
    let acolyte_ref = CompendiumItemReference::new("Acolyte", acolyte().key());
    let brew = homebrew_document();
    let mut entities = store();
    entities.truncate(2);
    entities.push(entry(CompendiumItem::Spell(fireball())).into());
    entities.push(resolved_acolyte().into());
    entities.push(
        CompendiumEntry::new(
            CompendiumItem::Group(CompendiumItemGroup {
                id: GroupId::new("warband"),
                realm: RealmId::homebrew(),
                title: "Warband".into(),
                members: vec![goblin_ref.clone(), acolyte_ref],
            }),
            Origin::Created(None),
            brew.reference(),
        )
        .into(),
    );
    entities.push(
        CompendiumEntry::new(
            CompendiumItem::Monster(Monster::new(
                RealmId::homebrew(),
                StatBlock::named("Goblin Boss"),
            )),
            Origin::Created(Some(goblin_ref)),
            brew.reference(),
        )
        .into(),
    );
    entities.push(encounter().into());
    entities.extend(store().into_iter().filter(|e| matches!(e, GameEntity::ImportJob(_))));
    entities
}

fn moved_srd() -> CompendiumSourceDocument {
    let mut moved = srd();
    moved.id = DocumentId::new("srd-5.2");
    moved.display_name = "SRD 5.2".into();
    moved.realm_id = shared();
    moved
}

#[test]
fn realm_move_needs_moving_keys() {
    let err =
        PostDocumentMoveVisitor::new(moved_srd(), RealmId::core(), srd().id, None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}

#[test]
fn document_move_rewrites_every_reference() {
    let mut entities = referencing_store();
    let moving: HashSet<_> = [
        monster_key("Goblin", RealmId::core()),
        spell_key("Fireball", RealmId::core()),
        spell_key("bless", RealmId::core()),
    ]
    .into_iter()
    .collect();
    let mut visitor =
        PostDocumentMoveVisitor::new(moved_srd(), RealmId::core(), srd().id, Some(moving)).unwrap();

    let report = run_pass(&mut [&mut visitor], &mut entities);
    assert_eq!(report.changed, (0..entities.len()).collect::<Vec<_>>());

    // Entries of the document follow it.
    let GameEntity::CompendiumEntry(goblin_entry) = &entities[0] else {
        panic!("expected an entry");
    };
    assert_eq!(goblin_entry.document, moved_srd().reference());
    assert_eq!(goblin_entry.key(), monster_key("Goblin", shared()));
    let GameEntity::CompendiumEntry(fireball_entry) = &entities[2] else {
        panic!("expected an entry");
    };
    assert_eq!(fireball_entry.key(), spell_key("Fireball", shared()));

    // Resolved spells: only the moving one is re-keyed.
    let spells = resolved_spells(&entities[3]);
    assert_eq!(spells.len(), 6);
    for (title, realm) in spells {
        let expected = if title == "bless" { shared() } else { RealmId::core() };
        assert_eq!(realm, expected, "{title}");
    }

    // Group members and created-from references.
    let GameEntity::CompendiumEntry(group) = &entities[4] else {
        panic!("expected an entry");
    };
    let CompendiumItem::Group(group) = &group.item else {
        panic!("expected a group");
    };
    assert_eq!(group.members[0].item_key, monster_key("Goblin", shared()));
    assert_eq!(group.members[1].item_key, monster_key("Acolyte", RealmId::core()));
    let GameEntity::CompendiumEntry(boss) = &entities[5] else {
        panic!("expected an entry");
    };
    assert!(matches!(&boss.origin, Origin::Created(Some(r)) if r.item_key.realm == shared()));

    // Combatants and ad-hoc originals.
    let GameEntity::Encounter(encounter) = &entities[6] else {
        panic!("expected an encounter");
    };
    assert_eq!(encounter.combatants[0].definition.key(), Some(monster_key("Goblin", shared())));
    assert_eq!(
        encounter.combatants[1].definition.key(),
        Some(monster_key("Acolyte", RealmId::core()))
    );
    let CombatantDefinition::AdHoc(ad_hoc) = &encounter.combatants[2].definition else {
        panic!("expected an ad-hoc combatant");
    };
    assert_eq!(
        ad_hoc.original.as_ref().map(|r| &r.item_key),
        Some(&monster_key("Goblin", shared()))
    );

    let GameEntity::ImportJob(job) = &entities[7] else {
        panic!("expected an import job");
    };
    assert_eq!(job.document_id, DocumentId::new("srd-5.2"));

    assert!(!run_pass(&mut [&mut visitor], &mut entities).any_changed());
}

#[test]
fn rename_within_realm_leaves_keys_alone() {
    let mut entities = referencing_store();
    let before = entities.clone();
    let mut renamed = srd();
    renamed.display_name = "System Reference Document 5.1".into();
    let mut visitor =
        PostDocumentMoveVisitor::new(renamed.clone(), RealmId::core(), srd().id, None).unwrap();

    let report = run_pass(&mut [&mut visitor], &mut entities);

    // Only the SRD entries carry the display name.
    assert_eq!(report.changed, vec![0, 1, 2]);
    let GameEntity::CompendiumEntry(goblin_entry) = &entities[0] else {
        panic!("expected an entry");
    };
    assert_eq!(goblin_entry.document.display_name, renamed.display_name);
    assert_eq!(goblin_entry.key(), monster_key("Goblin", RealmId::core()));
    assert_eq!(entities[3..], before[3..]);
}

#[test]
fn item_rename_and_document_rewrites_in_one_pass() {
    let mut entities = referencing_store();
    let target =
        CompendiumSourceDocument::new(DocumentId::new("srd-5.2"), RealmId::core(), "SRD 5.2");
    let renamed = monster_key("Goblin Warrior", RealmId::core());

    let mut references = UpdateItemReferenceVisitor::new({
        let renamed = renamed.clone();
        move |key| (key == &monster_key("Goblin", RealmId::core())).then(|| renamed.clone())
    });
    let mut entries = UpdateEntryDocumentVisitor::new(Some(srd().id), target.clone());
    let mut jobs = UpdateImportJobVisitor::new(srd().id, target.id.clone());

    let report = run_pass(&mut [&mut references, &mut entries, &mut jobs], &mut entities);

    // The acolyte outside the SRD references no goblin.
    assert_eq!(report.changed, vec![0, 1, 2, 4, 5, 6, 7]);

    let GameEntity::Encounter(encounter) = &entities[6] else {
        panic!("expected an encounter");
    };
    assert_eq!(encounter.combatants[0].definition.key(), Some(renamed.clone()));
    assert_eq!(encounter.combatants[0].name(), "Goblin Warrior");
    let CombatantDefinition::AdHoc(ad_hoc) = &encounter.combatants[2].definition else {
        panic!("expected an ad-hoc combatant");
    };
    assert_eq!(ad_hoc.original.as_ref().map(|r| &r.item_key), Some(&renamed));
    // The ad-hoc copy keeps its own name.
    assert_eq!(ad_hoc.stats.name, "Goblin");

    let GameEntity::CompendiumEntry(goblin_entry) = &entities[0] else {
        panic!("expected an entry");
    };
    assert_eq!(goblin_entry.document, target.reference());

    let GameEntity::ImportJob(job) = &entities[7] else {
        panic!("expected an import job");
    };
    assert_eq!(job.document_id, target.id);

    let mut references = UpdateItemReferenceVisitor::new(move |key| {
        (key == &monster_key("Goblin", RealmId::core())).then(|| renamed.clone())
    });
    let report = run_pass(&mut [&mut references, &mut entries, &mut jobs], &mut entities);
    assert!(!report.any_changed());
}
