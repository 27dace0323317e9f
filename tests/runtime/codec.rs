//! Saved stores keep their caches.

use std::env;
use std::fs;
use std::path::PathBuf;

use bestiary_foundation::{CacheState, RealmId};
use bestiary_grammar::{CreatureAction, CreatureFeature, DomainParsers};
use bestiary_models::{
    CompendiumEntry, CompendiumItem, DocumentId, DocumentRef, Encounter, EncounterId, GameEntity,
    Monster, Origin, RunningEncounter, RunningEncounterId, Spell, StatBlock,
};
use bestiary_runtime::{from_bytes, load_from_file, reparse_file, save_to_file, to_bytes};
use bestiary_visitor::{ReparseVisitor, run_pass};

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("bestiary_it_{}_{name}", std::process::id()))
}

fn srd() -> DocumentRef {
    DocumentRef {
        id: DocumentId::new("srd"),
        display_name: "SRD".into(),
    }
}

fn mage() -> Monster {
    Monster::new(
        RealmId::core(),
        StatBlock::named("Mage")
            .with_type("humanoid (any race)")
            .with_feature(CreatureFeature::new(
                "Spellcasting",
                "The mage is a 9th-level spellcaster. Its spellcasting ability is Intelligence \
                (spell save DC 14, +6 to hit with spell attacks). The mage has the following \
                wizard spells prepared:\n\nCantrips (at will): fire bolt, light, mage hand, \
                prestidigitation\n1st level (4 slots): detect magic, mage armor, magic missile, \
                shield\n3rd level (3 slots): counterspell, fireball, fly",
            ))
            .with_action(CreatureAction::new(
                "Dagger",
                "Melee or Ranged Weapon Attack: +5 to hit, reach 5 ft. or range 20/60 ft., one \
                target. Hit: 4 (1d4 + 2) piercing damage.",
            )),
    )
}

fn entities() -> Vec<GameEntity> {
    let encounter = Encounter::new(EncounterId::new("tower"), "Wizard's Tower");
    vec![
        CompendiumEntry::new(CompendiumItem::Monster(mage()), Origin::Imported(None), srd()).into(),
        CompendiumEntry::new(
            CompendiumItem::Spell(Spell::new(
                RealmId::core(),
                "Fireball",
                "Each creature in a 20-foot-radius sphere must make a Dexterity saving throw. A \
                target takes 8d6 fire damage on a failed save, or half as much damage on a \
                successful one.",
            )),
            Origin::Imported(None),
            srd(),
        )
        .into(),
        RunningEncounter::start(RunningEncounterId::new("run"), encounter).into(),
    ]
}

fn parsed_entities() -> Vec<GameEntity> {
    let mut entities = entities();
    run_pass(&mut [&mut ReparseVisitor::default()], &mut entities);
    entities
}

#[test]
fn decoded_caches_stay_valid() {
    let original = parsed_entities();
    let decoded: Vec<GameEntity> = from_bytes(&to_bytes(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);

    let GameEntity::CompendiumEntry(entry) = &decoded[0] else {
        panic!("expected an entry");
    };
    let CompendiumItem::Monster(monster) = &entry.item else {
        panic!("expected a monster");
    };
    let parsers = DomainParsers::default();
    assert_eq!(monster.stats.features[0].state(&parsers.creature_feature), CacheState::Valid);
    assert_eq!(monster.stats.actions[0].state(&parsers.creature_action), CacheState::Valid);

    let mut decoded = decoded;
    let mut visitor = ReparseVisitor::default();
    assert!(!run_pass(&mut [&mut visitor], &mut decoded).any_changed());
    assert_eq!(visitor.stats().reparsed, 0);
}

#[test]
fn unparsed_store_survives_a_file_roundtrip() {
    let path = temp_path("unparsed.msgpack");
    let original = entities();
    save_to_file(&original, &path).unwrap();
    let loaded = load_from_file(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(loaded, original);
}

#[test]
fn reparse_file_after_parser_change() {
    let input = temp_path("reparse_bump_in.msgpack");
    let output = temp_path("reparse_bump_out.msgpack");
    save_to_file(&parsed_entities(), &input).unwrap();

    let report = reparse_file(&input, &output, DomainParsers::default()).unwrap();
    assert!(!report.any_changed());

    let mut parsers = DomainParsers::default();
    parsers.spell_description = parsers.spell_description.with_version("2");
    let report = reparse_file(&input, &output, parsers).unwrap();
    assert_eq!(report.changed, vec![1]);

    let loaded = load_from_file(&output).unwrap();
    let GameEntity::CompendiumEntry(entry) = &loaded[1] else {
        panic!("expected an entry");
    };
    let CompendiumItem::Spell(spell) = &entry.item else {
        panic!("expected a spell");
    };
    assert!(spell.description.is_valid(&parsers.spell_description));

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}

#[test]
fn truncated_file_is_a_serialization_error() {
    let path = temp_path("truncated.msgpack");
    let bytes = to_bytes(&parsed_entities()).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
    let err = load_from_file(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert!(matches!(err.kind, bestiary_foundation::ErrorKind::SerializationError(_)));
    assert!(err.context.is_some());
}
