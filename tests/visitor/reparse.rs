//! Re-parsing whole stores after a parser change.

use bestiary_foundation::CacheState;
use bestiary_grammar::DomainParsers;
use bestiary_models::{CombatantDefinition, CompendiumItem, GameEntity, StatBlock};
use bestiary_visitor::{GameModelsVisitor, ReparseStats, ReparseVisitor, run_pass};

use crate::fixtures::store;

// Leaves per fixture entity: goblin 2, acolyte 3, fireball 1,
// encounter 7, running encounter 14, import job 0.
const LEAVES: usize = 27;
const ACTION_LEAVES: usize = 18;

fn stat_blocks(entity: &GameEntity) -> Vec<&StatBlock> {
    fn from_encounter(encounter: &bestiary_models::Encounter) -> Vec<&StatBlock> {
        encounter.combatants.iter().map(|c| c.definition.stats()).collect()
    }
    match entity {
        GameEntity::CompendiumEntry(entry) => match &entry.item {
            CompendiumItem::Monster(monster) => vec![&monster.stats],
            CompendiumItem::Character(character) => vec![&character.stats],
            CompendiumItem::Spell(_) | CompendiumItem::Group(_) => Vec::new(),
        },
        GameEntity::Encounter(encounter) => from_encounter(encounter),
        GameEntity::RunningEncounter(running) => {
            let mut blocks = from_encounter(&running.base);
            blocks.extend(from_encounter(&running.current));
            blocks
        }
        GameEntity::ImportJob(_) => Vec::new(),
    }
}

fn all_valid(entities: &[GameEntity], parsers: &DomainParsers) -> bool {
    entities.iter().flat_map(stat_blocks).all(|stats| {
        stats.actions.iter().chain(&stats.reactions).all(|a| a.is_valid(&parsers.creature_action))
            && stats.features.iter().all(|f| f.is_valid(&parsers.creature_feature))
            && stats
                .creature_type
                .as_ref()
                .is_none_or(|t| t.is_valid(&parsers.monster_type))
    })
}

#[test]
fn first_pass_parses_every_leaf() {
    let mut entities = store();
    let mut visitor = ReparseVisitor::default();

    let report = run_pass(&mut [&mut visitor], &mut entities);

    assert_eq!(report.visited, entities.len());
    assert_eq!(report.changed, vec![0, 1, 2, 3, 4]);
    assert_eq!(visitor.stats(), ReparseStats { visited: LEAVES, reparsed: LEAVES });
    assert!(all_valid(&entities, &DomainParsers::default()));
}

#[test]
fn up_to_date_store_is_unchanged() {
    let mut entities = store();
    run_pass(&mut [&mut ReparseVisitor::default()], &mut entities);
    let before = entities.clone();

    let mut visitor = ReparseVisitor::default();
    let report = run_pass(&mut [&mut visitor], &mut entities);

    assert!(!report.any_changed());
    assert_eq!(visitor.stats(), ReparseStats { visited: LEAVES, reparsed: 0 });
    assert_eq!(entities, before);
}

#[test]
fn version_bump_reaches_every_stale_leaf() {
    let mut entities = store();
    run_pass(&mut [&mut ReparseVisitor::default()], &mut entities);

    let mut parsers = DomainParsers::default();
    parsers.creature_action = parsers.creature_action.with_version("2");
    assert!(!all_valid(&entities, &parsers));

    let mut visitor = ReparseVisitor::new(parsers);
    let report = run_pass(&mut [&mut visitor], &mut entities);

    // The spell and the import job hold no actions.
    assert_eq!(report.changed, vec![0, 1, 3, 4]);
    assert_eq!(visitor.stats(), ReparseStats { visited: LEAVES, reparsed: ACTION_LEAVES });
    assert!(all_valid(&entities, &parsers));

    let mut again = ReparseVisitor::new(parsers);
    assert!(!run_pass(&mut [&mut again], &mut entities).any_changed());
}

#[test]
fn running_encounter_reparses_base_and_current() {
    let mut entities = store();
    let GameEntity::RunningEncounter(running) = &mut entities[4] else {
        panic!("fixture order changed");
    };

    let mut visitor = ReparseVisitor::default();
    assert!(visitor.visit_running_encounter(running));
    assert_eq!(visitor.stats().reparsed, 14);

    let parsers = DomainParsers::default();
    for encounter in [&running.base, &running.current] {
        let CombatantDefinition::AdHoc(boss) = &encounter.combatants[2].definition else {
            panic!("fixture order changed");
        };
        assert_eq!(boss.stats.actions[0].state(&parsers.creature_action), CacheState::Valid);
    }
}

#[test]
fn empty_store_reports_nothing() {
    let mut visitor = ReparseVisitor::default();
    let report = run_pass(&mut [&mut visitor], &mut []);
    assert_eq!(report.visited, 0);
    assert!(!report.any_changed());
}
