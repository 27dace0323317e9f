//! Integration tests for decoding persisted `Parseable` values.
//!
//! Stores written by earlier releases hold bare inputs, results without a
//! parser name, or results for a model that has since changed shape.

use bestiary_foundation::CacheState;
use bestiary_grammar::{
    CREATURE_ACTION_PARSER, CreatureAction, MONSTER_TYPE_PARSER, MonsterType,
    ParseableCreatureAction, ParseableMonsterType,
};
use serde::Serialize;

fn encode<T: Serialize>(value: &T) -> Vec<u8> {
    rmp_serde::to_vec_named(value).unwrap()
}

// =============================================================================
// Legacy Inputs
// =============================================================================

#[test]
fn bare_action_decodes_unparsed() {
    let action = CreatureAction::new("Bite", "Hit: 6 (1d8 + 2) piercing damage.");
    let decoded: ParseableCreatureAction = rmp_serde::from_slice(&encode(&action)).unwrap();

    assert_eq!(decoded.input(), &action);
    assert_eq!(decoded.state(&CREATURE_ACTION_PARSER), CacheState::Unparsed);
}

#[test]
fn bare_string_decodes_unparsed() {
    let decoded: ParseableMonsterType =
        rmp_serde::from_slice(&encode(&"swarm of Tiny beasts")).unwrap();

    assert_eq!(decoded.input(), "swarm of Tiny beasts");
    assert!(decoded.cached_result().is_none());
}

// =============================================================================
// Cached Results
// =============================================================================

#[derive(Serialize)]
struct StoredResult<V> {
    value: Option<V>,
    version: &'static str,
    model_version: &'static str,
}

#[derive(Serialize)]
struct StoredParseable<V> {
    input: &'static str,
    result: StoredResult<V>,
}

#[test]
fn current_result_survives_roundtrip() {
    let mut parseable = ParseableMonsterType::new("Humanoid (any race)".to_string());
    assert!(parseable.parse_if_needed(&MONSTER_TYPE_PARSER));

    let decoded: ParseableMonsterType = rmp_serde::from_slice(&encode(&parseable)).unwrap();
    assert_eq!(decoded, parseable);
    assert!(decoded.is_valid(&MONSTER_TYPE_PARSER));
    assert_eq!(
        decoded.value(&MONSTER_TYPE_PARSER).map(|p| p.monster_type.value),
        Some(MonsterType::Humanoid)
    );
}

#[test]
fn missing_parser_name_is_stale() {
    let mut parsed = ParseableMonsterType::new("beast".to_string());
    parsed.parse_if_needed(&MONSTER_TYPE_PARSER);
    let value = parsed.cached_result().and_then(|r| r.value.clone());

    let stored = StoredParseable {
        input: "beast",
        result: StoredResult {
            value,
            version: "1",
            model_version: "1",
        },
    };
    let mut decoded: ParseableMonsterType = rmp_serde::from_slice(&encode(&stored)).unwrap();

    assert_eq!(decoded.cached_result().map(|r| r.parser_name.as_str()), Some(""));
    assert_eq!(decoded.state(&MONSTER_TYPE_PARSER), CacheState::Stale);
    assert!(decoded.parse_if_needed(&MONSTER_TYPE_PARSER));
    assert!(decoded.is_valid(&MONSTER_TYPE_PARSER));
}

#[test]
fn result_from_older_model_is_dropped() {
    let stored = StoredParseable {
        input: "dragon",
        result: StoredResult {
            value: Some(vec!["dragon", "0..6"]),
            version: "1",
            model_version: "0",
        },
    };
    let decoded: ParseableMonsterType = rmp_serde::from_slice(&encode(&stored)).unwrap();

    assert_eq!(decoded.input(), "dragon");
    assert_eq!(decoded.state(&MONSTER_TYPE_PARSER), CacheState::Unparsed);
}

#[test]
fn cached_miss_survives_roundtrip() {
    let mut parseable =
        ParseableCreatureAction::new(CreatureAction::new("Multiattack", "It attacks twice."));
    parseable.parse_if_needed(&CREATURE_ACTION_PARSER);
    assert!(parseable.cached_result().is_some_and(|r| r.value.is_none()));

    let mut decoded: ParseableCreatureAction = rmp_serde::from_slice(&encode(&parseable)).unwrap();
    assert!(decoded.is_valid(&CREATURE_ACTION_PARSER));
    assert!(!decoded.parse_if_needed(&CREATURE_ACTION_PARSER));
}
