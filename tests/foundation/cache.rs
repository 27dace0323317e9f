//! Integration tests for the cache contract with the real domain parsers.

use bestiary_foundation::{CacheState, Parseable};
use bestiary_grammar::{
    CREATURE_FEATURE_PARSER, CreatureFeature, ParseableSpellDescription, SPELL_DESCRIPTION_PARSER,
};
use proptest::prelude::*;

// =============================================================================
// Staleness
// =============================================================================

#[test]
fn version_bump_triggers_exactly_one_reparse() {
    let mut feature = Parseable::new(CreatureFeature::new(
        "Legendary Resistance (3/Day)",
        "If the dragon fails a saving throw, it can choose to succeed instead.",
    ));
    assert!(feature.parse_if_needed(&CREATURE_FEATURE_PARSER));
    assert!(!feature.parse_if_needed(&CREATURE_FEATURE_PARSER));

    let bumped = CREATURE_FEATURE_PARSER.with_version("3");
    assert_eq!(feature.state(&bumped), CacheState::Stale);
    assert!(feature.value(&bumped).is_none());
    assert!(feature.parse_if_needed(&bumped));
    assert_eq!(feature.cached_result().map(|r| r.version.as_str()), Some("3"));
    assert!(!feature.parse_if_needed(&bumped));

    // The old descriptor now sees the cache as stale in turn.
    assert_eq!(feature.state(&CREATURE_FEATURE_PARSER), CacheState::Stale);
}

#[test]
fn changing_input_drops_the_cache() {
    let mut description =
        ParseableSpellDescription::new("A bolt deals 8d6 lightning damage.".into());
    assert_eq!(description.parsed(&SPELL_DESCRIPTION_PARSER).map(|p| p.dice.len()), Some(1));

    description.set_input("A bolt deals 8d6 lightning damage.".into());
    assert!(description.is_valid(&SPELL_DESCRIPTION_PARSER));

    description.set_input("Deals 2d8 plus 1d6 damage.".into());
    assert_eq!(description.state(&SPELL_DESCRIPTION_PARSER), CacheState::Unparsed);
    assert_eq!(description.parsed(&SPELL_DESCRIPTION_PARSER).map(|p| p.dice.len()), Some(2));
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn reparse_is_idempotent(text in "[ -~]{0,80}") {
        let mut description = ParseableSpellDescription::new(text);
        description.parse_if_needed(&SPELL_DESCRIPTION_PARSER);
        let first = description.clone();

        prop_assert!(!description.parse_if_needed(&SPELL_DESCRIPTION_PARSER));
        prop_assert_eq!(description, first);
    }
}
