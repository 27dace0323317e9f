//! Integration tests for creature features, spell descriptions, and
//! monster types.

use bestiary_foundation::{CompendiumItemType, TextAnnotation};
use bestiary_grammar::{
    Ability, CREATURE_FEATURE_PARSER, CreatureFeature, LimitedUse, MONSTER_TYPE_PARSER, MonsterType,
    Recharge, SPELL_DESCRIPTION_PARSER,
};

const ACOLYTE: &str = "The acolyte is a 1st-level spellcaster. Its spellcasting ability is Wisdom \
    (spell save DC 12, +4 to hit with spell attacks). The acolyte has following cleric spells \
    prepared:\n\nCantrips (at will): light, sacred flame, thaumaturgy\n1st level (3 slots): \
    bless, cure wounds, sanctuary";

#[test]
fn acolyte_spellcasting() {
    let feature = CreatureFeature::new("Spellcasting", ACOLYTE);
    let parsed = CREATURE_FEATURE_PARSER.parse(&feature).unwrap();
    let sc = parsed.spellcasting.as_ref().unwrap();

    assert_eq!(sc.spellcaster_level, Some(1));
    assert_eq!(sc.ability, Some(Ability::Wisdom));
    assert_eq!(sc.spell_save_dc, Some(12));
    assert_eq!(sc.spell_attack_hit, Some(4));
    assert_eq!(sc.slots_by_level.get(&1), Some(&3));

    let spells: Vec<_> = sc.spell_references().map(|s| s.value.text.as_str()).collect();
    assert_eq!(
        spells,
        vec!["light", "sacred flame", "thaumaturgy", "bless", "cure wounds", "sanctuary"]
    );
    assert!(sc.spell_references().all(|s| s.value.item_type == Some(CompendiumItemType::Spell)));
}

#[test]
fn spell_references_are_description_annotations() {
    let feature = CreatureFeature::new("Spellcasting", ACOLYTE);
    let parsed = CREATURE_FEATURE_PARSER.parse(&feature).unwrap();
    let references: Vec<_> = parsed
        .description_annotations()
        .into_iter()
        .filter(|a| matches!(a.value, TextAnnotation::Reference(_)))
        .filter_map(|a| a.text(ACOLYTE).map(str::to_string))
        .collect();
    assert_eq!(references.len(), 6);
    assert_eq!(references[1], "sacred flame");
}

#[test]
fn rest_recharge_feature() {
    let feature = CreatureFeature::new(
        "Shapechanger (Recharges after a Short or Long Rest)",
        "The creature can polymorph into a beast.",
    );
    let parsed = CREATURE_FEATURE_PARSER.parse(&feature).unwrap();
    assert_eq!(parsed.limited_use.map(|l| l.value), Some(LimitedUse::rest(true, true)));
}

#[test]
fn recharge_faces_are_a_range() {
    let feature = CreatureFeature::new("Stench (Recharge 4–6)", "");
    let parsed = CREATURE_FEATURE_PARSER.parse(&feature).unwrap();
    assert_eq!(
        parsed.limited_use.map(|l| l.value.recharge),
        Some(Some(Recharge::TurnStart([4, 5, 6].into())))
    );
}

#[test]
fn spell_description_dice() {
    let text = "Each creature in a 20-foot radius takes 8d6 fire damage, or 4d6 fire damage on a \
        success.".to_string();
    let parsed = SPELL_DESCRIPTION_PARSER.parse(&text).unwrap();
    assert_eq!(parsed.dice.len(), 2);
    assert_eq!(parsed.dice[0].text(&text), Some("8d6"));
}

#[test]
fn monster_types() {
    for (text, expected) in [
        ("Humanoid (any race)", MonsterType::Humanoid),
        ("swarm of Tiny beasts", MonsterType::Beast),
        ("Aberation", MonsterType::Aberration),
        ("monstrosity (titan)", MonsterType::Monstrosity),
    ] {
        let parsed = MONSTER_TYPE_PARSER.parse(&text.to_string());
        assert_eq!(parsed.map(|p| p.monster_type.value), Some(expected), "{text}");
    }
    assert_eq!(MONSTER_TYPE_PARSER.parse(&"fiendish thing".to_string()), None);
}
