//! Integration tests for creature actions.

use bestiary_foundation::{DiceExpression, TextAnnotation};
use bestiary_grammar::{
    Ability, AttackRange, AttackType, CREATURE_ACTION_PARSER, CreatureAction, CreatureActionModel,
    CreatureCondition, Damage, DamageType, LimitedUse, Outcome, ParsedCreatureAction,
    VersatileWeaponGrip, WeaponAttack,
};

fn parse(name: &str, description: &str) -> ParsedCreatureAction {
    CREATURE_ACTION_PARSER
        .parse(&CreatureAction::new(name, description))
        .unwrap()
}

fn weapon_attack(description: &str) -> WeaponAttack {
    match parse("Attack", description).action {
        Some(CreatureActionModel::WeaponAttack(attack)) => attack,
        other => panic!("expected a weapon attack, got {other:?}"),
    }
}

// =============================================================================
// Weapon Attacks
// =============================================================================

#[test]
fn scimitar_end_to_end() {
    let attack = weapon_attack(
        "Melee Weapon Attack: +4 to hit, reach 5 ft., one target. Hit: 7 (1d6 + 4) slashing \
        damage.",
    );
    assert_eq!(attack.hit_modifier, 4);
    assert_eq!(attack.ranges, vec![AttackRange::Reach(5)]);
    assert_eq!(attack.effects.len(), 1);
    assert_eq!(
        attack.effects[0].damage,
        vec![Damage {
            static_damage: 7,
            expression: Some(DiceExpression::dice(1, 6) + 4),
            damage_type: DamageType::Slashing,
            alternative_types: vec![],
        }]
    );
}

#[test]
fn range_conditioned_damage() {
    let attack = weapon_attack(
        "Melee or Ranged Weapon Attack: +4 to hit, reach 5 ft. or range 20/60 ft., one target. \
        Hit: 9 (2d6 + 2) piercing damage in melee or 5 (1d6 + 2) piercing damage at range.",
    );
    assert_eq!(attack.effects.len(), 2);
    assert_eq!(attack.effects[0].conditions.attack_type, Some(AttackType::Melee));
    assert_eq!(attack.effects[1].conditions.attack_type, Some(AttackType::Ranged));
    assert_eq!(attack.effects[1].damage[0].expression, Some(DiceExpression::dice(1, 6) + 2));
}

#[test]
fn versatile_grip() {
    let attack = weapon_attack(
        "Melee Weapon Attack: +4 to hit, reach 5 ft., one target. Hit: 6 (1d8 + 2) slashing \
        damage, or 7 (1d10 + 2) slashing damage if used with two hands in melee.",
    );
    let grips: Vec<_> = attack
        .effects
        .iter()
        .map(|e| e.conditions.versatile_weapon_grip)
        .collect();
    assert_eq!(
        grips,
        vec![Some(VersatileWeaponGrip::OneHanded), Some(VersatileWeaponGrip::TwoHanded)]
    );
}

#[test]
fn grapple_rider() {
    let attack = weapon_attack(
        "Melee Weapon Attack: +4 to hit, reach 5 ft., one target. Hit: 5 (1d6 + 2) bludgeoning \
        damage, and the target is grappled (escape DC 12).",
    );
    let grapple = attack.effects.iter().find_map(|e| e.condition.as_ref()).unwrap();
    assert_eq!(grapple.condition, CreatureCondition::Grappled);
    assert_eq!(grapple.comment.as_deref(), Some("escape dc 12"));
}

// =============================================================================
// Saving-Throw Actions
// =============================================================================

#[test]
fn breath_weapon() {
    let parsed = parse(
        "Fire Breath (Recharge 5–6)",
        "Dexterity Saving Throw: DC 15, each creature in a 30-foot cone. Failure: 22 (5d8) fire \
        damage. Success: Half damage.",
    );
    assert_eq!(parsed.limited_use.as_ref().map(|l| &l.value), Some(&LimitedUse::recharge([5, 6])));

    let Some(CreatureActionModel::SavingThrow(save)) = &parsed.action else {
        panic!("expected a saving throw action");
    };
    assert_eq!(save.saving_throw.ability, Ability::Dexterity);
    assert_eq!(save.saving_throw.dc, 15);
    let outcomes: Vec<Outcome> = save.outcomes.iter().map(|o| o.outcome).collect();
    assert_eq!(outcomes, vec![Outcome::Failure, Outcome::Success]);
}

// =============================================================================
// Annotations
// =============================================================================

#[test]
fn recharge_name_annotation_is_a_d6() {
    let name = "Fire Breath (Recharge 5-6)";
    let parsed = parse(name, "The dragon exhales fire in a 60-foot cone.");
    let annotations = parsed.name_annotations();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].text(name), Some("Recharge 5-6"));
    assert_eq!(
        annotations[0].value,
        TextAnnotation::DiceExpression(DiceExpression::dice(1, 6))
    );
}

#[test]
fn description_annotations_point_into_the_original() {
    let description = "Hit: 7 (1d6 + 4) slashing damage plus 3 (1D6) fire damage.";
    let parsed = parse("Claw", description);
    let texts: Vec<_> = parsed
        .description_annotations()
        .iter()
        .filter_map(|a| a.text(description))
        .collect();
    assert_eq!(texts, vec!["1d6 + 4", "1D6"]);
}

#[test]
fn nothing_recognized_is_none() {
    let action = CreatureAction::new("Multiattack", "The goblin makes two attacks.");
    assert_eq!(CREATURE_ACTION_PARSER.parse(&action), None);
}
