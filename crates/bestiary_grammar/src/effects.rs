//! On-hit effect grammar and model.
//!
//! Effects are parsed as an ordered alternation. Specific shapes come before
//! general ones, because the plain damage pattern would otherwise consume
//! the first half of a range-conditioned or versatile clause:
//!
//! 1. versatile grip (`..., or <dmg> if used with two hands`)
//! 2. range-conditioned (`<dmg> in melee or <dmg> at range`)
//! 3. named conditional alternative (`..., or <dmg> while enlarged`)
//! 4. replacement (`instead of dealing damage, ... grapple the target`)
//! 5. plain damage list
//! 6. saving-throw-conditioned
//! 7. generic conditional (`if the target is ..., it ...`)
//! 8. generic target effect (`the target is grappled`)
//! 9. leftover text, kept as "other"

use bestiary_combinator::{
    Parser, character, chars_while, either, int, literal, many, nothing, one_of, one_or_more,
    remainder, skip_until, whitespace, word, zip, zip3, zip4, zip5, zip6, zip7,
};
use bestiary_foundation::DiceExpression;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dice::dice_expression;
use crate::mechanics::{Ability, CreatureCondition, DamageType};

// =============================================================================
// Model
// =============================================================================

/// Melee or ranged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttackType {
    /// A melee attack.
    Melee,
    /// A ranged attack.
    Ranged,
}

/// How a versatile weapon is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VersatileWeaponGrip {
    /// Held in one hand.
    OneHanded,
    /// Held in two hands.
    TwoHanded,
}

/// What a successful save does to the effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SaveEffect {
    /// A successful save negates the effect.
    None,
    /// A successful save halves the damage.
    Half,
}

/// A saving throw guarding an effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavingThrow {
    /// Ability the save is made with.
    pub ability: Ability,
    /// Difficulty class.
    pub dc: i32,
    /// What a success does.
    pub save_effect: SaveEffect,
    /// The effect only applies when the save fails by at least this much.
    pub failure_margin: Option<i32>,
}

impl SavingThrow {
    /// A save with no failure margin.
    #[must_use]
    pub fn new(ability: Ability, dc: i32, save_effect: SaveEffect) -> Self {
        Self {
            ability,
            dc,
            save_effect,
            failure_margin: None,
        }
    }
}

/// Conditions under which an effect applies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EffectConditions {
    /// Only on melee or only on ranged attacks.
    pub attack_type: Option<AttackType>,
    /// Only if the target fails this save.
    pub saving_throw: Option<SavingThrow>,
    /// Only with this grip.
    pub versatile_weapon_grip: Option<VersatileWeaponGrip>,
    /// Any other condition, as written.
    pub other: Option<String>,
}

/// One damage roll.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Damage {
    /// The average (static) amount.
    pub static_damage: i32,
    /// The dice to roll instead, if given.
    pub expression: Option<DiceExpression>,
    /// The damage type.
    pub damage_type: DamageType,
    /// Types the attacker may choose instead.
    pub alternative_types: Vec<DamageType>,
}

/// A condition inflicted by an effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionEffect {
    /// The condition.
    pub condition: CreatureCondition,
    /// Qualifying text such as `escape dc 13`.
    pub comment: Option<String>,
}

/// One effect of a hit or a failed save.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttackEffect {
    /// When the effect applies.
    pub conditions: EffectConditions,
    /// Damage dealt.
    pub damage: Vec<Damage>,
    /// Condition inflicted.
    pub condition: Option<ConditionEffect>,
    /// The effect replaces the attack's damage.
    pub replaces_damage: bool,
    /// Text that could not be structured further.
    pub other: Option<String>,
}

impl AttackEffect {
    /// An effect dealing `damage`.
    #[must_use]
    pub fn damage(damage: Vec<Damage>) -> Self {
        Self {
            damage,
            ..Self::default()
        }
    }

    /// An effect inflicting `condition`.
    #[must_use]
    pub fn condition(condition: CreatureCondition, comment: Option<String>) -> Self {
        Self {
            condition: Some(ConditionEffect { condition, comment }),
            ..Self::default()
        }
    }

    /// An unstructured effect.
    #[must_use]
    pub fn other(text: impl Into<String>) -> Self {
        Self {
            other: Some(text.into()),
            ..Self::default()
        }
    }

    /// Replaces the conditions.
    #[must_use]
    pub fn with_conditions(mut self, conditions: EffectConditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Sets the guarding saving throw.
    #[must_use]
    pub fn with_saving_throw(mut self, saving_throw: SavingThrow) -> Self {
        self.conditions.saving_throw = Some(saving_throw);
        self
    }

    /// Returns true if the effect carries nothing but free text.
    #[must_use]
    pub fn is_other_only(&self) -> bool {
        self.damage.is_empty()
            && self.condition.is_none()
            && self.other.is_some()
            && self.conditions == EffectConditions::default()
            && !self.replaces_damage
    }
}

// =============================================================================
// Grammar
// =============================================================================

fn ws() -> Parser<String> {
    whitespace()
}

fn padded(text: &str) -> Parser<String> {
    literal(text).trimming(ws())
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Text up to, not including, the next period.
fn rest_of_sentence() -> Parser<String> {
    chars_while(|c| c != '.')
}

fn sentence_as_other() -> Parser<AttackEffect> {
    rest_of_sentence().flat_map(|text| non_empty(&text)).map(AttackEffect::other)
}

fn parenthetical() -> Parser<String> {
    zip3(ws().optional(), character('('), skip_until(character(')')))
        .map(|(_, _, (inner, _))| inner)
}

fn damage_type() -> Parser<DamageType> {
    word().flat_map(DamageType::from_name)
}

fn creature_condition() -> Parser<CreatureCondition> {
    word().flat_map(CreatureCondition::from_name)
}

/// `dc 12 constitution saving throw`
#[must_use]
pub fn saving_throw() -> Parser<(i32, Ability)> {
    zip6(
        literal("dc "),
        int(),
        ws(),
        word().flat_map(Ability::from_name),
        ws(),
        literal("saving throw"),
    )
    .map(|(_, dc, _, ability, _, _)| (dc, ability))
}

/// `7 (1d6 + 4) slashing damage`, `1 piercing damage`,
/// `9 (2d8) cold or fire damage`
#[must_use]
pub fn damage() -> Parser<Damage> {
    zip7(
        int(),
        zip4(ws(), character('('), dice_expression(), character(')'))
            .map(|(_, _, expr, _)| expr)
            .optional(),
        ws(),
        damage_type(),
        zip4(ws(), literal("or"), ws(), damage_type())
            .map(|(_, _, _, t)| t)
            .optional(),
        ws(),
        literal("damage"),
    )
    .map(|(static_damage, expression, _, damage_type, alternative, _, _)| Damage {
        static_damage,
        expression,
        damage_type,
        alternative_types: alternative.into_iter().collect(),
    })
}

fn damage_list_separator() -> Parser<()> {
    one_or_more(either([literal(","), literal("and"), literal("plus")]).trimming(ws())).ignored()
}

/// One or more damage rolls, with an optional trailing parenthetical kept
/// as a separate effect.
fn damage_effect() -> Parser<Vec<AttackEffect>> {
    zip(
        many(damage(), damage_list_separator(), nothing()),
        parenthetical().map(|inner| format!("({inner})")).optional(),
    )
    .flat_map(|(damages, comment)| {
        if damages.is_empty() {
            return None;
        }
        let mut effects = vec![AttackEffect::damage(damages)];
        effects.extend(comment.map(AttackEffect::other));
        Some(effects)
    })
}

fn versatile_grip_conditioned() -> Parser<Vec<AttackEffect>> {
    zip6(
        damage(),
        padded(",").optional(),
        padded("or"),
        damage(),
        padded("if used with two hands"),
        either([literal("in melee"), literal("to make a melee attack")])
            .trimming(ws())
            .optional(),
    )
    .map(|(one_handed, _, _, two_handed, _, _)| {
        vec![
            AttackEffect::damage(vec![one_handed]).with_conditions(EffectConditions {
                versatile_weapon_grip: Some(VersatileWeaponGrip::OneHanded),
                ..EffectConditions::default()
            }),
            AttackEffect::damage(vec![two_handed]).with_conditions(EffectConditions {
                versatile_weapon_grip: Some(VersatileWeaponGrip::TwoHanded),
                ..EffectConditions::default()
            }),
        ]
    })
}

fn range_conditioned() -> Parser<Vec<AttackEffect>> {
    zip4(damage(), padded("in melee or"), damage(), padded("at range"))
        .map(|(melee, _, ranged, _)| {
            vec![
                AttackEffect::damage(vec![melee]).with_conditions(EffectConditions {
                    attack_type: Some(AttackType::Melee),
                    ..EffectConditions::default()
                }),
                AttackEffect::damage(vec![ranged]).with_conditions(EffectConditions {
                    attack_type: Some(AttackType::Ranged),
                    ..EffectConditions::default()
                }),
            ]
        })
}

fn alternative_damage_condition() -> Parser<String> {
    either([
        literal("with shillelagh or if wielded with two hands"),
        literal("if the swarm has half of its hit points or fewer"),
        literal("while enlarged"),
        literal("in small or medium form"),
        literal("with shillelagh"),
        literal("if wielded with two hands"),
    ])
    .trimming(ws())
}

fn conditional_alternative() -> Parser<Vec<AttackEffect>> {
    zip5(
        damage(),
        padded(",").optional(),
        padded("or"),
        damage(),
        alternative_damage_condition(),
    )
    .map(|(default, _, _, alternative, condition)| {
        vec![
            AttackEffect::damage(vec![default]),
            AttackEffect::damage(vec![alternative]).with_conditions(EffectConditions {
                other: Some(condition),
                ..EffectConditions::default()
            }),
        ]
    })
}

fn replacement() -> Parser<Vec<AttackEffect>> {
    zip4(
        padded("instead of dealing damage"),
        padded(",").optional(),
        skip_until(padded("grapple the target")),
        parenthetical().optional(),
    )
    .map(|(_, _, _, comment)| {
        vec![AttackEffect {
            replaces_damage: true,
            ..AttackEffect::condition(CreatureCondition::Grappled, comment)
        }]
    })
}

fn effect_subject() -> Parser<String> {
    either([
        literal("the target"),
        literal("the creature"),
        literal("a swallowed creature"),
    ])
    .trimming(ws())
}

/// What happens to a subject: damage, a condition, or free text.
fn then_effect() -> Parser<AttackEffect> {
    either([
        zip(padded("takes"), damage()).map(|(_, dmg)| AttackEffect::damage(vec![dmg])),
        zip5(
            padded("has"),
            padded("the").optional(),
            creature_condition().trimming(ws()),
            padded("condition"),
            rest_of_sentence().optional(),
        )
        .map(|(_, _, condition, _, comment)| {
            AttackEffect::condition(condition, comment.as_deref().and_then(non_empty))
        }),
        zip3(
            either([literal("is"), literal("becomes")]).trimming(ws()),
            creature_condition().trimming(ws()),
            either([
                zip3(literal("("), skip_until(literal(")")), rest_of_sentence())
                    .map(|(_, (inner, _), _)| inner),
                rest_of_sentence(),
            ]),
        )
        .map(|(_, condition, comment)| AttackEffect::condition(condition, non_empty(&comment))),
        sentence_as_other(),
    ])
}

fn must_succeed_effect() -> Parser<AttackEffect> {
    zip4(
        padded("must succeed on a"),
        saving_throw(),
        skip_until(padded("or")),
        either([
            zip(padded("take"), damage()).map(|(_, dmg)| AttackEffect::damage(vec![dmg])),
            zip3(
                padded("become"),
                creature_condition(),
                rest_of_sentence(),
            )
            .map(|(_, c, comment)| AttackEffect::condition(c, non_empty(&comment))),
            literal("be knocked prone")
                .map(|_| AttackEffect::condition(CreatureCondition::Prone, None)),
            sentence_as_other(),
        ]),
    )
    .map(|(_, (dc, ability), _, effect)| {
        effect.with_saving_throw(SavingThrow::new(ability, dc, SaveEffect::None))
    })
}

fn failure_margin_rider() -> Parser<(i32, AttackEffect)> {
    zip7(
        literal(".").optional().trimming(ws()),
        padded("if the saving throw fails by"),
        int(),
        padded("or more"),
        literal(",").optional().trimming(ws()),
        effect_subject(),
        then_effect(),
    )
    .map(|(_, _, margin, _, _, _, effect)| (margin, effect))
}

fn must_succeed_effects() -> Parser<Vec<AttackEffect>> {
    zip(must_succeed_effect(), failure_margin_rider().optional()).map(|(primary, rider)| {
        let mut effects = vec![primary];
        let save = effects[0].conditions.saving_throw.clone();
        if let (Some((margin, effect)), Some(save)) = (rider, save) {
            effects.push(effect.with_saving_throw(SavingThrow {
                save_effect: SaveEffect::None,
                failure_margin: Some(margin),
                ..save
            }));
        }
        effects
    })
}

fn saving_throw_conditioned() -> Parser<Vec<AttackEffect>> {
    either([
        zip7(
            padded("the target must make a"),
            saving_throw(),
            literal(",").optional().trimming(ws()),
            literal("taking "),
            damage_effect(),
            padded("on a failed save"),
            zip3(
                literal(",").optional(),
                ws(),
                literal("or half as much damage on a successful one"),
            )
            .optional(),
        )
        .map(|(_, (dc, ability), _, _, effects, _, half)| {
            let save_effect = if half.is_some() {
                SaveEffect::Half
            } else {
                SaveEffect::None
            };
            effects
                .into_iter()
                .map(|e| e.with_saving_throw(SavingThrow::new(ability, dc, save_effect)))
                .collect()
        }),
        zip(effect_subject(), must_succeed_effects()).map(|(subject, effects)| {
            effects
                .into_iter()
                .map(|mut effect| {
                    if subject != "the target" {
                        effect.conditions.other = Some(subject.clone());
                    }
                    effect
                })
                .collect()
        }),
    ])
}

fn other_conditioned() -> Parser<Vec<AttackEffect>> {
    zip3(
        padded("if the target is"),
        skip_until(padded(",")),
        zip(
            either([literal("it"), literal("the target"), literal("the creature")]).trimming(ws()),
            either([
                must_succeed_effects().flat_map(|effects| effects.into_iter().next()),
                then_effect(),
            ]),
        )
        .map(|(_, effect)| effect),
    )
    .map(|(_, (condition, _), mut effect)| {
        effect.conditions.other = Some(format!("the target is {}", condition.trim()));
        vec![effect]
    })
}

fn other_effect() -> Parser<Vec<AttackEffect>> {
    zip(effect_subject(), then_effect()).map(|(subject, mut effect)| {
        if subject != "the target" {
            effect.conditions.other = Some(subject);
        }
        vec![effect]
    })
}

fn fallback_remainder() -> Parser<Vec<AttackEffect>> {
    remainder().flat_map(|raw| {
        let meaningful = raw.trim_matches(|c: char| c.is_whitespace() || ".,;:".contains(c));
        (!meaningful.is_empty()).then(|| vec![AttackEffect::other(meaningful)])
    })
}

fn effect_separator() -> Parser<()> {
    one_or_more(
        either([literal(","), literal("and"), literal("plus"), literal(".")]).trimming(ws()),
    )
    .ignored()
}

/// A list of effects, flattened.
#[must_use]
pub fn effects() -> Parser<Vec<AttackEffect>> {
    many(
        either([
            versatile_grip_conditioned(),
            range_conditioned(),
            conditional_alternative(),
            replacement(),
            damage_effect(),
            saving_throw_conditioned(),
            other_conditioned(),
            other_effect(),
            fallback_remainder(),
        ]),
        effect_separator(),
        nothing(),
    )
    .map(|groups| groups.into_iter().flatten().collect())
}

/// `hit: <effects>`; the `hit:` prefix is optional.
#[must_use]
pub fn hit_effects() -> Parser<Vec<AttackEffect>> {
    zip3(literal("hit:").optional(), ws().optional(), effects()).map(|(_, _, effects)| effects)
}

/// Sign characters accepted in front of a modifier.
pub(crate) const SIGNS: &str = "+-−";

pub(crate) fn signed_modifier() -> Parser<i32> {
    zip(one_of(SIGNS), int()).map(|(sign, n)| if sign == '+' { n } else { -n })
}
