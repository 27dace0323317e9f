//! Saving-throw actions with labeled outcomes.
//!
//! ```text
//! dexterity saving throw: dc 15, each creature in a 30-foot cone.
//! failure: 22 (5d8) fire damage. success: half damage.
//! ```

use bestiary_combinator::{
    Cursor, Parser, either, int, literal, remainder, skip_until, whitespace, word, zip, zip4, zip7,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effects::{AttackEffect, SaveEffect, SavingThrow, effects};
use crate::mechanics::Ability;

/// Which roll results an outcome covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum Outcome {
    Failure,
    Success,
    FailureOrSuccess,
    FirstFailure,
    SecondFailure,
}

impl Outcome {
    /// Labels in the order they must be tried.
    const LABELS: [(&'static str, Outcome); 5] = [
        ("failure or success", Outcome::FailureOrSuccess),
        ("first failure", Outcome::FirstFailure),
        ("second failure", Outcome::SecondFailure),
        ("failure", Outcome::Failure),
        ("success", Outcome::Success),
    ];
}

/// The effects of one outcome.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutcomeEffect {
    /// The outcome.
    pub outcome: Outcome,
    /// What happens on that outcome.
    pub effects: Vec<AttackEffect>,
}

/// An action resolved by the target's saving throw rather than an attack roll.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavingThrowAction {
    /// The save every outcome is tied to.
    pub saving_throw: SavingThrow,
    /// Who makes the save.
    pub target: Option<String>,
    /// Effects per outcome, in order of appearance.
    pub outcomes: Vec<OutcomeEffect>,
}

type Header = (Ability, i32, String, String);

fn header() -> Parser<Header> {
    zip7(
        word().flat_map(Ability::from_name),
        whitespace(),
        literal("saving throw:"),
        whitespace().optional(),
        zip4(literal("dc"), whitespace(), int(), literal(",")).map(|(_, _, dc, _)| dc),
        whitespace().optional(),
        zip(
            skip_until(zip(literal("."), whitespace().optional())).map(|(target, _)| target),
            remainder(),
        ),
    )
    .map(|(ability, _, _, _, dc, _, (target, body))| (ability, dc, target, body))
}

fn outcome_label() -> Parser<Outcome> {
    zip4(
        either(
            Outcome::LABELS
                .into_iter()
                .map(|(label, outcome)| literal(label).map(move |_| outcome)),
        ),
        whitespace().optional(),
        literal(":"),
        whitespace().optional(),
    )
    .map(|(outcome, _, _, _)| outcome)
}

/// A label found in the body: its outcome, where it starts, and where its
/// segment starts.
struct Label {
    outcome: Outcome,
    start: usize,
    segment_start: usize,
}

fn find_labels(chars: &[char]) -> Vec<Label> {
    let parser = outcome_label();
    let mut labels = Vec::new();
    let mut position = 0;
    while position < chars.len() {
        let at_boundary = position == 0 || !chars[position - 1].is_alphanumeric();
        if at_boundary {
            if let Some((outcome, rest)) = parser.parse(Cursor::new(chars).advance(position)) {
                labels.push(Label {
                    outcome,
                    start: position,
                    segment_start: rest.position(),
                });
                position = rest.position();
                continue;
            }
        }
        position += 1;
    }
    labels
}

fn trim_filler(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ".,;:".contains(c))
}

/// Folds `this effect ends ...` riders into the comment of the preceding
/// condition.
fn merge_riders(effects: Vec<AttackEffect>) -> Vec<AttackEffect> {
    let mut merged: Vec<AttackEffect> = Vec::with_capacity(effects.len());
    for effect in effects {
        if effect.is_other_only() {
            let rider = effect.other.as_deref().unwrap_or_default();
            if rider.starts_with("this effect ends") {
                if let Some(condition) =
                    merged.last_mut().and_then(|last| last.condition.as_mut())
                {
                    condition.comment = Some(match condition.comment.take() {
                        Some(comment) if !comment.is_empty() => format!("{comment}. {rider}"),
                        _ => rider.to_string(),
                    });
                    continue;
                }
            }
        }
        merged.push(effect);
    }
    merged
}

fn segment_effects(segment: &str, save: &SavingThrow) -> Vec<AttackEffect> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Vec::new();
    }

    let parsed = effects()
        .run_partial(segment)
        .filter(|(parsed, _)| !parsed.is_empty());

    let effects = match parsed {
        Some((mut parsed, rest)) => {
            let trailing = trim_filler(&rest);
            if !trailing.is_empty() {
                parsed.push(AttackEffect::other(trailing));
            }
            merge_riders(parsed)
        }
        None => {
            let fallback = trim_filler(segment);
            if fallback.is_empty() {
                return Vec::new();
            }
            vec![AttackEffect::other(fallback)]
        }
    };

    effects
        .into_iter()
        .map(|effect| effect.with_saving_throw(save.clone()))
        .collect()
}

/// Parses a saving-throw action from case-folded text.
///
/// Labels must be followed by a colon. Returns `None` when no labeled
/// outcome yields any effect.
#[must_use]
pub fn saving_throw_action(text: &str) -> Option<SavingThrowAction> {
    let (ability, dc, target, body) = header().run(text)?;
    let saving_throw = SavingThrow::new(ability, dc, SaveEffect::None);

    let chars: Vec<char> = body.trim().chars().collect();
    let labels = find_labels(&chars);

    let outcomes: Vec<OutcomeEffect> = labels
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let end = labels.get(index + 1).map_or(chars.len(), |next| next.start);
            let segment: String = chars[label.segment_start..end].iter().collect();
            let effects = segment_effects(&segment, &saving_throw);
            (!effects.is_empty()).then_some(OutcomeEffect {
                outcome: label.outcome,
                effects,
            })
        })
        .collect();

    if outcomes.is_empty() {
        log::trace!("saving throw action without outcomes: {text:?}");
        return None;
    }

    let target = target.trim();
    Some(SavingThrowAction {
        saving_throw,
        target: (!target.is_empty()).then(|| target.to_string()),
        outcomes,
    })
}
