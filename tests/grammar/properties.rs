//! Property tests for the domain grammars.

use bestiary_grammar::{
    CREATURE_ACTION_PARSER, CREATURE_FEATURE_PARSER, CreatureAction, CreatureFeature, dice_matches,
    limited_use_in_name, parse_dice_expression,
};
use proptest::prelude::*;

fn stat_block_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("Melee Weapon Attack: +5 to hit, reach 5 ft., one target. ".to_string()),
            Just("Hit: 10 (2d6 + 3) slashing damage".to_string()),
            Just(" plus 3 (1d6) fire damage".to_string()),
            Just(", and the target is knocked prone".to_string()),
            Just(". ".to_string()),
            "[a-zA-Z0-9 ,.()+-]{0,12}",
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn action_parser_is_deterministic(description in stat_block_text()) {
        let action = CreatureAction::new("Slam", description);
        prop_assert_eq!(
            CREATURE_ACTION_PARSER.parse(&action),
            CREATURE_ACTION_PARSER.parse(&action)
        );
    }

    #[test]
    fn feature_parser_is_deterministic(description in stat_block_text()) {
        let feature = CreatureFeature::new("Spellcasting", description);
        prop_assert_eq!(
            CREATURE_FEATURE_PARSER.parse(&feature),
            CREATURE_FEATURE_PARSER.parse(&feature)
        );
    }

    #[test]
    fn dice_matches_point_into_the_text(text in stat_block_text()) {
        for found in dice_matches(&text) {
            let slice = found.text(&text);
            prop_assert!(slice.is_some());
            prop_assert!(found.value.dice_count() > 0);
        }
    }

    #[test]
    fn dice_bounds(count in 1i32..20, sides in 1i32..20, bonus in 0i32..20) {
        let expr = parse_dice_expression(&format!("{count}d{sides} + {bonus}")).unwrap();
        prop_assert_eq!(expr.minimum(), count + bonus);
        prop_assert_eq!(expr.maximum(), count * sides + bonus);
        prop_assert_eq!(expr.dice_count(), count);
    }

    #[test]
    fn recharge_faces(low in 1i32..=6, extra in 0i32..=5) {
        let high = (low + extra).min(6);
        let name = format!("Breath (Recharge {low}-{high})");
        let found = limited_use_in_name(&name).unwrap();
        prop_assert_eq!(found.value.amount, 1);
        let expected = format!("Recharge {low}-{high}");
        prop_assert_eq!(found.text(&name), Some(expected.as_str()));
    }
}
