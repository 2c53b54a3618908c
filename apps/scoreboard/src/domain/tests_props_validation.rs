//! Property tests for round validation and submission (pure domain).
//!
//! Ruleset contract:
//! - Calls must total at least 9 (four players) or 13 (three players)
//! - Made must total exactly 13 (four players) or 17 (three players)
//! - A rejected submission leaves the game untouched
//! - An accepted submission appends exactly one complete round

use proptest::prelude::*;

use crate::domain::game::submit_round;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_game, round_input};
use crate::domain::validation::{RoundEntry, RoundInput};
use crate::domain::{test_gens, test_prelude};
use crate::errors::domain::ValidationKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: valid rounds are accepted and advance the game by one.
    #[test]
    fn prop_valid_round_accepted(
        (table, values) in test_gens::table()
            .prop_flat_map(|t| (Just(t), test_gens::valid_round(t))),
        blind in any::<bool>(),
    ) {
        let game = make_game(table.player_count(), blind);
        let next = submit_round(&game, &round_input(&game, &values));
        prop_assert!(next.is_ok(), "valid round rejected: {values:?}");
        let next = next.unwrap();

        prop_assert_eq!(next.rounds().len(), game.rounds().len() + 1);
        prop_assert_eq!(next.rounds()[0].len(), table.player_count());
        prop_assert_eq!(next.phase(), Phase::InRound(2));
    }

    /// Property: a low call total is rejected and nothing changes.
    #[test]
    fn prop_short_call_rejected(
        (table, values) in test_gens::table()
            .prop_flat_map(|t| (Just(t), test_gens::short_call_round(t))),
    ) {
        let game = make_game(table.player_count(), false);
        let before = game.clone();
        let err = submit_round(&game, &round_input(&game, &values)).unwrap_err();

        prop_assert_eq!(
            err.validation_kind(),
            Some(&ValidationKind::InsufficientTotalCall { required: table.min_total_call() })
        );
        prop_assert_eq!(game, before);
    }

    /// Property: a made total that does not match the deck is rejected.
    #[test]
    fn prop_made_mismatch_rejected(
        (table, values) in test_gens::table()
            .prop_flat_map(|t| (Just(t), test_gens::mismatched_made_round(t))),
    ) {
        let game = make_game(table.player_count(), false);
        let before = game.clone();
        let err = submit_round(&game, &round_input(&game, &values)).unwrap_err();

        prop_assert_eq!(
            err.validation_kind(),
            Some(&ValidationKind::MadeTotalMismatch { expected: table.tricks_per_round() })
        );
        prop_assert_eq!(game, before);
    }

    /// Property: any missing player entry is rejected as missing input.
    #[test]
    fn prop_incomplete_round_rejected(
        (table, values, drop) in test_gens::table().prop_flat_map(|t| {
            (Just(t), test_gens::valid_round(t), 0..t.player_count())
        }),
    ) {
        let game = make_game(table.player_count(), false);
        let skipped = game.players()[drop].id;
        let input: RoundInput = game
            .players()
            .iter()
            .zip(&values)
            .filter(|(p, _)| p.id != skipped)
            .map(|(p, &(call, made))| (p.id, RoundEntry::new(call, made)))
            .collect();
        let err = submit_round(&game, &input).unwrap_err();
        prop_assert_eq!(err.validation_kind(), Some(&ValidationKind::MissingInput));
    }
}
