use crate::domain::game::submit_round;
use crate::domain::scoring::{base_multiplier, round_score, score_round};
use crate::domain::test_state_helpers::{make_game, round_input};
use crate::domain::validation::validate_round;

#[test]
fn scoring_normal_call_outcomes() {
    assert_eq!(round_score(5, 7, false), 52);
    assert_eq!(round_score(5, 5, false), 50);
    assert_eq!(round_score(5, 3, false), -50);
}

#[test]
fn scoring_blind_call_doubles_base() {
    assert_eq!(base_multiplier(true), 20);
    assert_eq!(round_score(5, 7, true), 102);
    assert_eq!(round_score(5, 5, true), 100);
    assert_eq!(round_score(5, 3, true), -100);
}

#[test]
fn scoring_miss_costs_full_call_regardless_of_shortfall() {
    // Missing by one and missing by five cost the same.
    assert_eq!(round_score(6, 5, false), round_score(6, 1, false));
    assert_eq!(round_score(6, 0, false), -60);
}

#[test]
fn scoring_zero_call() {
    // A zero call can never miss; every trick taken is an over-trick.
    assert_eq!(round_score(0, 0, false), 0);
    assert_eq!(round_score(0, 3, false), 3);
    assert_eq!(round_score(0, 3, true), 3);
}

#[test]
fn scoring_saturates_instead_of_overflowing() {
    assert_eq!(round_score(u32::MAX, u32::MAX, true), i32::MAX);
    assert_eq!(round_score(u32::MAX, 0, false), -i32::MAX);
}

#[test]
fn score_round_follows_seat_order() {
    let game = make_game(4, false);
    let input = round_input(&game, &[(4, 6), (3, 3), (2, 0), (1, 4)]);
    let validated = validate_round(game.players(), &input).unwrap();

    let scored = score_round(&validated, false);
    let ids: Vec<_> = scored.iter().map(|(pid, _)| *pid).collect();
    let expected: Vec<_> = game.players().iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);

    let scores: Vec<i32> = scored.iter().map(|(_, r)| r.score).collect();
    assert_eq!(scores, vec![42, 30, -20, 13]);
}

#[test]
fn blind_game_uses_blind_multiplier() {
    let game = make_game(4, true);
    let input = round_input(&game, &[(4, 6), (3, 3), (2, 0), (1, 4)]);
    let next = submit_round(&game, &input).unwrap();

    let round = &next.rounds()[0];
    let scores: Vec<i32> = next
        .players()
        .iter()
        .filter_map(|p| round.score_for(p.id))
        .collect();
    assert_eq!(scores, vec![82, 60, -40, 23]);
}
