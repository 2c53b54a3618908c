use crate::domain::game::{create_game, is_complete, submit_round};
use crate::domain::players::PlayerRegistry;
use crate::domain::snapshot::{format_points, score_sheet};
use crate::domain::standings::{leaders, ranked_standings};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::round_input;
use crate::errors::domain::ConflictKind;

#[test]
fn happy_path_three_player_game() {
    let mut reg = PlayerRegistry::new(3).unwrap();
    for name in ["Anil", "Bina", "Chet"] {
        reg.add(name).unwrap();
    }
    let mut game = reg.finalize(false, 5).unwrap();

    // Five rounds, each with calls >= 13 and made == 17.
    let rounds: [[(u32, u32); 3]; 5] = [
        [(5, 6), (4, 5), (4, 6)], // 51, 41, 42
        [(6, 6), (4, 2), (3, 9)], // 60, -40, 36
        [(4, 4), (5, 7), (4, 6)], // 40, 52, 42
        [(5, 3), (5, 8), (3, 6)], // -50, 53, 33
        [(4, 5), (5, 6), (4, 6)], // 41, 51, 42
    ];
    for values in &rounds {
        assert!(!is_complete(&game));
        game = submit_round(&game, &round_input(&game, values)).unwrap();
    }
    assert!(is_complete(&game));
    assert_eq!(game.phase(), Phase::Complete);

    let standings = ranked_standings(&game);
    let summary: Vec<(&str, i32, usize)> = standings
        .iter()
        .map(|s| (s.player.name.as_str(), s.total_score, s.rank))
        .collect();
    assert_eq!(
        summary,
        vec![("Chet", 195, 1), ("Bina", 157, 2), ("Anil", 142, 3)]
    );
    assert_eq!(format_points(standings[0].total_score), "19.5");

    let sheet = score_sheet(&game);
    assert_eq!(sheet.rows.len(), 5);
    assert!(sheet.header.complete);
    assert_eq!(sheet.header.current_round, None);
    assert_eq!(sheet.totals, vec![142, 157, 195]);
    assert_eq!(sheet.rows[1].lines[1].score, -40);
}

#[test]
fn tied_leaders_share_first_place() {
    let game = create_game(&["A", "B", "C"], 3, false).unwrap();
    // A and B both make exactly 8; C takes the last trick on a zero call.
    let game = submit_round(&game, &round_input(&game, &[(8, 8), (8, 8), (0, 1)])).unwrap();

    let standings = ranked_standings(&game);
    let ranks: Vec<(String, i32, usize)> = standings
        .iter()
        .map(|s| (s.player.name.clone(), s.total_score, s.rank))
        .collect();
    assert_eq!(
        ranks,
        vec![
            ("A".to_string(), 80, 1),
            ("B".to_string(), 80, 1),
            ("C".to_string(), 1, 3)
        ]
    );
    assert_eq!(leaders(&standings).len(), 2);
}

#[test]
fn standings_before_any_round_are_all_zero_and_tied() {
    let game = create_game(&["A", "B", "C", "D"], 4, true).unwrap();
    let standings = ranked_standings(&game);
    assert!(standings.iter().all(|s| s.total_score == 0 && s.rank == 1));
    let names: Vec<&str> = standings.iter().map(|s| s.player.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

#[test]
fn sixth_submission_rejected() {
    let mut game = create_game(&["A", "B", "C", "D"], 4, false).unwrap();
    let values = [(3, 3), (2, 2), (2, 4), (2, 4)];
    for _ in 0..5 {
        game = submit_round(&game, &round_input(&game, &values)).unwrap();
    }
    let err = submit_round(&game, &round_input(&game, &values)).unwrap_err();
    assert_eq!(err.conflict_kind(), Some(&ConflictKind::GameComplete));
    assert_eq!(game.rounds().len(), 5);
}
