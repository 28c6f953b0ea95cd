//! Tests for the two-player game lifecycle.

use tictactoe_engine::{ConfigurationIssue, EngineError, GameEngine, Mark, Move, Outcome, Seat};

fn play(game: &mut GameEngine, moves: &[(Seat, usize)]) {
    for &(seat, pos) in moves {
        game.submit_move(seat, pos).expect("Legal move");
    }
}

#[test]
fn test_top_row_win() {
    let mut game = GameEngine::two_player("X", "O").unwrap();
    play(
        &mut game,
        &[(Seat::One, 0), (Seat::Two, 4), (Seat::One, 1), (Seat::Two, 5), (Seat::One, 2)],
    );

    assert_eq!(game.outcome(), Outcome::Won(Seat::One));
    assert!(game.is_finished());
    assert_eq!(game.moves_played(), 5);
}

#[test]
fn test_seat_two_wins_with_cells_left() {
    let mut game = GameEngine::two_player("X", "O").unwrap();
    play(
        &mut game,
        &[
            (Seat::One, 0),
            (Seat::Two, 2),
            (Seat::One, 1),
            (Seat::Two, 4),
            (Seat::One, 8),
            (Seat::Two, 6),
        ],
    );

    assert_eq!(game.outcome(), Outcome::Won(Seat::Two));
    assert_eq!(game.empty_cells(), vec![3, 5, 7]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let mut game = GameEngine::two_player("X", "O").unwrap();
    play(
        &mut game,
        &[
            (Seat::One, 0),
            (Seat::Two, 1),
            (Seat::One, 2),
            (Seat::Two, 4),
            (Seat::One, 3),
            (Seat::Two, 5),
            (Seat::One, 7),
            (Seat::Two, 6),
            (Seat::One, 8),
        ],
    );

    assert_eq!(game.outcome(), Outcome::Draw);
    assert!(game.is_finished());
    assert!(game.empty_cells().is_empty());
}

#[test]
fn test_wrong_seat_leaves_board_unchanged() {
    let mut game = GameEngine::two_player("X", "O").unwrap();
    let before = game.board();

    let result = game.submit_move(Seat::Two, 0);

    assert_eq!(result, Err(EngineError::TurnOrder { expected: Seat::One }));
    assert_eq!(game.board(), before);
    assert_eq!(game.moves_played(), 0);
    assert_eq!(game.current_seat(), Seat::One);
}

#[test]
fn test_failed_moves_change_nothing() {
    let mut game = GameEngine::two_player("X", "O").unwrap();
    game.submit_move(Seat::One, 4).unwrap();
    let (board, history) = (game.board(), game.history());

    assert!(game.submit_move(Seat::Two, 4).is_err());
    assert!(game.submit_move(Seat::Two, 100).is_err());
    assert!(game.submit_move(Seat::One, 0).is_err());

    assert_eq!(game.board(), board);
    assert_eq!(game.history(), history);
    assert_eq!(game.current_seat(), Seat::Two);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = GameEngine::two_player("X", "O").unwrap();
    play(
        &mut game,
        &[(Seat::One, 0), (Seat::Two, 3), (Seat::One, 1), (Seat::Two, 4), (Seat::One, 2)],
    );

    assert_eq!(game.submit_move(Seat::Two, 5), Err(EngineError::TerminalState));
    assert_eq!(game.moves_played(), 5);
}

#[test]
fn test_history_keeps_play_order() {
    let mut game = GameEngine::two_player("X", "O").unwrap();
    play(&mut game, &[(Seat::One, 8), (Seat::Two, 0), (Seat::One, 4)]);

    let positions: Vec<usize> = game.history().iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![8, 0, 4]);
    assert_eq!(
        game.history()[1],
        Move::new(Seat::Two, 0, Mark::new("O"))
    );
}

#[test]
fn test_snapshots_are_independent_copies() {
    let mut game = GameEngine::two_player("X", "O").unwrap();
    game.submit_move(Seat::One, 4).unwrap();

    let mut history = game.history();
    history.clear();
    let board = game.board().with_mark(0, &Mark::new("O"));

    assert_eq!(game.history().len(), 1);
    assert_ne!(game.board(), board);
    assert_eq!(game.board().occupied_count(), 1);
    assert_eq!(game.board(), game.board());
    assert_eq!(game.history(), game.history());
}

#[test]
fn test_accessors_follow_turns() {
    let mut game = GameEngine::two_player("X", "O").unwrap();
    assert_eq!(game.current_mark(), &Mark::new("X"));
    game.submit_move(Seat::One, 0).unwrap();
    assert_eq!(game.current_seat(), Seat::Two);
    assert_eq!(game.current_mark(), &Mark::new("O"));
    assert_eq!(game.mark(Seat::One), &Mark::new("X"));
}

#[test]
fn test_multi_character_marks() {
    let mut game = GameEngine::two_player("cat", "dog").unwrap();
    game.submit_move(Seat::One, 4).unwrap();
    assert_eq!(
        game.render(),
        "  |   |  \n-----\n  | cat |  \n-----\n  |   |  "
    );
}

#[test]
fn test_construction_failures() {
    let cases: [(&str, &str, ConfigurationIssue); 5] = [
        ("", "O", ConfigurationIssue::BlankMark(Seat::One)),
        ("X", "   ", ConfigurationIssue::BlankMark(Seat::Two)),
        ("m", "O", ConfigurationIssue::ReservedMark(Seat::One, Mark::new("m"))),
        ("X", "M", ConfigurationIssue::ReservedMark(Seat::Two, Mark::new("M"))),
        ("X", "X", ConfigurationIssue::DuplicateMarks(Mark::new("X"))),
    ];

    for (mark1, mark2, expected) in cases {
        let err = GameEngine::two_player(mark1, mark2).unwrap_err();
        assert_eq!(err, EngineError::Configuration(expected));
    }
}

#[test]
fn test_history_serializes_with_plain_marks() {
    let mut game = GameEngine::two_player("X", "Oh").unwrap();
    play(&mut game, &[(Seat::One, 4), (Seat::Two, 0)]);

    let json = serde_json::to_value(game.history()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "seat": "One", "position": 4, "mark": "X" },
            { "seat": "Two", "position": 0, "mark": "Oh" },
        ])
    );

    let back: Vec<Move> = serde_json::from_value(json).unwrap();
    assert_eq!(back, game.history());
}
