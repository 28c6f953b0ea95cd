//! Property tests for construction and move sequences.

use proptest::collection::vec;
use proptest::prelude::*;
use tictactoe_engine::{
    Difficulty, EngineError, GameEngine, Outcome, ScriptedTieBreaker, Seat, SeededTieBreaker,
};

fn mark_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(" ".to_string()),
        Just("M".to_string()),
        Just("m".to_string()),
        "[A-Za-z]{1,3}",
    ]
}

proptest! {
    #[test]
    fn construction_succeeds_iff_marks_are_valid(a in mark_strategy(), b in mark_strategy()) {
        let valid = |m: &str| !m.trim().is_empty() && !m.eq_ignore_ascii_case("m");
        let expected = valid(&a) && valid(&b) && a != b;
        prop_assert_eq!(GameEngine::two_player(a.as_str(), b.as_str()).is_ok(), expected);
    }

    #[test]
    fn legal_moves_fill_one_cell_and_pass_the_turn(cells in vec(0usize..9, 1..30)) {
        let mut game = GameEngine::two_player("X", "O").unwrap();
        for pos in cells {
            let seat = game.current_seat();
            let occupied = 9 - game.empty_cells().len();
            match game.submit_move(seat, pos) {
                Ok(()) => {
                    prop_assert_eq!(9 - game.empty_cells().len(), occupied + 1);
                    prop_assert_eq!(game.current_seat(), seat.other());
                }
                Err(EngineError::Occupied { .. }) | Err(EngineError::TerminalState) => {
                    prop_assert_eq!(9 - game.empty_cells().len(), occupied);
                    prop_assert_eq!(game.current_seat(), seat);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
            prop_assert_eq!(game.is_finished(), game.outcome() != Outcome::InProgress);
            prop_assert_eq!(game.moves_played(), game.history().len());
        }
    }

    #[test]
    fn heuristic_machine_never_misses_a_block(
        seed in any::<u64>(),
        first in 0usize..9,
        second in 0usize..9,
    ) {
        let mut game = GameEngine::against_machine_with(
            "X",
            Difficulty::Heuristic,
            SeededTieBreaker::new(seed),
        )
        .unwrap();
        game.submit_move(Seat::One, first).unwrap();
        game.submit_machine_move().unwrap();
        if game.submit_move(Seat::One, second).is_ok() {
            let board = game.board();
            let machine = game.mark(Seat::Two).clone();
            let human = game.mark(Seat::One).clone();
            let win = tictactoe_engine::strategy::completing_cell(&board, &machine);
            let threat = tictactoe_engine::strategy::completing_cell(&board, &human);
            let pos = game.submit_machine_move().unwrap();
            match (win, threat) {
                (Some(w), _) => prop_assert_eq!(pos, w),
                (None, Some(t)) => prop_assert_eq!(pos, t),
                (None, None) => {}
            }
        }
    }
}

#[test]
fn random_tier_covers_every_empty_cell() {
    let mut seen = [false; 9];
    for offset in 0..8 {
        let mut game = GameEngine::against_machine_with(
            "X",
            Difficulty::Random,
            ScriptedTieBreaker::new(vec![offset]),
        )
        .unwrap();
        game.submit_move(Seat::One, 4).unwrap();
        seen[game.submit_machine_move().unwrap()] = true;
    }
    let expected: Vec<bool> = (0..9).map(|pos| pos != 4).collect();
    assert_eq!(seen.to_vec(), expected);
}
