//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark};
use tracing::instrument;

/// The eight index triples that win the game.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line held entirely by `mark`.
///
/// Empty cells never match, so an empty mark cannot win.
#[instrument(skip_all, fields(mark = %mark))]
pub fn winning_line(board: &Board, mark: &Mark) -> Option<[usize; 3]> {
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|&pos| board.mark_at(pos) == Some(mark)))
}

/// True if `mark` holds any winning line.
pub fn has_won(board: &Board, mark: &Mark) -> bool {
    winning_line(board, mark).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Mark {
        Mark::new("X")
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board, &x()), None);
        assert!(!has_won(&board, &Mark::new("")));
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with_mark(0, &x())
            .with_mark(1, &x())
            .with_mark(2, &x());
        assert_eq!(winning_line(&board, &x()), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let o = Mark::new("O");
        let board = Board::new()
            .with_mark(2, &o)
            .with_mark(4, &o)
            .with_mark(6, &o);
        assert_eq!(winning_line(&board, &o), Some([2, 4, 6]));
        assert!(!has_won(&board, &x()));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let board = line
                .iter()
                .fold(Board::new(), |board, &pos| board.with_mark(pos, &x()));
            assert_eq!(winning_line(&board, &x()), Some(line));
        }
    }

    #[test]
    fn test_marks_are_case_sensitive() {
        let board = Board::new()
            .with_mark(0, &x())
            .with_mark(1, &Mark::new("x"))
            .with_mark(2, &x());
        assert!(!has_won(&board, &x()));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new().with_mark(0, &x()).with_mark(1, &x());
        assert!(!has_won(&board, &x()));
    }
}
