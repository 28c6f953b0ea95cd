//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, CELL_COUNT};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == CELL_COUNT
}
