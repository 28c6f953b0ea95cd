//! Computer-player move selection.
//!
//! Selection is a pure function of the board, the two marks and a
//! [`TieBreaker`]. Look-ahead happens on board copies, so nothing here can
//! leave a stray hypothetical mark behind.

use crate::difficulty::Difficulty;
use crate::rules::has_won;
use crate::tiebreak::TieBreaker;
use crate::types::{Board, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Centre cell index.
pub const CENTER: usize = 4;

/// Corner cell indices.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Which rule produced the machine's move.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    /// Random tier: any empty cell.
    #[display("random")]
    Random,
    /// Completes a line for the machine.
    #[display("win")]
    Win,
    /// Stops the opponent completing a line.
    #[display("block")]
    Block,
    /// Takes the free centre.
    #[display("center")]
    Center,
    /// Takes a free corner.
    #[display("corner")]
    Corner,
    /// Any remaining cell.
    #[display("fallback")]
    Fallback,
}

/// A cell chosen by the machine together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Cell index (0-8).
    pub position: usize,
    /// Rule that picked it.
    pub reason: Reason,
}

impl Choice {
    fn new(position: usize, reason: Reason) -> Self {
        Self { position, reason }
    }
}

/// Chooses the machine's next cell. Returns `None` only for a full board.
#[instrument(skip_all, fields(%difficulty, machine = %machine, opponent = %opponent))]
pub fn choose(
    difficulty: Difficulty,
    board: &Board,
    machine: &Mark,
    opponent: &Mark,
    tie_breaker: &mut dyn TieBreaker,
) -> Option<Choice> {
    let choice = match difficulty {
        Difficulty::Random => tie_breaker
            .pick(&board.empty_cells())
            .map(|pos| Choice::new(pos, Reason::Random)),
        Difficulty::Heuristic => heuristic(board, machine, opponent, tie_breaker),
    };
    debug!(?choice, "Machine choice");
    choice
}

/// First empty cell (ascending) that would complete a line for `mark`.
pub fn completing_cell(board: &Board, mark: &Mark) -> Option<usize> {
    board
        .empty_cells()
        .into_iter()
        .find(|&pos| has_won(&board.with_mark(pos, mark), mark))
}

fn heuristic(
    board: &Board,
    machine: &Mark,
    opponent: &Mark,
    tie_breaker: &mut dyn TieBreaker,
) -> Option<Choice> {
    if let Some(pos) = completing_cell(board, machine) {
        return Some(Choice::new(pos, Reason::Win));
    }
    if let Some(pos) = completing_cell(board, opponent) {
        return Some(Choice::new(pos, Reason::Block));
    }
    if board.is_empty(CENTER) {
        return Some(Choice::new(CENTER, Reason::Center));
    }

    let corners: Vec<usize> = CORNERS
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(pos) = tie_breaker.pick(&corners) {
        return Some(Choice::new(pos, Reason::Corner));
    }

    tie_breaker
        .pick(&board.empty_cells())
        .map(|pos| Choice::new(pos, Reason::Fallback))
}
