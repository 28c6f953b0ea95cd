//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every committed
//! move. The engine checks them in debug builds; they are also testable on
//! their own against hand-built states.

use crate::types::{Board, Move};

/// Borrowed view of the state the invariants inspect.
#[derive(Debug, Clone, Copy)]
pub struct EngineView<'a> {
    /// Current board.
    pub board: &'a Board,
    /// Moves in the order played.
    pub history: &'a [Move],
    /// Move counter.
    pub moves_played: usize,
}

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Exactly `moves_played` cells hold a mark, and the history has one entry per move.
pub struct OccupiedMatchesCount;

impl Invariant<EngineView<'_>> for OccupiedMatchesCount {
    fn holds(state: &EngineView<'_>) -> bool {
        state.board.occupied_count() == state.moves_played
            && state.history.len() == state.moves_played
    }

    fn description() -> &'static str {
        "Occupied cells and history length must equal the move count"
    }
}

/// Every history entry names a distinct cell that holds the recorded mark.
pub struct HistoryMatchesBoard;

impl Invariant<EngineView<'_>> for HistoryMatchesBoard {
    fn holds(state: &EngineView<'_>) -> bool {
        let mut seen = [false; crate::types::CELL_COUNT];
        state.history.iter().all(|entry| {
            let fresh = seen
                .get_mut(entry.position)
                .map(|slot| !std::mem::replace(slot, true))
                .unwrap_or(false);
            fresh && state.board.mark_at(entry.position) == Some(&entry.mark)
        })
    }

    fn description() -> &'static str {
        "History must agree cell-for-cell with the board"
    }
}

/// Everything the engine verifies after a move.
pub type EngineInvariants = (OccupiedMatchesCount, HistoryMatchesBoard);
