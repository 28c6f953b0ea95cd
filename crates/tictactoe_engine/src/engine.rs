//! The game engine: board state, move validation and the machine player.

use crate::difficulty::Difficulty;
use crate::error::EngineError;
use crate::invariants::{EngineInvariants, EngineView, InvariantSet};
use crate::rules::{self, has_won};
use crate::strategy;
use crate::tiebreak::{SeededTieBreaker, TieBreaker};
use crate::types::{Board, Mark, Move, Outcome, Roster, Seat, CELL_COUNT};
use crate::validation::validate_marks;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// An engine is created fully configured and only changes through
/// [`submit_move`](Self::submit_move) and
/// [`submit_machine_move`](Self::submit_machine_move). Start a new game by
/// building a new engine. Failed calls never change state.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    roster: Roster,
    history: Vec<Move>,
    moves_played: usize,
    difficulty: Option<Difficulty>,
    to_move: Seat,
    tie_breaker: Box<dyn TieBreaker>,
}

impl GameEngine {
    /// Creates a game between two people.
    #[instrument(skip_all)]
    pub fn two_player(
        mark1: impl Into<Mark>,
        mark2: impl Into<Mark>,
    ) -> Result<Self, EngineError> {
        let (mark1, mark2) = (mark1.into(), mark2.into());
        validate_marks(&mark1, Some(&mark2))?;
        info!(%mark1, %mark2, "Two-player game created");
        Ok(Self::build(
            Roster::new(mark1, mark2),
            None,
            Box::new(SeededTieBreaker::from_entropy()),
        ))
    }

    /// Creates a game against the machine, which plays seat 2 with
    /// [`MACHINE_MARK`](crate::MACHINE_MARK).
    pub fn against_machine(
        mark1: impl Into<Mark>,
        difficulty: Difficulty,
    ) -> Result<Self, EngineError> {
        Self::against_machine_with(mark1, difficulty, SeededTieBreaker::from_entropy())
    }

    /// Like [`against_machine`](Self::against_machine) with an explicit
    /// source for the machine's random choices.
    #[instrument(skip_all, fields(%difficulty))]
    pub fn against_machine_with(
        mark1: impl Into<Mark>,
        difficulty: Difficulty,
        tie_breaker: impl TieBreaker + 'static,
    ) -> Result<Self, EngineError> {
        let mark1 = mark1.into();
        validate_marks(&mark1, None)?;
        info!(%mark1, %difficulty, "Game against machine created");
        Ok(Self::build(
            Roster::new(mark1, Mark::machine()),
            Some(difficulty),
            Box::new(tie_breaker),
        ))
    }

    fn build(
        roster: Roster,
        difficulty: Option<Difficulty>,
        tie_breaker: Box<dyn TieBreaker>,
    ) -> Self {
        Self {
            board: Board::new(),
            roster,
            history: Vec::new(),
            moves_played: 0,
            difficulty,
            to_move: Seat::One,
            tie_breaker,
        }
    }

    /// Places `seat`'s mark at `position` (0-8).
    ///
    /// Checks run in this order: game over, wrong seat, out of range,
    /// occupied cell.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn submit_move(&mut self, seat: Seat, position: usize) -> Result<(), EngineError> {
        if self.is_finished() {
            warn!("Move rejected: game is over");
            return Err(EngineError::TerminalState);
        }
        if seat != self.to_move {
            warn!("Move rejected: wrong seat");
            return Err(EngineError::TurnOrder {
                expected: self.to_move,
            });
        }
        if position >= CELL_COUNT {
            warn!("Move rejected: out of range");
            return Err(EngineError::OutOfRange { position });
        }
        if !self.board.is_empty(position) {
            warn!("Move rejected: cell occupied");
            return Err(EngineError::Occupied { position });
        }

        self.commit(seat, position)
    }

    /// Lets the machine play seat 2 and returns the cell it chose.
    ///
    /// Checks run in this order: no machine, not seat 2's turn, game over.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn submit_machine_move(&mut self) -> Result<usize, EngineError> {
        let Some(difficulty) = self.difficulty else {
            warn!("Machine move rejected: no machine in this game");
            return Err(EngineError::NotApplicable);
        };
        if self.to_move != Seat::Two {
            warn!("Machine move rejected: not the machine's turn");
            return Err(EngineError::TurnOrder {
                expected: self.to_move,
            });
        }
        if self.is_finished() {
            warn!("Machine move rejected: game is over");
            return Err(EngineError::TerminalState);
        }

        let choice = strategy::choose(
            difficulty,
            &self.board,
            self.roster.mark(Seat::Two),
            self.roster.mark(Seat::One),
            self.tie_breaker.as_mut(),
        )
        .filter(|choice| self.board.is_empty(choice.position))
        .ok_or_else(|| EngineError::InvariantViolation {
            description: "machine found no empty cell on an unfinished board".to_string(),
        })?;

        debug!(position = choice.position, reason = %choice.reason, "Machine move");
        self.commit(Seat::Two, choice.position)?;
        Ok(choice.position)
    }

    fn commit(&mut self, seat: Seat, position: usize) -> Result<(), EngineError> {
        let mark = self.roster.mark(seat).clone();
        self.board.place(position, mark.clone());
        self.history.push(Move::new(seat, position, mark));
        self.moves_played += 1;
        self.to_move = seat.other();
        debug!(%seat, position, moves_played = self.moves_played, "Move committed");

        if cfg!(debug_assertions) {
            self.verify_invariants()?;
        }

        if self.is_finished() {
            info!(outcome = %self.outcome(), moves = self.moves_played, "Game finished");
        }
        Ok(())
    }

    fn verify_invariants(&self) -> Result<(), EngineError> {
        let view = EngineView {
            board: &self.board,
            history: &self.history,
            moves_played: self.moves_played,
        };
        EngineInvariants::check_all(&view).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation { description }
        })
    }

    /// True once a seat holds a winning line or the board is full.
    pub fn is_finished(&self) -> bool {
        self.outcome().is_finished()
    }

    /// Current result. Seat 1's line is checked before seat 2's, then the draw.
    pub fn outcome(&self) -> Outcome {
        if has_won(&self.board, self.roster.mark(Seat::One)) {
            Outcome::Won(Seat::One)
        } else if has_won(&self.board, self.roster.mark(Seat::Two)) {
            Outcome::Won(Seat::Two)
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Copy of the board.
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    /// Empty cell indices, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.board.empty_cells()
    }

    /// Copy of the move history in the order played.
    pub fn history(&self) -> Vec<Move> {
        self.history.clone()
    }

    /// Number of moves made so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Seat expected to move next.
    pub fn current_seat(&self) -> Seat {
        self.to_move
    }

    /// Mark of the seat expected to move next.
    pub fn current_mark(&self) -> &Mark {
        self.roster.mark(self.to_move)
    }

    /// Mark of any seat.
    pub fn mark(&self, seat: Seat) -> &Mark {
        self.roster.mark(seat)
    }

    /// Machine tier, or `None` in a two-player game.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// True when seat 2 is the machine.
    pub fn is_machine_enabled(&self) -> bool {
        self.difficulty.is_some()
    }

    /// The board as text: `" | "` between cells, `"-----"` between rows.
    pub fn render(&self) -> String {
        self.board.to_string()
    }
}
