//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Mark written by the computer opponent.
///
/// Human marks are compared against it case-insensitively, so neither
/// `"M"` nor `"m"` may be chosen by a person.
pub const MACHINE_MARK: &str = "M";

/// One of the two turn-taking positions in a match.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Seat 1 (always moves first).
    #[display("1")]
    One,
    /// Seat 2 (the machine, when one is playing).
    #[display("2")]
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Returns the seat number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

/// A player-chosen token written into a cell.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mark(String);

impl Mark {
    /// Wraps a token as a mark. No validation happens here.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The mark used by the computer opponent.
    pub fn machine() -> Self {
        Self(MACHINE_MARK.to_string())
    }

    /// Returns the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True when the token matches the machine mark, ignoring case.
    pub fn is_reserved(&self) -> bool {
        self.0.to_lowercase() == MACHINE_MARK.to_lowercase()
    }
}

impl From<&str> for Mark {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Mark {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(&self) -> Option<&Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: std::array::from_fn(|_| Square::Empty),
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<&Square> {
        self.squares.get(pos)
    }

    /// Checks if a square is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns the mark at `pos`, if any.
    pub fn mark_at(&self, pos: usize) -> Option<&Mark> {
        self.get(pos).and_then(Square::mark)
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| matches!(s, Square::Occupied(_)))
            .count()
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// Used for look-ahead: the receiver is left untouched.
    pub fn with_mark(&self, pos: usize, mark: &Mark) -> Self {
        let mut next = self.clone();
        next.place(pos, mark.clone());
        next
    }

    /// Writes a mark. Callers have already checked `pos` is an empty cell.
    pub(crate) fn place(&mut self, pos: usize, mark: Mark) {
        if let Some(square) = self.squares.get_mut(pos) {
            *square = Square::Occupied(mark);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match &self.squares[row * 3 + col] {
                    Square::Empty => f.write_str(" ")?,
                    Square::Occupied(mark) => f.write_str(mark.as_str())?,
                }
                if col < 2 {
                    f.write_str(" | ")?;
                }
            }
            if row < 2 {
                f.write_str("\n-----\n")?;
            }
        }
        Ok(())
    }
}

/// One entry of the move history: a seat placing its mark at a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The seat that moved.
    pub seat: Seat,
    /// The cell written (0-8).
    pub position: usize,
    /// The mark written.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    pub fn new(seat: Seat, position: usize, mark: Mark) -> Self {
        Self {
            seat,
            position,
            mark,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mark '{}' at position {}", self.mark, self.position)
    }
}

/// Result of a game, finished or not.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// A seat completed a winning line.
    #[display("Seat {_0} wins")]
    Won(Seat),
    /// Board filled with no winner.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Won(seat) => Some(*seat),
            _ => None,
        }
    }

    /// True for any terminal outcome.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Pair of marks indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Roster([Mark; 2]);

impl Roster {
    pub(crate) fn new(first: Mark, second: Mark) -> Self {
        Self([first, second])
    }

    pub(crate) fn mark(&self, seat: Seat) -> &Mark {
        &self.0[seat.index()]
    }
}
