//! Engine error types.

use crate::types::{Mark, Seat};
use derive_more::Display;

/// Reason a game could not be configured.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigurationIssue {
    /// A seat's mark is empty or whitespace.
    #[display("Mark for seat {_0} must not be blank")]
    BlankMark(Seat),

    /// A human chose the machine's mark.
    #[display("Mark '{_1}' for seat {_0} is reserved for the machine")]
    ReservedMark(Seat, Mark),

    /// Both seats chose the same mark.
    #[display("Both seats chose the mark '{_0}'")]
    DuplicateMarks(Mark),

    /// The requested difficulty tier does not exist.
    #[display("Unknown difficulty tier {_0:?}; expected random (1) or heuristic (2)")]
    UnknownDifficulty(String),
}

impl std::error::Error for ConfigurationIssue {}

/// Error returned by engine operations.
///
/// Every failing call leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    /// Construction arguments were rejected.
    #[display("Invalid game configuration: {_0}")]
    Configuration(ConfigurationIssue),

    /// The game is already over.
    #[display("Game is already over")]
    TerminalState,

    /// The move came from (or for) the wrong seat.
    #[display("It is seat {expected}'s turn")]
    TurnOrder {
        /// The seat that should move.
        expected: Seat,
    },

    /// Position outside 0-8.
    #[display("Position {position} is outside the board (0-8)")]
    OutOfRange {
        /// The rejected position.
        position: usize,
    },

    /// The cell already holds a mark.
    #[display("Position {position} is already occupied")]
    Occupied {
        /// The rejected position.
        position: usize,
    },

    /// A machine move was requested in a two-player game.
    #[display("There is no machine player in this game")]
    NotApplicable,

    /// Internal state broke one of the engine's invariants.
    #[display("Invariant violation: {description}")]
    InvariantViolation {
        /// What went wrong.
        description: String,
    },
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Configuration(issue) => Some(issue),
            _ => None,
        }
    }
}

impl From<ConfigurationIssue> for EngineError {
    fn from(issue: ConfigurationIssue) -> Self {
        EngineError::Configuration(issue)
    }
}
