//! Tic-tac-toe game-state engine.
//!
//! Owns the board, enforces turn order and move legality, detects wins and
//! draws, and plays seat 2 when a computer opponent is configured.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`], the only mutable state
//! - **Rules**: pure win/draw checks over a [`Board`]
//! - **Strategy**: the machine's RANDOM and HEURISTIC tiers
//! - **Tie-breaking**: injectable randomness via [`TieBreaker`]
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Seat};
//!
//! let mut game = GameEngine::two_player("X", "O")?;
//! for (n, pos) in [0, 4, 1, 5, 2].into_iter().enumerate() {
//!     let seat = if n % 2 == 0 { Seat::One } else { Seat::Two };
//!     game.submit_move(seat, pos)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Seat::One));
//! assert!(game.is_finished());
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod engine;
mod error;
pub mod invariants;
pub mod rules;
pub mod strategy;
mod tiebreak;
mod types;
mod validation;

pub use difficulty::Difficulty;
pub use engine::GameEngine;
pub use error::{ConfigurationIssue, EngineError};
pub use tiebreak::{ScriptedTieBreaker, SeededTieBreaker, TieBreaker};
pub use types::{Board, Mark, Move, Outcome, Seat, Square, CELL_COUNT, MACHINE_MARK};
