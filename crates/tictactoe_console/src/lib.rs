//! Terminal front-end for the tic-tac-toe engine.
//!
//! Owns no game state: it builds a [`GameEngine`](tictactoe_engine::GameEngine)
//! per match, feeds it moves, and renders whatever the engine reports.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus CLI overrides
//! - **Players**: humans typing cell numbers, the machine with a cosmetic delay
//! - **Orchestrator**: one match, turn by turn, reported as [`GameEvent`]s
//! - **Session**: matches back to back with an in-memory match archive

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod archive;
mod cli;
mod config;
mod orchestrator;
mod players;

pub use app::{spawn_printer, spawn_stdin_reader, Session};
pub use archive::{MatchArchive, MatchRecord};
pub use cli::{Cli, Command, Mode, PlayArgs};
pub use config::{ConfigError, ConsoleConfig};
pub use orchestrator::{FinishedMatch, GameEvent, Orchestrator};
pub use players::{read_line, shared_input, HumanPlayer, MachinePlayer, Player, SharedInput};
