//! Command-line interface for the console front-end.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_engine::{Difficulty, EngineError};

/// Tic-tac-toe in the terminal, against a friend or the machine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play matches until you quit
    Play(PlayArgs),

    /// Print the effective configuration as TOML
    Config(PlayArgs),
}

/// Overrides for the config file.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Who plays seat 2
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Mark for player 1
    #[arg(long)]
    pub mark1: Option<String>,

    /// Mark for player 2 (two-player mode only)
    #[arg(long)]
    pub mark2: Option<String>,

    /// Machine tier: random (1) or heuristic (2)
    #[arg(short, long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the machine's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Machine "thinking" delay in milliseconds
    #[arg(long)]
    pub think_ms: Option<u64>,
}

/// Who occupies seat 2.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two people share the keyboard.
    TwoPlayer,
    /// Seat 2 is the computer.
    Machine,
}

fn parse_difficulty(input: &str) -> Result<Difficulty, EngineError> {
    Difficulty::parse_tier(input)
}
