//! Player trait and implementations.

mod human;
mod machine;

pub use human::{read_line, shared_input, HumanPlayer, SharedInput};
pub use machine::MachinePlayer;

use anyhow::Result;
use tictactoe_engine::GameEngine;

/// Trait for anything that can take a seat at the board.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Plays one move on `engine` and returns the cell written (0-8).
    async fn play_turn(&mut self, engine: &mut GameEngine) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
