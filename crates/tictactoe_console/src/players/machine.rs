//! Machine player: a cosmetic pause, then the engine's own choice.

use super::Player;
use crate::orchestrator::GameEvent;
use anyhow::{Context, Result};
use std::time::Duration;
use tictactoe_engine::GameEngine;
use tokio::sync::mpsc;
use tracing::debug;

/// Plays seat 2 through [`GameEngine::submit_machine_move`].
pub struct MachinePlayer {
    name: String,
    think: Duration,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl MachinePlayer {
    /// Creates a machine player that waits `think` before each move.
    pub fn new(
        name: impl Into<String>,
        think: Duration,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            think,
            events,
        }
    }
}

#[async_trait::async_trait]
impl Player for MachinePlayer {
    async fn play_turn(&mut self, engine: &mut GameEngine) -> Result<usize> {
        self.events.send(GameEvent::Thinking {
            name: self.name.clone(),
        })?;
        tokio::time::sleep(self.think).await;

        let position = engine
            .submit_machine_move()
            .context("Machine could not move")?;
        debug!(machine = %self.name, position, "Machine chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Difficulty, ScriptedTieBreaker, Seat};

    #[tokio::test]
    async fn test_machine_blocks_after_pause() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut engine = GameEngine::against_machine_with(
            "X",
            Difficulty::Heuristic,
            ScriptedTieBreaker::first(),
        )
        .unwrap();
        engine.submit_move(Seat::One, 0).unwrap();
        let mut machine = MachinePlayer::new("Machine", Duration::ZERO, event_tx);

        assert_eq!(machine.play_turn(&mut engine).await.unwrap(), 4);
        engine.submit_move(Seat::One, 1).unwrap();
        assert_eq!(machine.play_turn(&mut engine).await.unwrap(), 2);
        assert!(matches!(event_rx.try_recv(), Ok(GameEvent::Thinking { .. })));
    }

    #[tokio::test]
    async fn test_machine_in_two_player_game_fails() {
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let mut engine = GameEngine::two_player("X", "O").unwrap();
        engine.submit_move(Seat::One, 0).unwrap();
        let mut machine = MachinePlayer::new("Machine", Duration::ZERO, event_tx);

        let err = machine.play_turn(&mut engine).await.unwrap_err();
        assert!(format!("{:#}", err).contains("no machine"));
    }
}
