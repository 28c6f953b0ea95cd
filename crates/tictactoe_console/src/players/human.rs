//! Human player that reads cell numbers from text input.

use super::Player;
use crate::orchestrator::GameEvent;
use anyhow::Result;
use std::sync::Arc;
use tictactoe_engine::{GameEngine, Seat};
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

/// Line input shared by everyone reading from the same terminal.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Wraps a line receiver for sharing.
pub fn shared_input(rx: mpsc::UnboundedReceiver<String>) -> SharedInput {
    Arc::new(Mutex::new(rx))
}

/// Waits for the next line. `None` once input is closed.
pub async fn read_line(input: &SharedInput) -> Option<String> {
    input.lock().await.recv().await
}

/// Human player typing cell numbers 1-9.
pub struct HumanPlayer {
    name: String,
    seat: Seat,
    input: SharedInput,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl HumanPlayer {
    /// Creates a new human player for `seat`.
    pub fn new(
        name: impl Into<String>,
        seat: Seat,
        input: SharedInput,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            seat,
            input,
            events,
        }
    }

    fn reject(&self, reason: impl Into<String>) -> Result<()> {
        self.events.send(GameEvent::Rejected {
            name: self.name.clone(),
            reason: reason.into(),
        })?;
        Ok(())
    }
}

/// Converts on-screen numbering (1-9) to a board index (0-8).
pub(crate) fn parse_cell(line: &str) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n @ 1..=9) => Some(n - 1),
        _ => None,
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn play_turn(&mut self, engine: &mut GameEngine) -> Result<usize> {
        loop {
            let Some(line) = read_line(&self.input).await else {
                anyhow::bail!("Input closed");
            };

            let Some(position) = parse_cell(&line) else {
                let line = line.trim();
                self.reject(format!("'{line}' is not a cell; enter a number from 1 to 9"))?;
                continue;
            };

            match engine.submit_move(self.seat, position) {
                Ok(()) => {
                    debug!(player = %self.name, position, "Human move");
                    return Ok(position);
                }
                Err(e) => self.reject(e.to_string())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
