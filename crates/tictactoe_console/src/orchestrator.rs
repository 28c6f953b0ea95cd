//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use tictactoe_engine::{GameEngine, Move, Outcome, Seat};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from the orchestrator (and players) to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Free-form text for the user.
    Notice(String),
    /// A human player is expected to move.
    TurnStarted {
        /// Player name.
        name: String,
        /// Player mark.
        mark: String,
    },
    /// The machine is "thinking".
    Thinking {
        /// Machine name.
        name: String,
    },
    /// A move or input was refused.
    Rejected {
        /// Player name.
        name: String,
        /// Why.
        reason: String,
    },
    /// A move was made.
    MoveMade {
        /// Player name.
        name: String,
        /// Cell written (0-8).
        position: usize,
    },
    /// Rendered board after a change.
    BoardChanged(String),
    /// The match ended.
    GameOver {
        /// Final status line.
        status: String,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Notice(text) => write!(f, "{}", text),
            GameEvent::TurnStarted { name, mark } => {
                write!(f, "{} ({}), your move [1-9]:", name, mark)
            }
            GameEvent::Thinking { name } => write!(f, "{} is thinking...", name),
            GameEvent::Rejected { reason, .. } => write!(f, "  ! {}", reason),
            GameEvent::MoveMade { name, position } => {
                write!(f, "{} played cell {}", name, position + 1)
            }
            GameEvent::BoardChanged(board) => write!(f, "\n{}\n", board),
            GameEvent::GameOver { status } => write!(f, "{}", status),
        }
    }
}

/// What is left of a match once it is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedMatch {
    /// Final result.
    pub outcome: Outcome,
    /// Status line shown to the players.
    pub status: String,
    /// Moves in the order played.
    pub history: Vec<Move>,
}

/// Orchestrates one match between two players.
pub struct Orchestrator {
    engine: GameEngine,
    seat_one: Box<dyn Player>,
    seat_two: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        engine: GameEngine,
        seat_one: Box<dyn Player>,
        seat_two: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            engine,
            seat_one,
            seat_two,
            event_tx,
        }
    }

    /// Runs the game loop until the engine reports the game is over.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> Result<FinishedMatch> {
        info!("Starting game orchestration");
        self.event_tx.send(GameEvent::BoardChanged(self.engine.render()))?;

        while !self.engine.is_finished() {
            let seat = self.engine.current_seat();
            let player = match seat {
                Seat::One => &mut self.seat_one,
                Seat::Two => &mut self.seat_two,
            };
            let name = player.name().to_string();

            // The machine announces itself with `Thinking` instead.
            let machine_turn = seat == Seat::Two && self.engine.is_machine_enabled();
            if !machine_turn {
                self.event_tx.send(GameEvent::TurnStarted {
                    name: name.clone(),
                    mark: self.engine.current_mark().to_string(),
                })?;
            }

            debug!(player = %name, %seat, "Waiting for move");
            let position = player.play_turn(&mut self.engine).await?;

            self.event_tx.send(GameEvent::MoveMade { name, position })?;
            self.event_tx.send(GameEvent::BoardChanged(self.engine.render()))?;
        }

        let outcome = self.engine.outcome();
        let status = self.status_line(outcome);
        info!(%outcome, "Match over");
        self.event_tx.send(GameEvent::GameOver {
            status: status.clone(),
        })?;

        Ok(FinishedMatch {
            outcome,
            status,
            history: self.engine.history(),
        })
    }

    fn status_line(&self, outcome: Outcome) -> String {
        match outcome.winner() {
            Some(seat) => {
                let name = match seat {
                    Seat::One => self.seat_one.name(),
                    Seat::Two => self.seat_two.name(),
                };
                format!("{} ({}) wins!", name, self.engine.mark(seat))
            }
            None => "Draw!".to_string(),
        }
    }
}
