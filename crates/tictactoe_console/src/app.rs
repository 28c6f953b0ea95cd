//! Console session: plays matches back to back and offers the match review.

use crate::archive::MatchArchive;
use crate::cli::Mode;
use crate::config::ConsoleConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::{read_line, HumanPlayer, MachinePlayer, Player, SharedInput};
use anyhow::{Context, Result};
use std::io::BufRead;
use tictactoe_engine::Seat;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

const MENU: &str = "[n]ew game, [h]istory, [q]uit";

/// A run of matches sharing one terminal.
pub struct Session {
    config: ConsoleConfig,
    archive: MatchArchive,
    input: SharedInput,
    events: mpsc::UnboundedSender<GameEvent>,
    matches_played: u64,
}

impl Session {
    /// Creates a session reading lines from `input` and reporting to `events`.
    pub fn new(
        config: ConsoleConfig,
        input: SharedInput,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            config,
            archive: MatchArchive::new(),
            input,
            events,
            matches_played: 0,
        }
    }

    /// Matches finished so far.
    pub fn archive(&self) -> &MatchArchive {
        &self.archive
    }

    /// Plays until the user quits or input closes.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.play_match().await?;

            loop {
                self.notice(MENU)?;
                let Some(line) = read_line(&self.input).await else {
                    return Ok(());
                };
                match line.trim().to_lowercase().as_str() {
                    "n" | "new" => break,
                    "h" | "history" => self.review().await?,
                    "q" | "quit" => {
                        info!(matches = self.matches_played, "Session ended by user");
                        return Ok(());
                    }
                    other => self.notice(format!("Unknown choice '{}'", other))?,
                }
            }
        }
    }

    /// Plays one match and archives it.
    pub async fn play_match(&mut self) -> Result<()> {
        self.matches_played += 1;
        let engine = self
            .config
            .build_engine(self.matches_played)
            .context("Invalid game configuration")?;

        let (seat_one, seat_two) = self.players();
        let finished = Orchestrator::new(engine, seat_one, seat_two, self.events.clone())
            .run()
            .await?;

        let id = self.archive.record(&finished);
        info!(id, "Match recorded");
        Ok(())
    }

    fn players(&self) -> (Box<dyn Player>, Box<dyn Player>) {
        let human = |name: &str, seat| -> Box<dyn Player> {
            Box::new(HumanPlayer::new(
                name,
                seat,
                self.input.clone(),
                self.events.clone(),
            ))
        };

        let seat_two: Box<dyn Player> = match self.config.mode() {
            Mode::TwoPlayer => human("Player 2", Seat::Two),
            Mode::Machine => Box::new(MachinePlayer::new(
                "Machine",
                self.config.think_delay(),
                self.events.clone(),
            )),
        };
        (human("Player 1", Seat::One), seat_two)
    }

    async fn review(&self) -> Result<()> {
        if self.archive.is_empty() {
            return self.notice("No finished matches yet");
        }
        let listing = self
            .archive
            .records()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        self.notice(listing)?;
        self.notice("Match number to review (Enter to go back):")?;

        let Some(line) = read_line(&self.input).await else {
            return Ok(());
        };
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        match line.parse::<u64>().ok().and_then(|id| self.archive.get(id)) {
            Some(record) => self.notice(record.details()),
            None => self.notice(format!("No match numbered '{}'", line)),
        }
    }

    fn notice(&self, text: impl Into<String>) -> Result<()> {
        self.events.send(GameEvent::Notice(text.into()))?;
        Ok(())
    }
}

/// Forwards stdin lines to a channel.
///
/// Runs on a plain thread: a pending read must not hold up runtime shutdown.
pub fn spawn_stdin_reader(tx: mpsc::UnboundedSender<String>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });
}

/// Prints every event to stdout until all senders are dropped.
pub fn spawn_printer(mut rx: mpsc::UnboundedReceiver<GameEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            println!("{}", event);
        }
    })
}
