//! In-memory record of finished matches for post-game review.

use crate::orchestrator::FinishedMatch;
use tictactoe_engine::Move;
use tracing::{debug, instrument};

/// One finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    id: u64,
    summary: String,
    moves: Vec<Move>,
}

impl MatchRecord {
    /// Match number, starting at 1.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// "<status> in <n> moves".
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Moves in the order played.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Move-by-move listing.
    pub fn details(&self) -> String {
        let mut text = format!("Details of {}\n", self);
        for (n, entry) in self.moves.iter().enumerate() {
            text.push_str(&format!("\nMove {}: {}", n + 1, entry));
        }
        text
    }
}

impl std::fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match {}: {}", self.id, self.summary)
    }
}

/// Every match finished in this process. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MatchArchive {
    records: Vec<MatchRecord>,
    next_id: u64,
}

impl MatchArchive {
    /// Creates an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished match and returns its id.
    #[instrument(skip_all, fields(status = %finished.status))]
    pub fn record(&mut self, finished: &FinishedMatch) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let summary = format!("{} in {} moves", finished.status, finished.history.len());
        debug!(id, "Match archived");
        self.records.push(MatchRecord {
            id,
            summary,
            moves: finished.history.clone(),
        });
        id
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: u64) -> Option<&MatchRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// True before the first match ends.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
