//! Injectable tie-breaking between equally good cells.
//!
//! The engine never creates its own randomness: every random choice the
//! machine makes goes through a [`TieBreaker`] handed in at construction.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Picks one cell from a set of candidates.
pub trait TieBreaker: std::fmt::Debug + Send {
    /// Returns one element of `candidates`, or `None` if it is empty.
    fn pick(&mut self, candidates: &[usize]) -> Option<usize>;
}

/// Uniform choice backed by a ChaCha8 PRNG.
///
/// Same seed, same sequence of picks.
#[derive(Clone, Debug)]
pub struct SeededTieBreaker {
    inner: ChaCha8Rng,
}

impl SeededTieBreaker {
    /// Creates a tie-breaker with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a tie-breaker seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl TieBreaker for SeededTieBreaker {
    fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        let choice = candidates.choose(&mut self.inner).copied();
        trace!(?candidates, ?choice, "Random pick");
        choice
    }
}

/// Replays a fixed script of candidate offsets.
///
/// Each pick takes the next offset (wrapping around the script) and
/// returns `candidates[offset % candidates.len()]`. An empty script always
/// picks the first candidate.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTieBreaker {
    offsets: Vec<usize>,
    cursor: usize,
}

impl ScriptedTieBreaker {
    /// Creates a tie-breaker that replays `offsets`.
    pub fn new(offsets: impl Into<Vec<usize>>) -> Self {
        Self {
            offsets: offsets.into(),
            cursor: 0,
        }
    }

    /// Always picks the lowest candidate.
    pub fn first() -> Self {
        Self::default()
    }

    /// Always picks the highest candidate.
    pub fn last() -> Self {
        Self::new(vec![usize::MAX])
    }
}

impl TieBreaker for ScriptedTieBreaker {
    fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        let offset = if self.offsets.is_empty() {
            0
        } else {
            self.offsets[self.cursor % self.offsets.len()]
        };
        self.cursor += 1;
        let index = if offset == usize::MAX {
            candidates.len() - 1
        } else {
            offset % candidates.len()
        };
        candidates.get(index).copied()
    }
}
