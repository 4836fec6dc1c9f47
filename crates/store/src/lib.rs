//! Best-score persistence.
//!
//! The only thing the game keeps between runs is one number: the best final
//! score. [`HighScoreStore`] abstracts where it lives; [`FileHighScoreStore`]
//! keeps it as a decimal integer in a text file and [`MemoryHighScoreStore`]
//! is used by tests and when persistence is disabled. [`HighScoreTracker`] sits
//! between the game loop and a store and only writes when the best improves.

mod file;

pub use file::{default_path, FileHighScoreStore};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid high score {0:?}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Somewhere a single best score can be read from and written to.
pub trait HighScoreStore {
    /// Stored best score. A store that has never been written reads as 0.
    fn load(&self) -> Result<u32>;

    fn save(&mut self, score: u32) -> Result<()>;
}

/// Parse the stored text form of a score (surrounding whitespace allowed).
pub fn parse_score(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| StoreError::Parse(trimmed.to_string()))
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    value: u32,
    saves: u32,
}

impl MemoryHighScoreStore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u32> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.value = score;
        self.saves += 1;
        Ok(())
    }
}

/// Tracks the best score seen and persists it when it improves.
///
/// Store failures are logged and never surface to the game: the in-memory best
/// keeps counting even when the disk is unavailable.
#[derive(Debug)]
pub struct HighScoreTracker<S: HighScoreStore> {
    store: S,
    best: u32,
}

impl<S: HighScoreStore> HighScoreTracker<S> {
    pub fn new(store: S) -> Self {
        let best = match store.load() {
            Ok(best) => best,
            Err(err) => {
                warn!(error = %err, "could not load high score; starting from 0");
                0
            }
        };
        Self { store, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Offer the current score. Returns true when it beat the previous best.
    pub fn observe(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        match self.store.save(score) {
            Ok(()) => info!(score, "saved new high score"),
            Err(err) => warn!(error = %err, score, "could not save high score"),
        }
        true
    }
}
