//! Port for durable score storage.
//!
//! The engine reads the stored score once at construction and writes on
//! every change. Write failures are logged and ignored by the engine: the
//! in-memory score stays authoritative for the current session.

use std::sync::Mutex;
use thiserror::Error;

/// Errors from a score store
#[derive(Error, Debug)]
pub enum ScoreStoreError {
    #[error("Score storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored score is corrupt: {0}")]
    Corrupt(String),
}

/// Durable integer counter for the player's score.
///
/// Synchronous; implementations must be cheap enough to call from the
/// engine on every score change.
pub trait ScoreStore: Send + Sync {
    /// Read the persisted score (0 if nothing was stored yet)
    fn read(&self) -> Result<u32, ScoreStoreError>;

    /// Persist a new score
    fn write(&self, score: u32) -> Result<(), ScoreStoreError>;
}

/// Process-local store for tests and `--no-persist` sessions.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    value: Mutex<u32>,
    writes: Mutex<Vec<u32>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously "persisted" score
    pub fn with_score(score: u32) -> Self {
        Self {
            value: Mutex::new(score),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Every value written so far, oldest first
    pub fn writes(&self) -> Vec<u32> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn read(&self) -> Result<u32, ScoreStoreError> {
        self.value
            .lock()
            .map(|v| *v)
            .map_err(|e| ScoreStoreError::Corrupt(e.to_string()))
    }

    fn write(&self, score: u32) -> Result<(), ScoreStoreError> {
        let mut value = self
            .value
            .lock()
            .map_err(|e| ScoreStoreError::Corrupt(e.to_string()))?;
        *value = score;
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(score);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_defaults_to_zero() {
        let store = InMemoryScoreStore::new();
        assert_eq!(store.read().unwrap(), 0);
        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_in_memory_records_writes() {
        let store = InMemoryScoreStore::with_score(5);
        assert_eq!(store.read().unwrap(), 5);

        store.write(6).unwrap();
        store.write(0).unwrap();

        assert_eq!(store.read().unwrap(), 0);
        assert_eq!(store.writes(), vec![6, 0]);
    }
}
