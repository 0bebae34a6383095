//! JSON file score store.
//!
//! Stores the score as `{"score": <n>}`. The file is written to a sibling
//! temp file first and renamed into place.

use breed_quiz_application::ports::score_store::{ScoreStore, ScoreStoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct ScoreRecord {
    score: u32,
}

/// Score store backed by a JSON file
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_DATA_HOME/breed-quiz/score.json` (or the platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("breed-quiz").join("score.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self) -> Result<u32, ScoreStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No score file at {}, starting from 0", self.path.display());
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };

        let record: ScoreRecord = serde_json::from_str(&content)
            .map_err(|e| ScoreStoreError::Corrupt(format!("{}: {}", self.path.display(), e)))?;
        Ok(record.score)
    }

    fn write(&self, score: u32) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(&ScoreRecord { score })
            .map_err(|e| ScoreStoreError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!(score, "Score written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileScoreStore::new(dir.path().join("score.json"));
        assert_eq!(store.read().unwrap(), 0);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("score.json");
        let store = FileScoreStore::new(&path);

        store.write(12).unwrap();
        assert_eq!(store.read().unwrap(), 12);

        // Survives a new store instance (process restart)
        let reopened = FileScoreStore::new(&path);
        assert_eq!(reopened.read().unwrap(), 12);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"score":12}"#);
    }

    #[test]
    fn test_overwrite_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.json");
        let store = FileScoreStore::new(&path);

        store.write(3).unwrap();
        store.write(0).unwrap();

        assert_eq!(store.read().unwrap(), 0);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileScoreStore::new(&path);
        assert!(matches!(store.read(), Err(ScoreStoreError::Corrupt(_))));
    }

    #[test]
    fn test_default_path_mentions_app() {
        if let Some(path) = FileScoreStore::default_path() {
            assert!(path.to_string_lossy().contains("breed-quiz"));
        }
    }
}
