//! JSON-file high-score store.
//!
//! The record lives in `<data_dir>/highscore.json`. A missing file is a
//! fresh install and loads as 0; a malformed one is reported so the caller
//! can warn and fall back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use outbreak_core::error::StorageError;
use outbreak_core::storage::HighScoreStore;

/// File name of the high-score record inside the data directory.
pub const HIGH_SCORE_FILE: &str = "highscore.json";

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u64,
}

#[derive(Debug, Clone)]
pub struct JsonFileHighScoreStore {
    path: PathBuf,
}

impl JsonFileHighScoreStore {
    /// Store backed by `highscore.json` inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(HIGH_SCORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileHighScoreStore {
    fn load(&self) -> Result<u64, StorageError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let json = fs::read_to_string(&self.path)?;
        let record: HighScoreRecord = serde_json::from_str(&json)?;
        Ok(record.high_score)
    }

    fn save(&mut self, score: u64) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&HighScoreRecord { high_score: score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
