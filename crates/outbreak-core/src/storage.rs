//! High-score persistence seam.
//!
//! The store holds a single scalar. A missing record loads as 0.

use std::sync::{Arc, Mutex};

use crate::error::StorageError;

/// Durable key-value slot for the high score.
pub trait HighScoreStore: Send {
    fn load(&self) -> Result<u64, StorageError>;
    fn save(&mut self, score: u64) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same slot, so a value written by one
/// engine is visible to the next one created from a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    slot: Arc<Mutex<Option<u64>>>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(score: u64) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(score))),
        }
    }

    /// Raw slot contents; `None` until something is saved.
    pub fn stored(&self) -> Option<u64> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u64, StorageError> {
        Ok(self.stored().unwrap_or(0))
    }

    fn save(&mut self, score: u64) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(score);
        Ok(())
    }
}
