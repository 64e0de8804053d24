//! Error types for the fallible resource paths.
//!
//! Gameplay itself never fails. Only loading and persisting external
//! resources can, and callers log these and continue degraded.

use thiserror::Error;

/// High-score persistence failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("high score store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("high score record is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sound buffer loading or playback failure.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound `{name}` could not be read: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("sound `{name}` is not a valid buffer: {reason}")]
    Decode { name: String, reason: String },
    #[error("sound `{0}` is not loaded")]
    Missing(String),
    #[error("audio output rejected `{name}`: {reason}")]
    Playback { name: String, reason: String },
}
