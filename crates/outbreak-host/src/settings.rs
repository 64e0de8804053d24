//! Host settings, read from a JSON file.
//!
//! The path comes from the `OUTBREAK_SETTINGS` environment variable. Every
//! field is optional; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use outbreak_core::tuning::Tuning;
use outbreak_sim::SimConfig;

/// Headless session length when none (or an unusable one) is configured.
pub const DEFAULT_SESSION_SECS: f64 = 30.0;

/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "OUTBREAK_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path} could not be read: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Seed for the arena layout and all gameplay randomness.
    pub seed: u64,
    /// Directory holding `highscore.json`.
    pub data_dir: PathBuf,
    /// Directory of `<sound>.wav` files. `None` runs silent.
    pub audio_dir: Option<PathBuf>,
    /// Length of the headless session in seconds.
    pub session_secs: f64,
    pub tuning: Tuning,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            seed: SimConfig::default().seed,
            data_dir: PathBuf::from("."),
            audio_dir: None,
            session_secs: DEFAULT_SESSION_SECS,
            tuning: Tuning::default(),
        }
    }
}

impl HostSettings {
    /// Read settings from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings from the file named by `OUTBREAK_SETTINGS`, falling back to
    /// defaults with a warning if it cannot be used.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(settings) => {
                log::info!("settings loaded from {}", Path::new(&path).display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Session length as a `Duration`. Negative, non-finite or oversized
    /// values fall back to the default.
    pub fn session_duration(&self) -> Duration {
        match Duration::try_from_secs_f64(self.session_secs) {
            Ok(duration) => duration,
            Err(e) => {
                log::warn!(
                    "session_secs {} unusable ({e}), running {DEFAULT_SESSION_SECS}s",
                    self.session_secs
                );
                Duration::from_secs_f64(DEFAULT_SESSION_SECS)
            }
        }
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            tuning: self.tuning.clone(),
        }
    }
}
