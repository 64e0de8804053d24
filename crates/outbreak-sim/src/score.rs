//! Running score and the persisted high score.

use outbreak_core::storage::HighScoreStore;

/// Running score tracked by the engine.
pub struct ScoreState {
    pub score: u64,
    pub high_score: u64,
    pub kills: u32,
    store: Box<dyn HighScoreStore>,
}

impl std::fmt::Debug for ScoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreState")
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .field("kills", &self.kills)
            .finish_non_exhaustive()
    }
}

impl ScoreState {
    /// Read the stored high score. An unreadable store counts as 0.
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        let high_score = match store.load() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("high score unavailable, starting from 0: {e}");
                0
            }
        };
        Self {
            score: 0,
            high_score,
            kills: 0,
            store,
        }
    }

    /// Credit points and persist a new high score if it was exceeded.
    /// Returns true when the high score moved.
    pub fn add(&mut self, points: u64) -> bool {
        if points == 0 {
            return false;
        }
        let previous = self.score;
        self.score = self.score.saturating_add(points);
        if self.score <= self.high_score {
            return false;
        }
        if previous <= self.high_score {
            log::info!("new high score, previous best {}", self.high_score);
        }
        self.high_score = self.score;
        if let Err(e) = self.store.save(self.high_score) {
            log::warn!("failed to persist high score {}: {e}", self.high_score);
        }
        true
    }
}
