//! In-memory session scoring: scare tally and combo streak with a reset
//! window. Persistence (high scores) belongs to the embedding app.

use data_runtime::configs::game::GameConfigFile;

#[derive(Debug, Clone, Copy)]
pub struct GameTuning {
    pub score_per_scare: u32,
    pub combo_reset_s: f32,
    pub win_score_threshold: u32,
}

impl From<&GameConfigFile> for GameTuning {
    fn from(cfg: &GameConfigFile) -> Self {
        Self {
            score_per_scare: cfg.score_per_scare,
            combo_reset_s: cfg.combo_reset_s,
            win_score_threshold: cfg.win_score_threshold,
        }
    }
}

impl Default for GameTuning {
    fn default() -> Self {
        Self::from(&GameConfigFile::default())
    }
}

#[derive(Debug, Clone)]
pub struct ScoreBoard {
    score: u32,
    combo: u32,
    combo_ttl_s: f32,
    tuning: GameTuning,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::with_tuning(GameTuning::default())
    }

    pub fn from_config(cfg: &GameConfigFile) -> Self {
        Self::with_tuning(GameTuning::from(cfg))
    }

    pub fn with_tuning(tuning: GameTuning) -> Self {
        Self {
            score: 0,
            combo: 0,
            combo_ttl_s: 0.0,
            tuning,
        }
    }

    /// Award one scare: bump the score and extend the combo window.
    pub fn on_ghost_scared(&mut self) {
        self.score += self.tuning.score_per_scare;
        self.combo += 1;
        self.combo_ttl_s = self.tuning.combo_reset_s;
    }

    /// Count the combo window down; a lapsed window zeroes the streak.
    pub fn update(&mut self, dt: f32) {
        if self.combo == 0 {
            return;
        }
        self.combo_ttl_s -= dt;
        if self.combo_ttl_s <= 0.0 {
            self.combo = 0;
            self.combo_ttl_s = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.combo = 0;
        self.combo_ttl_s = 0.0;
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }
    #[inline]
    pub fn combo(&self) -> u32 {
        self.combo
    }
    #[inline]
    pub fn has_won(&self) -> bool {
        self.score >= self.tuning.win_score_threshold
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combo_lapses_after_window() {
        let mut s = ScoreBoard::new();
        s.on_ghost_scared();
        s.on_ghost_scared();
        assert_eq!(s.combo(), 2);
        s.update(4.9);
        assert_eq!(s.combo(), 2);
        s.update(0.2);
        assert_eq!(s.combo(), 0);
        assert_eq!(s.score(), 2);
    }

    #[test]
    fn win_at_threshold() {
        let mut s = ScoreBoard::new();
        for _ in 0..8 {
            assert!(!s.has_won());
            s.on_ghost_scared();
        }
        assert!(s.has_won());
        s.reset();
        assert!(!s.has_won());
        assert_eq!(s.score(), 0);
    }
}
