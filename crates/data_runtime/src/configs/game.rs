//! Scoring tuning loaded from data/config/game.toml.

use crate::loader::load_toml_opt;
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GameConfigFile {
    pub score_per_scare: u32,
    pub combo_reset_s: f32,
    pub win_score_threshold: u32,
}

impl Default for GameConfigFile {
    fn default() -> Self {
        Self {
            score_per_scare: 1,
            combo_reset_s: 5.0,
            win_score_threshold: 8,
        }
    }
}

fn clamp(mut cfg: GameConfigFile) -> GameConfigFile {
    if cfg.combo_reset_s < 0.0 {
        cfg.combo_reset_s = 0.0;
    }
    cfg
}

/// Load scoring tuning from the default location, falling back to defaults.
pub fn load_default() -> Result<GameConfigFile> {
    let parsed = load_toml_opt::<GameConfigFile>("config/game.toml")?;
    Ok(clamp(parsed.unwrap_or_default()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_clamp() {
        let d = GameConfigFile::default();
        assert_eq!(clamp(d.clone()), d);
    }

    #[test]
    fn negative_combo_window_clamps_to_zero() {
        let cfg = clamp(GameConfigFile {
            combo_reset_s: -1.0,
            ..Default::default()
        });
        assert_eq!(cfg.combo_reset_s, 0.0);
    }
}
