//! Spawn scheduling and placement tuning loaded from data/config/spawn.toml
//! with sensible defaults and clamping.

use crate::loader::load_toml_opt;
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct SpawnConfigFile {
    /// Hard cap on live ghosts at any instant.
    pub max_concurrent: usize,
    /// Total ghosts that may ever be created in one session.
    pub spawn_budget: u32,
    pub spawn_interval_s: f32,

    // Radial placement band around the target anchor.
    pub min_spawn_distance_m: f32,
    pub max_spawn_distance_m: f32,
    pub spawn_height_base_m: f32,
    pub spawn_height_variance_m: f32,

    /// Soft no-spawn bubble around the viewer.
    pub min_safe_distance_from_viewer_m: f32,
    pub placement_attempts: u32,

    /// Ghosts farther than this from the anchor are garbage collected.
    pub visibility_radius_m: f32,
}

impl Default for SpawnConfigFile {
    fn default() -> Self {
        Self {
            max_concurrent: 4,
            spawn_budget: 4,
            spawn_interval_s: 2.0,
            min_spawn_distance_m: 0.5,
            max_spawn_distance_m: 2.0,
            spawn_height_base_m: 0.8,
            spawn_height_variance_m: 0.6,
            min_safe_distance_from_viewer_m: 1.5,
            placement_attempts: 10,
            visibility_radius_m: 50.0,
        }
    }
}

fn clamp(mut cfg: SpawnConfigFile) -> SpawnConfigFile {
    if cfg.spawn_interval_s < 0.0 {
        cfg.spawn_interval_s = 0.0;
    }
    if cfg.min_spawn_distance_m < 0.0 {
        cfg.min_spawn_distance_m = 0.0;
    }
    if cfg.max_spawn_distance_m < cfg.min_spawn_distance_m {
        cfg.max_spawn_distance_m = cfg.min_spawn_distance_m;
    }
    if cfg.spawn_height_variance_m < 0.0 {
        cfg.spawn_height_variance_m = 0.0;
    }
    if cfg.min_safe_distance_from_viewer_m < 0.0 {
        cfg.min_safe_distance_from_viewer_m = 0.0;
    }
    if cfg.placement_attempts == 0 {
        cfg.placement_attempts = 1;
    }
    if cfg.visibility_radius_m < cfg.max_spawn_distance_m {
        cfg.visibility_radius_m = cfg.max_spawn_distance_m;
    }
    cfg
}

/// Load spawn tuning from the default location, falling back to defaults.
pub fn load_default() -> Result<SpawnConfigFile> {
    let parsed = load_toml_opt::<SpawnConfigFile>("config/spawn.toml")?;
    Ok(clamp(parsed.unwrap_or_default()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_clamp() {
        let d = SpawnConfigFile::default();
        assert_eq!(clamp(d.clone()), d);
    }

    #[test]
    fn zero_attempts_is_bumped_to_one() {
        let cfg = clamp(SpawnConfigFile {
            placement_attempts: 0,
            ..Default::default()
        });
        assert_eq!(cfg.placement_attempts, 1);
    }

    #[test]
    fn gc_radius_never_inside_spawn_band() {
        let cfg = clamp(SpawnConfigFile {
            max_spawn_distance_m: 30.0,
            visibility_radius_m: 10.0,
            ..Default::default()
        });
        assert_eq!(cfg.visibility_radius_m, 30.0);
    }
}
