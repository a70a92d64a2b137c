//! Off-screen locator tuning loaded from data/config/tracker.toml with
//! sensible defaults and clamping.

use crate::loader::load_toml_opt;
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct TrackerConfigFile {
    pub indicator_size_px: f32,
    pub edge_padding_px: f32,
    pub max_tracked_distance_m: f32,
    /// Below this forward component the perspective divide is abandoned in
    /// favor of the direction-only mapping.
    pub forward_epsilon: f32,

    // Distance-based intensity range.
    pub min_opacity: f32,
    pub max_opacity: f32,
    pub min_glow_px: f32,
    pub max_glow_px: f32,
}

impl Default for TrackerConfigFile {
    fn default() -> Self {
        Self {
            indicator_size_px: 40.0,
            edge_padding_px: 10.0,
            max_tracked_distance_m: 50.0,
            forward_epsilon: 0.05,
            min_opacity: 0.5,
            max_opacity: 1.0,
            min_glow_px: 10.0,
            max_glow_px: 25.0,
        }
    }
}

fn clamp(mut cfg: TrackerConfigFile) -> TrackerConfigFile {
    if cfg.indicator_size_px < 0.0 {
        cfg.indicator_size_px = 0.0;
    }
    if cfg.edge_padding_px < 0.0 {
        cfg.edge_padding_px = 0.0;
    }
    if cfg.max_tracked_distance_m < 1.0 {
        cfg.max_tracked_distance_m = 1.0;
    }
    if cfg.forward_epsilon < 1e-4 {
        cfg.forward_epsilon = 1e-4;
    }
    cfg.min_opacity = cfg.min_opacity.clamp(0.0, 1.0);
    cfg.max_opacity = cfg.max_opacity.clamp(cfg.min_opacity, 1.0);
    cfg.min_glow_px = cfg.min_glow_px.max(0.0);
    if cfg.max_glow_px < cfg.min_glow_px {
        cfg.max_glow_px = cfg.min_glow_px;
    }
    cfg
}

/// Load tracker tuning from the default location, falling back to defaults.
pub fn load_default() -> Result<TrackerConfigFile> {
    let parsed = load_toml_opt::<TrackerConfigFile>("config/tracker.toml")?;
    Ok(clamp(parsed.unwrap_or_default()))
}
