//! Per-ghost behavior tuning loaded from data/config/ghost.toml with
//! sensible defaults and clamping.

use crate::loader::load_toml_opt;
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GhostConfigFile {
    // Hover motion
    pub hover_drift_min_m: f32,
    pub hover_drift_max_m: f32,
    pub drift_rate_min_hz: f32,
    pub drift_rate_max_hz: f32,
    pub bob_amount_m: f32,
    pub bob_speed_hz: f32,

    // Visibility cycle
    pub visible_min_s: f32,
    pub visible_max_s: f32,
    pub invisible_min_s: f32,
    pub invisible_max_s: f32,
    pub cross_fade_s: f32,
    pub reappear_radius_m: f32,

    // Fright reaction
    pub scared_duration_s: f32,
    pub scare_shake_m: f32,
    pub scared_opacity: f32,
    pub max_scares: u8,
    pub fade_out_s: f32,

    // Proximity and distance effects
    pub personal_space_m: f32,
    pub personal_space_fade_m: f32,
    pub max_opacity: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub max_view_distance_m: f32,
}

impl Default for GhostConfigFile {
    fn default() -> Self {
        Self {
            hover_drift_min_m: 0.03,
            hover_drift_max_m: 0.08,
            drift_rate_min_hz: 0.15,
            drift_rate_max_hz: 0.25,
            bob_amount_m: 0.03,
            bob_speed_hz: 0.6,
            visible_min_s: 2.0,
            visible_max_s: 5.0,
            invisible_min_s: 1.5,
            invisible_max_s: 3.0,
            cross_fade_s: 0.5,
            reappear_radius_m: 0.5,
            scared_duration_s: 0.5,
            scare_shake_m: 0.05,
            scared_opacity: 0.35,
            max_scares: 2,
            fade_out_s: 1.5,
            personal_space_m: 1.0,
            personal_space_fade_m: 1.0,
            max_opacity: 0.8,
            min_scale: 0.3,
            max_scale: 1.0,
            max_view_distance_m: 50.0,
        }
    }
}

fn clamp(mut cfg: GhostConfigFile) -> GhostConfigFile {
    let nonneg = |v: &mut f32| {
        if *v < 0.0 {
            *v = 0.0;
        }
    };
    nonneg(&mut cfg.hover_drift_min_m);
    nonneg(&mut cfg.bob_amount_m);
    nonneg(&mut cfg.bob_speed_hz);
    nonneg(&mut cfg.visible_min_s);
    nonneg(&mut cfg.invisible_min_s);
    nonneg(&mut cfg.reappear_radius_m);
    nonneg(&mut cfg.scared_duration_s);
    nonneg(&mut cfg.scare_shake_m);
    nonneg(&mut cfg.fade_out_s);
    nonneg(&mut cfg.personal_space_m);
    if cfg.hover_drift_max_m < cfg.hover_drift_min_m {
        cfg.hover_drift_max_m = cfg.hover_drift_min_m;
    }
    if cfg.drift_rate_min_hz < 0.0 {
        cfg.drift_rate_min_hz = 0.0;
    }
    if cfg.drift_rate_max_hz < cfg.drift_rate_min_hz {
        cfg.drift_rate_max_hz = cfg.drift_rate_min_hz;
    }
    if cfg.visible_max_s < cfg.visible_min_s {
        cfg.visible_max_s = cfg.visible_min_s;
    }
    if cfg.invisible_max_s < cfg.invisible_min_s {
        cfg.invisible_max_s = cfg.invisible_min_s;
    }
    // Cross-fade and proximity band divide elapsed time/distance; keep them
    // strictly positive.
    if cfg.cross_fade_s < 0.01 {
        cfg.cross_fade_s = 0.01;
    }
    if cfg.personal_space_fade_m < 0.01 {
        cfg.personal_space_fade_m = 0.01;
    }
    cfg.scared_opacity = cfg.scared_opacity.clamp(0.0, 1.0);
    cfg.max_opacity = cfg.max_opacity.clamp(0.0, 1.0);
    cfg.min_scale = cfg.min_scale.max(0.0);
    if cfg.max_scale < cfg.min_scale {
        cfg.max_scale = cfg.min_scale;
    }
    if cfg.max_view_distance_m < 1.0 {
        cfg.max_view_distance_m = 1.0;
    }
    cfg
}

/// Load ghost tuning from the default location, falling back to defaults.
pub fn load_default() -> Result<GhostConfigFile> {
    let parsed = load_toml_opt::<GhostConfigFile>("config/ghost.toml")?;
    Ok(clamp(parsed.unwrap_or_default()))
}
