//! ux_tracker: off-screen ghost locator.
//!
//! Projects 3D ghost positions into 2D edge-clamped screen indicators so
//! the user is alerted to entities outside the field of view. Owns only
//! plain indicator data; a renderer UI module draws it. Never mutates ghost
//! or manager state, and is safe to leave unwired when the experience does
//! not need a radar.

use data_runtime::configs::tracker::TrackerConfigFile;
use ghost_core::{GhostId, ViewerPose};
use glam::{Vec2, Vec3};
use std::collections::HashMap;

/// Runtime tracker tuning copied out of `data_runtime` config.
#[derive(Debug, Clone, Copy)]
pub struct TrackerTuning {
    pub indicator_size_px: f32,
    pub edge_padding_px: f32,
    pub max_tracked_distance_m: f32,
    pub forward_epsilon: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,
    pub min_glow_px: f32,
    pub max_glow_px: f32,
}

impl From<&TrackerConfigFile> for TrackerTuning {
    fn from(cfg: &TrackerConfigFile) -> Self {
        Self {
            indicator_size_px: cfg.indicator_size_px,
            edge_padding_px: cfg.edge_padding_px,
            max_tracked_distance_m: cfg.max_tracked_distance_m,
            forward_epsilon: cfg.forward_epsilon,
            min_opacity: cfg.min_opacity,
            max_opacity: cfg.max_opacity,
            min_glow_px: cfg.min_glow_px,
            max_glow_px: cfg.max_glow_px,
        }
    }
}

impl Default for TrackerTuning {
    fn default() -> Self {
        Self::from(&TrackerConfigFile::default())
    }
}

/// One entity's 3D position as handed over by the frame driver.
#[derive(Debug, Clone, Copy)]
pub struct TrackedGhost {
    pub id: GhostId,
    pub pos: Vec3,
}

/// Cheap UI handle an overlay renderer consumes each frame. Dropping it
/// releases everything it owns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    /// Absolute screen position (origin top-left, +y down).
    pub screen: Vec2,
    /// Rounded meter distance for the label, floored at 1.
    pub distance_m: u32,
    pub opacity: f32,
    pub glow_px: f32,
}

/// Maintains exactly one [`Indicator`] per tracked ghost: create-on-enter,
/// destroy-on-exit, update-in-place for survivors.
pub struct TrackerHud {
    indicators: HashMap<GhostId, Indicator>,
    tuning: TrackerTuning,
}

impl TrackerHud {
    pub fn new() -> Self {
        Self::with_tuning(TrackerTuning::default())
    }

    pub fn from_config(cfg: &TrackerConfigFile) -> Self {
        Self::with_tuning(TrackerTuning::from(cfg))
    }

    pub fn with_tuning(tuning: TrackerTuning) -> Self {
        Self {
            indicators: HashMap::new(),
            tuning,
        }
    }

    /// Refresh the indicator set against `tracked`. Runs after ghost
    /// positions are finalized for the frame to avoid one-tick lag.
    pub fn update(
        &mut self,
        tracked: &[TrackedGhost],
        viewer: &ViewerPose,
        viewport_w: f32,
        viewport_h: f32,
    ) {
        // Destroy-on-exit first so stale entries never outlive a frame.
        let before = self.indicators.len();
        self.indicators
            .retain(|id, _| tracked.iter().any(|t| t.id == *id));
        if self.indicators.len() != before {
            log::debug!("dropped {} stale indicators", before - self.indicators.len());
        }

        for t in tracked {
            let distance = t.pos.distance(viewer.pos);
            let screen = self.project(t.pos, viewer, viewport_w, viewport_h);
            let (opacity, glow_px) = self.intensity(distance);
            let ind = Indicator {
                screen,
                distance_m: (distance.round() as u32).max(1),
                opacity,
                glow_px,
            };
            self.indicators.insert(t.id, ind);
        }
    }

    /// Project an entity position onto the viewport, clamped to the padded
    /// safe rectangle.
    ///
    /// Ahead of the viewer this is a perspective divide. At or behind the
    /// view plane the divide would blow up or invert, so the mapping falls
    /// back to direction-only: indicators for "behind you" entities still
    /// point a stable, sensible way instead of jumping discontinuously.
    fn project(&self, pos: Vec3, viewer: &ViewerPose, w: f32, h: f32) -> Vec2 {
        let t = self.tuning;
        let dir = (pos - viewer.pos).normalize_or_zero();
        let forward = dir.dot(viewer.forward());
        let right = dir.dot(viewer.right());
        let up = dir.dot(viewer.up());

        let (mut x, mut y) = if forward > t.forward_epsilon {
            ((right / forward) * w * 0.5, -(up / forward) * h * 0.5)
        } else {
            (right * w, -up * h)
        };

        // Shrink toward center, never enlarge, so indicators slide along the
        // viewport edge as the entity moves off to the side.
        let pad = t.edge_padding_px + t.indicator_size_px * 0.5;
        let max_x = (w * 0.5 - pad).max(0.0);
        let max_y = (h * 0.5 - pad).max(0.0);
        let sx = if x.abs() > max_x { max_x / x.abs() } else { 1.0 };
        let sy = if y.abs() > max_y { max_y / y.abs() } else { 1.0 };
        let s = sx.min(sy);
        x *= s;
        y *= s;

        Vec2::new(w * 0.5 + x, h * 0.5 + y)
    }

    /// Nearer ghosts glow brighter: inverse-distance interpolation between
    /// the configured intensity bounds.
    fn intensity(&self, distance: f32) -> (f32, f32) {
        let t = self.tuning;
        let ratio = (distance.min(t.max_tracked_distance_m)) / t.max_tracked_distance_m;
        let k = 1.0 - ratio;
        (
            t.min_opacity + k * (t.max_opacity - t.min_opacity),
            t.min_glow_px + k * (t.max_glow_px - t.min_glow_px),
        )
    }

    pub fn indicator(&self, id: GhostId) -> Option<&Indicator> {
        self.indicators.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GhostId, &Indicator)> {
        self.indicators.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Drop every indicator (deactivation path).
    pub fn clear(&mut self) {
        self.indicators.clear();
    }
}

impl Default for TrackerHud {
    fn default() -> Self {
        Self::new()
    }
}
