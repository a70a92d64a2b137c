//! Single haunt entity: lifecycle state machine, visibility cycling, and
//! composed render opacity.
//!
//! The lifecycle (hover / fright / terminal fade) and the visibility cycle
//! (visible / invisible with cross-fades) are independent axes; both feed
//! the final opacity multiplicatively. All timers are explicit countdown
//! fields advanced once per [`Ghost::update`], never callbacks, so the whole
//! entity is deterministic under a seeded RNG.

use crate::viewer::ViewerPose;
use data_runtime::configs::ghost::GhostConfigFile;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Stable identifier assigned at spawn; used by the off-screen locator to
/// correlate indicators across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GhostId(pub u32);

/// Mutually exclusive behavior mode. `Fading` is only reachable once the
/// scare quota is spent; `Removed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lifecycle {
    Hovering,
    Scared { remaining_s: f32 },
    Fading { remaining_s: f32 },
    Removed,
}

/// Which half of the visibility cycle the ghost is in. The continuous
/// cross-fade opacity lives alongside this on the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPhase {
    Visible,
    Invisible,
}

/// Runtime tuning copied out of `data_runtime` config at construction.
/// Plain `Copy` data so every ghost carries its own and tests can override
/// individual fields with struct update syntax.
#[derive(Debug, Clone, Copy)]
pub struct GhostTuning {
    pub hover_drift_min_m: f32,
    pub hover_drift_max_m: f32,
    pub drift_rate_min_hz: f32,
    pub drift_rate_max_hz: f32,
    pub bob_amount_m: f32,
    pub bob_speed_hz: f32,
    pub visible_min_s: f32,
    pub visible_max_s: f32,
    pub invisible_min_s: f32,
    pub invisible_max_s: f32,
    pub cross_fade_s: f32,
    pub reappear_radius_m: f32,
    pub scared_duration_s: f32,
    pub scare_shake_m: f32,
    pub scared_opacity: f32,
    pub max_scares: u8,
    pub fade_out_s: f32,
    pub personal_space_m: f32,
    pub personal_space_fade_m: f32,
    pub max_opacity: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub max_view_distance_m: f32,
}

impl From<&GhostConfigFile> for GhostTuning {
    fn from(cfg: &GhostConfigFile) -> Self {
        Self {
            hover_drift_min_m: cfg.hover_drift_min_m,
            hover_drift_max_m: cfg.hover_drift_max_m,
            drift_rate_min_hz: cfg.drift_rate_min_hz,
            drift_rate_max_hz: cfg.drift_rate_max_hz,
            bob_amount_m: cfg.bob_amount_m,
            bob_speed_hz: cfg.bob_speed_hz,
            visible_min_s: cfg.visible_min_s,
            visible_max_s: cfg.visible_max_s,
            invisible_min_s: cfg.invisible_min_s,
            invisible_max_s: cfg.invisible_max_s,
            cross_fade_s: cfg.cross_fade_s,
            reappear_radius_m: cfg.reappear_radius_m,
            scared_duration_s: cfg.scared_duration_s,
            scare_shake_m: cfg.scare_shake_m,
            scared_opacity: cfg.scared_opacity,
            max_scares: cfg.max_scares,
            fade_out_s: cfg.fade_out_s,
            personal_space_m: cfg.personal_space_m,
            personal_space_fade_m: cfg.personal_space_fade_m,
            max_opacity: cfg.max_opacity,
            min_scale: cfg.min_scale,
            max_scale: cfg.max_scale,
            max_view_distance_m: cfg.max_view_distance_m,
        }
    }
}

impl Default for GhostTuning {
    fn default() -> Self {
        Self::from(&GhostConfigFile::default())
    }
}

#[derive(Debug, Clone)]
pub struct Ghost {
    pub id: GhostId,
    pub pos: Vec3,
    hover_center: Vec3,
    spawn_anchor: Vec3,
    lifecycle: Lifecycle,
    vis_phase: VisibilityPhase,
    vis_remaining_s: f32,
    visibility_opacity: f32,
    scare_count: u8,
    scored_this_scare: bool,
    // Per-instance randomized motion so entities never move in lockstep.
    anim_t: f32,
    bob_phase: f32,
    drift_phase: f32,
    drift_rate_hz: f32,
    drift_radius_m: f32,
    viewer_distance: f32,
    opacity: f32,
    scale: f32,
    tuning: GhostTuning,
}

impl Ghost {
    /// Create a ghost at a placement-engine-provided position. Motion phases
    /// and amplitudes are drawn from `rng`; the first visible phase starts
    /// fully transparent and cross-fades in.
    pub fn spawn(id: GhostId, pos: Vec3, tuning: GhostTuning, rng: &mut impl Rng) -> Self {
        let vis_remaining_s = rng.random_range(tuning.visible_min_s..=tuning.visible_max_s);
        Self {
            id,
            pos,
            hover_center: pos,
            spawn_anchor: pos,
            lifecycle: Lifecycle::Hovering,
            vis_phase: VisibilityPhase::Visible,
            vis_remaining_s,
            visibility_opacity: 0.0,
            scare_count: 0,
            scored_this_scare: false,
            anim_t: 0.0,
            bob_phase: rng.random_range(0.0..TAU),
            drift_phase: rng.random_range(0.0..TAU),
            drift_rate_hz: rng.random_range(tuning.drift_rate_min_hz..=tuning.drift_rate_max_hz),
            drift_radius_m: rng.random_range(tuning.hover_drift_min_m..=tuning.hover_drift_max_m),
            viewer_distance: f32::MAX,
            opacity: 0.0,
            scale: tuning.max_scale,
            tuning,
        }
    }

    /// Advance all timers and motion by `dt` seconds. Total over every
    /// state; a `Removed` ghost is inert.
    pub fn update(&mut self, dt: f32, viewer: &ViewerPose, rng: &mut impl Rng) {
        if matches!(self.lifecycle, Lifecycle::Removed) {
            self.opacity = 0.0;
            return;
        }
        self.viewer_distance = self.pos.distance(viewer.pos);
        self.anim_t += dt;
        self.step_lifecycle(dt, rng);
        self.step_visibility(dt, rng);
        self.opacity = self.compose_opacity();
        self.scale = self.distance_scale();
    }

    fn step_lifecycle(&mut self, dt: f32, rng: &mut impl Rng) {
        let hover = self.hover_pos();
        match self.lifecycle {
            Lifecycle::Hovering => {
                self.pos = hover;
            }
            Lifecycle::Scared { remaining_s } => {
                let left = remaining_s - dt;
                if left <= 0.0 {
                    self.lifecycle = if self.scare_count >= self.tuning.max_scares {
                        Lifecycle::Fading {
                            remaining_s: self.tuning.fade_out_s,
                        }
                    } else {
                        Lifecycle::Hovering
                    };
                    self.pos = hover;
                } else {
                    self.lifecycle = Lifecycle::Scared { remaining_s: left };
                    let s = self.tuning.scare_shake_m;
                    let jitter = Vec3::new(
                        rng.random_range(-1.0..=1.0),
                        rng.random_range(-1.0..=1.0),
                        rng.random_range(-1.0..=1.0),
                    ) * s;
                    self.pos = hover + jitter;
                }
            }
            Lifecycle::Fading { remaining_s } => {
                let left = remaining_s - dt;
                if left <= 0.0 {
                    self.lifecycle = Lifecycle::Removed;
                } else {
                    self.lifecycle = Lifecycle::Fading { remaining_s: left };
                    self.pos = hover;
                }
            }
            Lifecycle::Removed => {}
        }
    }

    /// Visible/Invisible oscillation with linear cross-fades. Runs in every
    /// lifecycle state so a scared ghost can still blink out mid-fright.
    fn step_visibility(&mut self, dt: f32, rng: &mut impl Rng) {
        let t = self.tuning;
        self.vis_remaining_s -= dt;
        if self.vis_remaining_s <= 0.0 {
            match self.vis_phase {
                VisibilityPhase::Visible => {
                    self.vis_phase = VisibilityPhase::Invisible;
                    self.vis_remaining_s =
                        rng.random_range(t.invisible_min_s..=t.invisible_max_s);
                }
                VisibilityPhase::Invisible => {
                    self.vis_phase = VisibilityPhase::Visible;
                    self.vis_remaining_s = rng.random_range(t.visible_min_s..=t.visible_max_s);
                    // Blink to a nearby spot instead of sliding there.
                    self.reappear(rng);
                }
            }
        }
        let step = dt / t.cross_fade_s;
        self.visibility_opacity = match self.vis_phase {
            VisibilityPhase::Visible => (self.visibility_opacity + step).min(1.0),
            VisibilityPhase::Invisible => (self.visibility_opacity - step).max(0.0),
        };
    }

    /// New hover center drawn uniformly in a disc around the spawn anchor.
    fn reappear(&mut self, rng: &mut impl Rng) {
        let angle = rng.random_range(0.0..TAU);
        let r = self.tuning.reappear_radius_m * rng.random::<f32>().sqrt();
        self.hover_center = self.spawn_anchor + Vec3::new(angle.cos() * r, 0.0, angle.sin() * r);
    }

    /// Smooth periodic oscillation around the hover center: sinusoidal bob
    /// plus a slow orbit, both phase-shifted per instance.
    fn hover_pos(&self) -> Vec3 {
        let t = self.tuning;
        let drift = self.drift_phase + self.anim_t * self.drift_rate_hz * TAU;
        let bob = (self.bob_phase + self.anim_t * t.bob_speed_hz * TAU).sin() * t.bob_amount_m;
        Vec3::new(
            self.hover_center.x + drift.cos() * self.drift_radius_m,
            self.hover_center.y + bob,
            self.hover_center.z + drift.sin() * self.drift_radius_m,
        )
    }

    /// Ramp to zero as the viewer steps inside the personal-space bubble so
    /// the mesh never clips through the camera.
    fn proximity_opacity(&self) -> f32 {
        let t = self.tuning;
        ((self.viewer_distance - t.personal_space_m) / t.personal_space_fade_m).clamp(0.0, 1.0)
    }

    fn scare_modifier(&self) -> f32 {
        let t = self.tuning;
        match self.lifecycle {
            Lifecycle::Hovering => 1.0,
            Lifecycle::Scared { .. } => t.scared_opacity,
            Lifecycle::Fading { remaining_s } => (remaining_s / t.fade_out_s).clamp(0.0, 1.0),
            Lifecycle::Removed => 0.0,
        }
    }

    fn compose_opacity(&self) -> f32 {
        (self.proximity_opacity()
            * self.visibility_opacity
            * self.scare_modifier()
            * self.tuning.max_opacity)
            .clamp(0.0, 1.0)
    }

    /// Render scale shrinks linearly with distance down to a floor; opacity,
    /// not scale, carries the full fade-out.
    fn distance_scale(&self) -> f32 {
        let t = self.tuning;
        let ratio = (self.viewer_distance / t.max_view_distance_m).clamp(0.0, 1.0);
        t.max_scale - ratio * (t.max_scale - t.min_scale)
    }

    /// Trigger a fright reaction. Only a hovering ghost with scares left
    /// reacts; repeated triggers while scared or fading are no-ops. Returns
    /// whether the reaction fired (callers forward that to scoring).
    pub fn scare(&mut self) -> bool {
        if !matches!(self.lifecycle, Lifecycle::Hovering)
            || self.scare_count >= self.tuning.max_scares
        {
            return false;
        }
        self.scare_count += 1;
        self.scored_this_scare = false;
        self.lifecycle = Lifecycle::Scared {
            remaining_s: self.tuning.scared_duration_s,
        };
        true
    }

    /// True only once the visibility fade-in has fully completed; gates
    /// scoring so a half-materialized ghost cannot award points.
    #[inline]
    pub fn is_at_max_opacity(&self) -> bool {
        self.visibility_opacity >= 1.0
    }

    /// One point max per scare-and-reveal cycle.
    #[inline]
    pub fn can_be_scored(&self) -> bool {
        self.is_at_max_opacity() && self.scare_count > 0 && !self.scored_this_scare
    }

    #[inline]
    pub fn mark_scored(&mut self) {
        self.scored_this_scare = true;
    }

    #[inline]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
    #[inline]
    pub fn visibility_phase(&self) -> VisibilityPhase {
        self.vis_phase
    }
    #[inline]
    pub fn visibility_opacity(&self) -> f32 {
        self.visibility_opacity
    }
    /// Composed render opacity: proximity x visibility x fright modifier.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }
    #[inline]
    pub fn scare_count(&self) -> u8 {
        self.scare_count
    }
    #[inline]
    pub fn is_scared(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Scared { .. })
    }
    #[inline]
    pub fn is_removed(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Removed)
    }
    #[inline]
    pub fn hover_center(&self) -> Vec3 {
        self.hover_center
    }
    #[inline]
    pub fn spawn_anchor(&self) -> Vec3 {
        self.spawn_anchor
    }
    #[inline]
    pub fn viewer_distance(&self) -> f32 {
        self.viewer_distance
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn mk_ghost(tuning: GhostTuning) -> (Ghost, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(0xB00);
        let g = Ghost::spawn(GhostId(1), Vec3::new(0.0, 0.8, -2.0), tuning, &mut rng);
        (g, rng)
    }

    #[test]
    fn spawns_hovering_and_transparent() {
        let (g, _) = mk_ghost(GhostTuning::default());
        assert_eq!(g.lifecycle(), Lifecycle::Hovering);
        assert_eq!(g.visibility_phase(), VisibilityPhase::Visible);
        assert_eq!(g.opacity(), 0.0);
        assert!(!g.is_at_max_opacity());
    }

    #[test]
    fn fade_in_completes_after_cross_fade() {
        let (mut g, mut rng) = mk_ghost(GhostTuning::default());
        let viewer = ViewerPose::default();
        g.update(0.25, &viewer, &mut rng);
        assert!(!g.is_at_max_opacity());
        g.update(0.25, &viewer, &mut rng);
        assert!(g.is_at_max_opacity());
    }

    #[test]
    fn hover_stays_near_center() {
        // Long visible phase so the hover center never blinks elsewhere.
        let tuning = GhostTuning {
            visible_min_s: 100.0,
            visible_max_s: 100.0,
            ..Default::default()
        };
        let (mut g, mut rng) = mk_ghost(tuning);
        let viewer = ViewerPose::default();
        let bound = tuning.hover_drift_max_m + tuning.bob_amount_m + 1e-4;
        for _ in 0..200 {
            g.update(0.05, &viewer, &mut rng);
            assert!(g.pos.distance(g.hover_center()) <= bound);
        }
    }

    #[test]
    fn proximity_zeroes_opacity_inside_personal_space() {
        let (mut g, mut rng) = mk_ghost(GhostTuning::default());
        // Viewer standing right on top of the ghost.
        let viewer = ViewerPose::new(g.pos, glam::Quat::IDENTITY);
        for _ in 0..10 {
            g.update(0.25, &viewer, &mut rng);
        }
        assert_eq!(g.opacity(), 0.0);
    }
}
