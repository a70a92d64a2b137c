//! Ghost set lifecycle: spawn scheduling, rejection-sampled placement,
//! distance garbage collection, and one-shot session completion.
//!
//! Per-tick ordering is fixed: garbage collection, then spawning, then
//! advancing survivors, so the off-screen locator always sees final
//! positions when the frame driver runs it afterwards.

use crate::ghost::{Ghost, GhostId, GhostTuning};
use crate::viewer::ViewerPose;
use data_runtime::configs::ghost::GhostConfigFile;
use data_runtime::configs::spawn::SpawnConfigFile;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

/// Runtime spawn tuning copied out of `data_runtime` config.
#[derive(Debug, Clone, Copy)]
pub struct SpawnTuning {
    pub max_concurrent: usize,
    pub spawn_budget: u32,
    pub spawn_interval_s: f32,
    pub min_spawn_distance_m: f32,
    pub max_spawn_distance_m: f32,
    pub spawn_height_base_m: f32,
    pub spawn_height_variance_m: f32,
    pub min_safe_distance_from_viewer_m: f32,
    pub placement_attempts: u32,
    pub visibility_radius_m: f32,
}

impl From<&SpawnConfigFile> for SpawnTuning {
    fn from(cfg: &SpawnConfigFile) -> Self {
        Self {
            max_concurrent: cfg.max_concurrent,
            spawn_budget: cfg.spawn_budget,
            spawn_interval_s: cfg.spawn_interval_s,
            min_spawn_distance_m: cfg.min_spawn_distance_m,
            max_spawn_distance_m: cfg.max_spawn_distance_m,
            spawn_height_base_m: cfg.spawn_height_base_m,
            spawn_height_variance_m: cfg.spawn_height_variance_m,
            min_safe_distance_from_viewer_m: cfg.min_safe_distance_from_viewer_m,
            placement_attempts: cfg.placement_attempts,
            visibility_radius_m: cfg.visibility_radius_m,
        }
    }
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self::from(&SpawnConfigFile::default())
    }
}

/// Owns every live [`Ghost`] for one session. Constructed once; activation
/// starts the spawn scheduler and deactivation releases all entities
/// synchronously.
pub struct GhostManager {
    ghosts: Vec<Ghost>,
    active: bool,
    target_anchor: Vec3,
    spawn_timer_s: f32,
    spawned_count: u32,
    next_id: u32,
    completion_fired: bool,
    on_session_complete: Option<Box<dyn FnMut()>>,
    rng: ChaCha8Rng,
    ghost_tuning: GhostTuning,
    spawn: SpawnTuning,
}

impl GhostManager {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(GhostTuning::default(), SpawnTuning::default(), seed)
    }

    pub fn from_config(ghost_cfg: &GhostConfigFile, spawn_cfg: &SpawnConfigFile, seed: u64) -> Self {
        Self::with_tuning(GhostTuning::from(ghost_cfg), SpawnTuning::from(spawn_cfg), seed)
    }

    pub fn with_tuning(ghost_tuning: GhostTuning, spawn: SpawnTuning, seed: u64) -> Self {
        Self {
            ghosts: Vec::new(),
            active: false,
            target_anchor: Vec3::ZERO,
            spawn_timer_s: 0.0,
            spawned_count: 0,
            next_id: 1,
            completion_fired: false,
            on_session_complete: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            ghost_tuning,
            spawn,
        }
    }

    /// Register the one-shot callback fired when the spawn budget is spent
    /// and the last ghost is gone.
    pub fn set_session_complete<F: FnMut() + 'static>(&mut self, f: F) {
        self.on_session_complete = Some(Box::new(f));
    }

    /// Re-target future spawns and the garbage-collection check. Existing
    /// hover centers are deliberately untouched.
    pub fn set_target_location(&mut self, anchor: Vec3) {
        self.target_anchor = anchor;
    }

    /// Start spawning. Idempotent; a fresh activation resets the session.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.spawn_timer_s = 0.0;
        self.spawned_count = 0;
        self.completion_fired = false;
        self.ghosts.clear();
        log::info!("ghost manager activated (anchor {:?})", self.target_anchor);
    }

    /// Stop spawning and release every ghost synchronously. Idempotent.
    pub fn deactivate(&mut self) {
        if !self.active {
            self.ghosts.clear();
            return;
        }
        self.active = false;
        self.ghosts.clear();
        log::info!("ghost manager deactivated");
    }

    /// Advance one frame. Order matters: collect, spawn, then advance, so
    /// survivors' positions are final when this returns.
    pub fn update(&mut self, dt: f32, viewer: &ViewerPose) {
        if !self.active {
            return;
        }

        // 1) Distance GC against the current anchor. Bounds the live set
        //    even when the anchor itself moved out from under old spawns.
        let anchor = self.target_anchor;
        let radius = self.spawn.visibility_radius_m;
        let before = self.ghosts.len();
        self.ghosts.retain(|g| g.pos.distance(anchor) <= radius);
        if self.ghosts.len() != before {
            log::debug!("collected {} out-of-range ghosts", before - self.ghosts.len());
        }

        // 2) Spawn scheduling under both quotas.
        self.spawn_timer_s -= dt;
        if self.spawn_timer_s <= 0.0
            && self.spawned_count < self.spawn.spawn_budget
            && self.ghosts.len() < self.spawn.max_concurrent
        {
            self.spawn_ghost(viewer.pos);
            self.spawn_timer_s = self.spawn.spawn_interval_s;
        }

        // 3) Advance survivors.
        for g in &mut self.ghosts {
            g.update(dt, viewer, &mut self.rng);
        }

        // 4) Drop ghosts whose terminal fade completed this tick.
        self.ghosts.retain(|g| !g.is_removed());

        // 5) One-shot completion per activation.
        if !self.completion_fired
            && self.spawned_count >= self.spawn.spawn_budget
            && self.ghosts.is_empty()
        {
            self.completion_fired = true;
            log::info!("ghost session complete ({} spawned)", self.spawned_count);
            if let Some(cb) = self.on_session_complete.as_mut() {
                cb();
            }
        }
    }

    fn spawn_ghost(&mut self, viewer_pos: Vec3) {
        let pos = self.place_ghost(viewer_pos);
        let id = GhostId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let ghost = Ghost::spawn(id, pos, self.ghost_tuning, &mut self.rng);
        log::debug!("spawned ghost {:?} at {:?}", id, pos);
        self.ghosts.push(ghost);
        self.spawned_count += 1;
    }

    /// Rejection sampling with a bounded retry budget. Viewer safety is a
    /// soft preference: when every attempt lands inside the viewer bubble,
    /// the last candidate is used anyway rather than stalling the spawn.
    fn place_ghost(&mut self, viewer_pos: Vec3) -> Vec3 {
        let s = self.spawn;
        let mut candidate = Vec3::ZERO;
        for _ in 0..s.placement_attempts {
            candidate = self.sample_candidate();
            if candidate.distance(viewer_pos) >= s.min_safe_distance_from_viewer_m {
                return candidate;
            }
        }
        log::debug!(
            "no safe spawn after {} attempts; using last candidate",
            s.placement_attempts
        );
        candidate
    }

    fn sample_candidate(&mut self) -> Vec3 {
        let s = self.spawn;
        let a = self.target_anchor;
        let angle = self.rng.random_range(0.0..TAU);
        let dist = self
            .rng
            .random_range(s.min_spawn_distance_m..=s.max_spawn_distance_m);
        let height =
            s.spawn_height_base_m + self.rng.random_range(0.0..=s.spawn_height_variance_m);
        Vec3::new(
            a.x + angle.cos() * dist,
            a.y + height,
            a.z + angle.sin() * dist,
        )
    }

    #[inline]
    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }
    #[inline]
    pub fn ghosts_mut(&mut self) -> &mut [Ghost] {
        &mut self.ghosts
    }
    /// Look up a live ghost by id (e.g. after a pick/selection event).
    pub fn ghost_mut(&mut self, id: GhostId) -> Option<&mut Ghost> {
        self.ghosts.iter_mut().find(|g| g.id == id)
    }
    #[inline]
    pub fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }
    pub fn scared_count(&self) -> usize {
        self.ghosts.iter().filter(|g| g.is_scared()).count()
    }
    #[inline]
    pub fn spawned_count(&self) -> u32 {
        self.spawned_count
    }
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion_fired
    }
    #[inline]
    pub fn target_anchor(&self) -> Vec3 {
        self.target_anchor
    }
}
