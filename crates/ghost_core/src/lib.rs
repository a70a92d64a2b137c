//! ghost_core: in-process simulation of haunt entities around a world anchor.
//!
//! Owns the per-ghost behavioral state machine (hover, fright, terminal
//! fade), the spawn placement engine, distance garbage collection, and
//! session scoring. A render/UI layer reads positions, scales, and composed
//! opacities each frame; it never mutates simulation state directly.
//!
//! Everything here is single-threaded and frame-driven. Randomness comes
//! from an explicitly seeded RNG owned by [`GhostManager`] so behavior is
//! reproducible in tests.

pub mod ghost;
pub mod manager;
pub mod score;
pub mod viewer;

pub use ghost::{Ghost, GhostId, GhostTuning, Lifecycle, VisibilityPhase};
pub use manager::{GhostManager, SpawnTuning};
pub use score::ScoreBoard;
pub use viewer::ViewerPose;
