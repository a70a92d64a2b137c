//! Viewer (camera) transform consumed by the simulation each frame.

use glam::{Quat, Vec3};

/// World-space pose of the handheld/headset camera. The frame driver feeds
/// this in once per tick; the core never reads platform camera state.
#[derive(Debug, Clone, Copy)]
pub struct ViewerPose {
    pub pos: Vec3,
    pub rot: Quat,
}

impl ViewerPose {
    pub fn new(pos: Vec3, rot: Quat) -> Self {
        Self { pos, rot }
    }

    /// Pose at `pos` looking along `dir`. Convenience for tests and
    /// fixed-camera demos; a zero `dir` yields the identity rotation.
    pub fn looking_along(pos: Vec3, dir: Vec3) -> Self {
        let f = dir.normalize_or_zero();
        let rot = if f.length_squared() > 0.0 {
            Quat::from_rotation_arc(Vec3::NEG_Z, f)
        } else {
            Quat::IDENTITY
        };
        Self { pos, rot }
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rot * Vec3::NEG_Z
    }
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rot * Vec3::X
    }
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rot * Vec3::Y
    }
}

impl Default for ViewerPose {
    fn default() -> Self {
        // Standing eye height, looking down -Z.
        Self {
            pos: Vec3::new(0.0, 1.6, 0.0),
            rot: Quat::IDENTITY,
        }
    }
}
