use ghost_core::{GhostManager, ViewerPose};
use glam::Vec3;

// Drive a full session with a pacing viewer and constant fright triggers;
// the composed opacity must stay in [0,1] through every state combination.
#[test]
fn composed_opacity_always_in_unit_range() {
    let mut m = GhostManager::new(99);
    m.set_target_location(Vec3::new(0.0, 0.0, -3.0));
    m.activate();

    for tick in 0..2000 {
        let t = tick as f32 * 0.05;
        // Walk through the cluster and back out again.
        let viewer = ViewerPose::looking_along(
            Vec3::new((t * 0.4).sin() * 4.0, 1.6, -3.0 + (t * 0.3).cos() * 4.0),
            Vec3::NEG_Z,
        );
        m.update(0.05, &viewer);
        if tick % 7 == 0 {
            for g in m.ghosts_mut() {
                g.scare();
            }
        }
        for g in m.ghosts() {
            let o = g.opacity();
            assert!((0.0..=1.0).contains(&o), "opacity {o} out of range");
            assert!((0.0..=1.0).contains(&g.visibility_opacity()));
            assert!(g.scale() > 0.0, "scale must never reach zero");
        }
    }
}
