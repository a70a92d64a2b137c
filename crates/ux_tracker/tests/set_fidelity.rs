use ghost_core::{GhostId, ViewerPose};
use glam::Vec3;
use ux_tracker::{TrackedGhost, TrackerHud};

fn tracked(id: u32, pos: Vec3) -> TrackedGhost {
    TrackedGhost {
        id: GhostId(id),
        pos,
    }
}

// Tracked set goes {A,B} -> {B,C}: A's indicator is destroyed, C's created,
// B's carried over. No stale entries, ever.
#[test]
fn indicators_mirror_the_tracked_set_exactly() {
    let mut hud = TrackerHud::new();
    let viewer = ViewerPose::default();
    let (w, h) = (800.0, 600.0);

    let a = tracked(1, Vec3::new(-3.0, 1.6, -5.0));
    let b = tracked(2, Vec3::new(0.0, 1.6, -8.0));
    let c = tracked(3, Vec3::new(4.0, 1.6, -2.0));

    hud.update(&[a, b], &viewer, w, h);
    assert_eq!(hud.len(), 2);
    assert!(hud.indicator(GhostId(1)).is_some());
    assert!(hud.indicator(GhostId(2)).is_some());
    assert!(hud.indicator(GhostId(3)).is_none());

    hud.update(&[b, c], &viewer, w, h);
    assert_eq!(hud.len(), 2);
    assert!(hud.indicator(GhostId(1)).is_none(), "A must be destroyed");
    assert!(hud.indicator(GhostId(2)).is_some(), "B must survive");
    assert!(hud.indicator(GhostId(3)).is_some(), "C must be created");
}

#[test]
fn empty_tracked_set_clears_all_indicators() {
    let mut hud = TrackerHud::new();
    let viewer = ViewerPose::default();
    hud.update(
        &[tracked(7, Vec3::new(1.0, 1.0, -4.0))],
        &viewer,
        800.0,
        600.0,
    );
    assert_eq!(hud.len(), 1);
    hud.update(&[], &viewer, 800.0, 600.0);
    assert!(hud.is_empty());
}
