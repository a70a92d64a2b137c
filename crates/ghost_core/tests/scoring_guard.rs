use ghost_core::{Ghost, GhostId, GhostTuning, ViewerPose};
use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// A single scare-and-reveal cycle can award at most one point: the guard
// flag blocks double counting until the next fright.
#[test]
fn one_point_per_scare_cycle() {
    let mut rng = ChaCha8Rng::seed_from_u64(37);
    let mut g = Ghost::spawn(
        GhostId(6),
        Vec3::new(0.0, 0.8, -3.0),
        GhostTuning::default(),
        &mut rng,
    );
    let viewer = ViewerPose::default();

    // Fresh ghost: no fright yet, fade-in incomplete.
    assert!(!g.can_be_scored());

    assert!(g.scare());
    // Mid fade-in the scoring gate stays shut.
    assert!(!g.is_at_max_opacity());
    assert!(!g.can_be_scored());

    // Two 0.3s steps complete the 0.5s cross-fade (and the fright).
    g.update(0.3, &viewer, &mut rng);
    g.update(0.3, &viewer, &mut rng);
    assert!(g.is_at_max_opacity());
    assert!(g.can_be_scored());

    g.mark_scored();
    assert!(!g.can_be_scored(), "guard must block a second point");

    // Next fright re-arms the guard.
    assert!(g.scare());
    g.update(0.3, &viewer, &mut rng);
    g.update(0.3, &viewer, &mut rng);
    assert!(g.can_be_scored());
}
