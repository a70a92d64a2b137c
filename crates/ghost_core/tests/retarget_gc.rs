use data_runtime::configs::ghost::GhostConfigFile;
use data_runtime::configs::spawn::SpawnConfigFile;
use ghost_core::{GhostManager, ViewerPose};
use glam::Vec3;

// Moving the anchor (e.g. a refined location fix) does not drag existing
// ghosts along; it changes where new ones spawn and what the distance GC
// measures against, so stranded ghosts get collected on the next tick.
#[test]
fn retarget_collects_stranded_ghosts_and_respawns_at_new_anchor() {
    let cfg = SpawnConfigFile {
        spawn_budget: 100,
        max_concurrent: 10,
        spawn_interval_s: 0.0,
        ..Default::default()
    };
    let mut m = GhostManager::from_config(&GhostConfigFile::default(), &cfg, 19);
    let old_anchor = Vec3::ZERO;
    let new_anchor = Vec3::new(200.0, 0.0, 0.0);
    m.set_target_location(old_anchor);
    m.activate();
    let viewer = ViewerPose::default();

    for _ in 0..5 {
        m.update(0.1, &viewer);
    }
    assert_eq!(m.ghost_count(), 5);
    let spawned_before = m.spawned_count();

    m.set_target_location(new_anchor);
    m.update(0.1, &viewer);

    // Old ghosts are 200m from the new anchor, far past the 50m radius.
    for g in m.ghosts() {
        assert!(
            g.spawn_anchor().distance(new_anchor) <= 2.0 + 1e-4,
            "survivor not clustered at the new anchor"
        );
    }
    assert_eq!(m.ghost_count(), 1, "one fresh spawn at the new anchor");
    assert_eq!(m.spawned_count(), spawned_before + 1);
}
