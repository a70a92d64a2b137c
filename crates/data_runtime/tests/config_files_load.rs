//! The shipped data/config files must parse and agree with the compiled-in
//! defaults, so a missing file and a stock file behave identically.
#![allow(clippy::unwrap_used, clippy::expect_used)]

#[test]
fn ghost_toml_matches_defaults() {
    let cfg = data_runtime::configs::ghost::load_default().expect("load ghost config");
    assert_eq!(cfg, data_runtime::configs::ghost::GhostConfigFile::default());
}

#[test]
fn spawn_toml_matches_defaults() {
    let cfg = data_runtime::configs::spawn::load_default().expect("load spawn config");
    assert_eq!(cfg, data_runtime::configs::spawn::SpawnConfigFile::default());
}

#[test]
fn tracker_toml_matches_defaults() {
    let cfg = data_runtime::configs::tracker::load_default().expect("load tracker config");
    assert_eq!(
        cfg,
        data_runtime::configs::tracker::TrackerConfigFile::default()
    );
}

#[test]
fn game_toml_matches_defaults() {
    let cfg = data_runtime::configs::game::load_default().expect("load game config");
    assert_eq!(cfg, data_runtime::configs::game::GameConfigFile::default());
}
