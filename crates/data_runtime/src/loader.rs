//! Path resolution and TOML parsing shared by the config loaders.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the `data/` directory.
///
/// Prefer the top-level workspace `data/` so tests and tools can run from any
/// crate; fall back to a crate-local `data/` for out-of-workspace embedding.
pub fn data_root() -> PathBuf {
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Parse `data/<rel>` as TOML into `T`, or return `None` when the file does
/// not exist. Missing config files are not errors; callers substitute their
/// compiled-in defaults.
pub fn load_toml_opt<T: DeserializeOwned>(rel: impl AsRef<Path>) -> Result<Option<T>> {
    let path = data_root().join(rel);
    if !path.is_file() {
        return Ok(None);
    }
    let txt =
        fs::read_to_string(&path).with_context(|| format!("read config: {}", path.display()))?;
    let parsed =
        toml::from_str(&txt).with_context(|| format!("parse TOML: {}", path.display()))?;
    Ok(Some(parsed))
}
