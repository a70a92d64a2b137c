//! data_runtime: tuning schemas and loaders for the ghost simulation.
//!
//! Every gameplay constant lives in `data/config/*.toml`. Loaders fall back
//! to compiled-in defaults when a file is absent so the simulation crates
//! work without a data directory (tests, embedding), and clamp parsed values
//! to sane ranges.

pub mod loader;

pub mod configs {
    pub mod game;
    pub mod ghost;
    pub mod spawn;
    pub mod tracker;
}
