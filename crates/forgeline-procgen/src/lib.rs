//! Procedural map generation for FORGELINE.
//!
//! Every function takes the caller's RNG, so a seeded generator gives a
//! reproducible map.

pub mod mapgen;

pub use mapgen::{generate_map, MapGenParams};
