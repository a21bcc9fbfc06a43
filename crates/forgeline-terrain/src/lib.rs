//! Tile map for FORGELINE.
//!
//! The tile grid, deposit and buildability queries, and the coordinate
//! transforms between screen, world and grid space.

pub use forgeline_core as core;

pub mod grid;
pub mod projection;

// Re-export key types for convenience.
pub use grid::{Tile, TileGrid};
pub use projection::{grid_to_world, screen_to_world, world_to_grid};
