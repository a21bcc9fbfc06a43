//! Simulation engine for FORGELINE.
//!
//! Owns the world state (tile grid, buildings, player, and the hecs world
//! holding enemies and projectiles), runs systems in a fixed order each
//! update, and produces `GameStateSnapshot`s for the frontend.

pub mod engine;
pub mod persistence;
pub mod placement;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use forgeline_core as core;
pub use engine::{update_game, SimConfig, SimulationEngine};
pub use world::GameWorld;
