//! Systems that operate on the game world each update.
//!
//! Systems are pure functions that take `&mut GameWorld` (or `&GameWorld`
//! for read-only). They do not own state; all state lives in the world.

pub mod abilities;
pub mod buildings;
pub mod camera;
pub mod collision;
pub mod conveyor;
pub mod enemy_ai;
pub mod extraction;
pub mod generator;
pub mod player;
pub mod power;
pub mod production;
pub mod projectile;
pub mod repair;
pub mod snapshot;
pub mod turret;
pub mod wave_director;
