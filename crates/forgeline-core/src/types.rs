//! Fundamental geometric and simulation types.
//!
//! World space is measured in pixels (`TILE_SIZE` pixels per tile),
//! x to the right and y downward. Grid space is integer tile coordinates.

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

use crate::constants::TILE_SIZE;

/// Integer tile coordinate on the map grid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step away.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// World-space position component (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// World-space velocity component (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of updates applied so far.
    pub tick: u64,
    /// Accumulated simulated seconds (after game-speed scaling).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one update of `dt` simulated seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Camera pan (world-space centre) and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// Centre of a `width`×`height` footprint anchored at `origin`, in tile units.
pub fn footprint_center_tiles(origin: GridPos, width: i32, height: i32) -> Vec2 {
    Vec2::new(
        origin.x as f32 + width as f32 / 2.0,
        origin.y as f32 + height as f32 / 2.0,
    )
}

/// Centre of a footprint in world space (pixels).
pub fn footprint_center_world(origin: GridPos, width: i32, height: i32) -> Vec2 {
    footprint_center_tiles(origin, width, height) * TILE_SIZE
}
