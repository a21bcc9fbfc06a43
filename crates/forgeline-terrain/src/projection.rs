//! Coordinate transforms between screen, world and grid space.
//!
//! World space is in pixels with the origin at the map's top-left corner,
//! x to the right and y downward. Screen space is canvas pixels; the camera
//! centre maps to the middle of the canvas.

use forgeline_core::constants::TILE_SIZE;
use forgeline_core::types::{Camera, GridPos, Vec2};

/// Tile containing a world point. Points left of or above the map give
/// negative coordinates; callers bounds-check against the grid.
pub fn world_to_grid(world: Vec2) -> GridPos {
    GridPos::new(
        (world.x / TILE_SIZE).floor() as i32,
        (world.y / TILE_SIZE).floor() as i32,
    )
}

/// Centre of a tile in world pixels.
pub fn grid_to_world(pos: GridPos) -> Vec2 {
    Vec2::new(
        pos.x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        pos.y as f32 * TILE_SIZE + TILE_SIZE / 2.0,
    )
}

/// World point under a screen pixel for a canvas of `canvas` size.
pub fn screen_to_world(screen: Vec2, camera: &Camera, canvas: Vec2) -> Vec2 {
    Vec2::new(
        (screen.x - canvas.x / 2.0) / camera.zoom + camera.x,
        (screen.y - canvas.y / 2.0) / camera.zoom + camera.y,
    )
}

/// Inverse of [`screen_to_world`].
pub fn world_to_screen(world: Vec2, camera: &Camera, canvas: Vec2) -> Vec2 {
    Vec2::new(
        (world.x - camera.x) * camera.zoom + canvas.x / 2.0,
        (world.y - camera.y) * camera.zoom + canvas.y / 2.0,
    )
}
