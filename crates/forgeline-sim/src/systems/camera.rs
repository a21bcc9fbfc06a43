//! Camera follow and zoom.

use forgeline_core::constants::{CAMERA_LERP, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

use crate::world::GameWorld;

/// Ease the camera toward the player.
pub fn run(world: &mut GameWorld) {
    let target = world.player.position;
    let camera = &mut world.camera;
    camera.x += (target.x - camera.x) * CAMERA_LERP;
    camera.y += (target.y - camera.y) * CAMERA_LERP;
}

/// Change zoom by `steps` increments, clamped to the allowed range.
pub fn adjust_zoom(world: &mut GameWorld, steps: i32) {
    let zoom = world.camera.zoom + steps as f32 * ZOOM_STEP;
    world.camera.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
}
