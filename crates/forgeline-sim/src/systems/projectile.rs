//! Projectile movement and expiry.

use forgeline_core::components::Projectile;
use forgeline_core::types::{Position, Velocity};

use crate::world::GameWorld;

/// Integrate positions, count down lifetimes and despawn expired
/// projectiles. Uses the world's despawn buffer to avoid per-update
/// allocation.
pub fn run(world: &mut GameWorld, dt: f32) {
    world.despawn_buffer.clear();

    for (entity, (projectile, pos, vel)) in world
        .entities
        .query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        pos.0 += vel.0 * dt;
        projectile.lifetime -= dt;
        if projectile.lifetime <= 0.0 {
            world.despawn_buffer.push(entity);
        }
    }

    for entity in world.despawn_buffer.drain(..) {
        let _ = world.entities.despawn(entity);
    }
}
