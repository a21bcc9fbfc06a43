//! Repair station: heals nearby buildings over time.

use forgeline_core::constants::{REPAIR_RADIUS, REPAIR_RATE};

use crate::world::GameWorld;

pub fn update(world: &mut GameWorld, id: u32, dt: f32) {
    let Some(center) = world.buildings.get(id).map(|b| b.center_tiles()) else {
        return;
    };

    for other in world.buildings.iter_mut() {
        if other.id == id || other.hp >= other.max_hp {
            continue;
        }
        if center.distance(other.center_tiles()) <= REPAIR_RADIUS {
            other.hp = (other.hp + REPAIR_RATE * dt).min(other.max_hp);
        }
    }
}
