//! Turret targeting and fire.
//!
//! A turret waits out its cooldown, then fires one fixed-damage,
//! non-piercing projectile at the nearest enemy within range of its
//! footprint centre.

use hecs::World;

use forgeline_core::components::{BuildingPayload, Enemy};
use forgeline_core::constants::*;
use forgeline_core::enums::ProjectileOwner;
use forgeline_core::types::{Position, Vec2};

use crate::world::GameWorld;
use crate::world_setup::{spawn_projectile, ProjectileSpawn};

/// Nearest enemy strictly closer than `range` to `from`: (id, position).
pub fn nearest_enemy(entities: &World, from: Vec2, range: f32) -> Option<(u32, Vec2)> {
    let mut best: Option<(f32, u32, Vec2)> = None;
    for (_entity, (enemy, pos)) in entities.query::<(&Enemy, &Position)>().iter() {
        let d = from.distance(pos.0);
        if d < range && best.map_or(true, |(bd, _, _)| d < bd) {
            best = Some((d, enemy.id, pos.0));
        }
    }
    best.map(|(_, id, pos)| (id, pos))
}

pub fn update(world: &mut GameWorld, id: u32, dt: f32) {
    let Some(building) = world.buildings.get_mut(id) else {
        return;
    };
    let origin = building.center_world();
    let BuildingPayload::Turret(turret) = &mut building.payload else {
        return;
    };

    if turret.cooldown > 0.0 {
        turret.cooldown -= dt;
        return;
    }

    let Some((target_id, target_pos)) = nearest_enemy(&world.entities, origin, TURRET_RANGE_PX)
    else {
        return;
    };
    turret.target = Some(target_id);
    turret.cooldown = TURRET_FIRE_INTERVAL;

    let direction = (target_pos - origin).normalize_or_zero();
    spawn_projectile(
        world,
        ProjectileSpawn {
            position: origin,
            velocity: direction * TURRET_PROJECTILE_SPEED,
            damage: TURRET_DAMAGE,
            owner: ProjectileOwner::Turret,
            piercing: false,
            explosive: false,
            explosion_radius: 0.0,
            lifetime: TURRET_PROJECTILE_LIFETIME,
        },
    );
}
