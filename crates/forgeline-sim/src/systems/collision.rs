//! Collision resolution: projectiles against the opposing side.
//!
//! Player and turret projectiles hit enemies; enemy projectiles hit the
//! player. Enemy hp is resolved on a local copy so an enemy killed by one
//! projectile is invisible to every later projectile in the same pass,
//! then written back in one go.

use hecs::Entity;

use forgeline_core::components::{Enemy, Health, Loot, Projectile};
use forgeline_core::constants::{EXPLOSION_DAMAGE_RATIO, PROJECTILE_HIT_RADIUS_PX};
use forgeline_core::enums::EnemyType;
use forgeline_core::events::GameEvent;
use forgeline_core::resources::ResourceStack;
use forgeline_core::types::{Position, Vec2};

use super::player::damage_player;
use crate::world::GameWorld;

/// Local view of one enemy during the pass.
struct Target {
    entity: Entity,
    id: u32,
    kind: EnemyType,
    position: Vec2,
    hp: f32,
    loot: Vec<ResourceStack>,
    alive: bool,
}

impl Target {
    /// Apply damage; returns true if this hit killed it.
    fn hit(&mut self, damage: f32) -> bool {
        self.hp -= damage;
        if self.hp <= 0.0 {
            self.alive = false;
            return true;
        }
        false
    }
}

pub fn run(world: &mut GameWorld) {
    let mut targets: Vec<Target> = world
        .entities
        .query::<(&Enemy, &Position, &Health, &Loot)>()
        .iter()
        .map(|(entity, (enemy, pos, health, loot))| Target {
            entity,
            id: enemy.id,
            kind: enemy.kind,
            position: pos.0,
            hp: health.hp,
            loot: loot.0.clone(),
            alive: true,
        })
        .collect();
    let projectiles: Vec<Entity> = world
        .entities
        .query::<&Projectile>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    let mut killed: Vec<usize> = Vec::new();
    let mut consumed: Vec<Entity> = Vec::new();

    for entity in projectiles {
        let Ok((projectile, pos)) = world
            .entities
            .query_one_mut::<(&mut Projectile, &Position)>(entity)
        else {
            continue;
        };
        let at = pos.0;

        if !projectile.owner.hits_enemies() {
            let damage = projectile.damage;
            if world.player.is_vulnerable()
                && at.distance(world.player.position) < PROJECTILE_HIT_RADIUS_PX
            {
                damage_player(world, damage);
                consumed.push(entity);
            }
            continue;
        }

        for i in 0..targets.len() {
            let target = &mut targets[i];
            if !target.alive
                || projectile.hit_enemies.contains(&target.id)
                || at.distance(target.position) >= PROJECTILE_HIT_RADIUS_PX
            {
                continue;
            }

            if target.hit(projectile.damage) {
                killed.push(i);
            }
            if projectile.piercing {
                projectile.hit_enemies.insert(target.id);
            }

            if projectile.explosive {
                let splash = projectile.damage * EXPLOSION_DAMAGE_RATIO;
                for (j, other) in targets.iter_mut().enumerate() {
                    if j == i || !other.alive {
                        continue;
                    }
                    if at.distance(other.position) < projectile.explosion_radius && other.hit(splash) {
                        killed.push(j);
                    }
                }
            }

            if !projectile.piercing {
                consumed.push(entity);
                break;
            }
        }
    }

    // Write back surviving hp.
    for target in targets.iter().filter(|t| t.alive) {
        if let Ok(mut health) = world.entities.get::<&mut Health>(target.entity) {
            health.hp = target.hp;
        }
    }

    for i in killed {
        let target = &targets[i];
        world.resources.credit_all(&target.loot);
        world.events.push(GameEvent::EnemyKilled {
            enemy_id: target.id,
            kind: target.kind,
            x: target.position.x,
            y: target.position.y,
        });
        let _ = world.entities.despawn(target.entity);
    }
    for entity in consumed {
        let _ = world.entities.despawn(entity);
    }
}
