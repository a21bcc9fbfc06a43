//! Enemy AI system: target selection, movement and melee/ranged attacks.
//!
//! Decisions come from `forgeline_enemy_ai`; this system flattens the
//! world into targeting candidates, applies the results to each enemy and
//! resolves attacks against the player and buildings.

use hecs::Entity;
use tracing::{debug, info};

use forgeline_core::components::{Enemy, EnemyAttack};
use forgeline_core::enums::{BuildingType, GamePhase};
use forgeline_core::events::GameEvent;
use forgeline_core::types::{Position, Vec2, Velocity};
use forgeline_enemy_ai::behavior::{evaluate, EnemyAction, EnemyContext};
use forgeline_enemy_ai::targeting::{
    attack_victim, select_target, AttackVictim, Candidate, TargetClass, TargetContext,
};

use super::player::damage_player;
use crate::world::GameWorld;

/// Every standing building as a targeting candidate, in id order.
pub fn building_candidates(world: &GameWorld) -> Vec<Candidate> {
    world
        .buildings
        .iter()
        .map(|b| Candidate {
            building_id: b.id,
            class: match b.kind {
                BuildingType::Core => TargetClass::Core,
                k if k.is_turret() => TargetClass::Turret,
                k if k.is_generator() => TargetClass::Generator,
                _ => TargetClass::Other,
            },
            position: b.center_world(),
        })
        .collect()
}

fn player_target(world: &GameWorld) -> Option<Vec2> {
    (!world.player.is_dead).then_some(world.player.position)
}

pub fn run(world: &mut GameWorld, dt: f32) {
    let mut candidates = building_candidates(world);
    let enemies: Vec<Entity> = world
        .entities
        .query::<&Enemy>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for entity in enemies {
        let player = player_target(world);
        let Ok((enemy, pos, vel, attack)) = world
            .entities
            .query_one_mut::<(&Enemy, &mut Position, &mut Velocity, &mut EnemyAttack)>(entity)
        else {
            continue;
        };

        let target = select_target(&TargetContext {
            behavior: enemy.behavior,
            position: pos.0,
            player,
            buildings: &candidates,
        });
        let update = evaluate(&EnemyContext {
            position: pos.0,
            speed: enemy.speed,
            attack_range: attack.range,
            attack_cooldown: attack.cooldown,
            current_cooldown: attack.current_cooldown,
            target: target.map(|t| t.position()),
            dt,
        });

        vel.0 = if dt > 0.0 {
            (update.new_position - pos.0) / dt
        } else {
            Vec2::ZERO
        };
        pos.0 = update.new_position;
        attack.current_cooldown = update.new_cooldown;
        let damage = attack.damage;

        if update.action == EnemyAction::Attack {
            if let Some(target) = target {
                resolve_attack(world, &mut candidates, target.position(), damage);
            }
        }
    }
}

/// Land an attack aimed at `point`.
fn resolve_attack(world: &mut GameWorld, candidates: &mut Vec<Candidate>, point: Vec2, damage: f32) {
    match attack_victim(point, player_target(world), candidates) {
        Some(AttackVictim::Player) => {
            damage_player(world, damage);
        }
        Some(AttackVictim::Building(id)) => {
            if damage_building(world, id, damage) {
                candidates.retain(|c| c.building_id != id);
            }
        }
        None => {}
    }
}

/// Damage a building, removing it at hp ≤ 0. Losing the core ends the run.
/// Returns true if the building was destroyed.
pub fn damage_building(world: &mut GameWorld, building_id: u32, amount: f32) -> bool {
    let Some(building) = world.buildings.get_mut(building_id) else {
        return false;
    };
    building.hp -= amount;
    if building.hp > 0.0 {
        return false;
    }

    let kind = building.kind;
    world.buildings.remove(building_id);
    world.emit(GameEvent::BuildingDestroyed { building_id, kind });
    debug!(building_id, ?kind, "building destroyed");

    if kind == BuildingType::Core {
        world.phase = GamePhase::Defeated;
        world.emit(GameEvent::CoreDestroyed);
        info!(tick = world.time.tick, waves_completed = world.waves_completed, "core destroyed");
    }
    true
}
