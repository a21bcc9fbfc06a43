//! Player controller: respawn, timers, movement and weapon fire.

use rand::Rng;
use tracing::debug;

use forgeline_core::constants::*;
use forgeline_core::definitions::weapon_def;
use forgeline_core::enums::ProjectileOwner;
use forgeline_core::events::GameEvent;
use forgeline_core::types::Vec2;

use super::abilities;
use crate::world::GameWorld;
use crate::world_setup::{spawn_projectile, ProjectileSpawn};

pub fn run(world: &mut GameWorld, dt: f32) {
    if world.player.is_dead {
        world.player.respawn_timer -= dt;
        if world.player.respawn_timer <= 0.0 {
            respawn(world);
        }
        return;
    }

    let move_dir = world.input.move_dir();
    let map_size = world.grid.world_size(TILE_SIZE);
    let player = &mut world.player;

    if player.invincible_timer > 0.0 {
        player.invincible_timer = (player.invincible_timer - dt).max(0.0);
    }
    abilities::tick(player, dt);

    player.energy = (player.energy + PLAYER_ENERGY_REGEN * dt).min(player.max_energy);

    player.velocity = move_dir * PLAYER_SPEED_PX * player.speed_multiplier();
    player.position += player.velocity * dt;
    player.position = player
        .position
        .clamp(Vec2::splat(TILE_SIZE), map_size - Vec2::splat(TILE_SIZE));

    player.fire_cooldown = (player.fire_cooldown - dt).max(0.0);
    if world.input.fire_held && !player.commander_mode && player.fire_cooldown <= 0.0 {
        fire(world);
    }
}

/// Fire the current weapon toward the aim point.
fn fire(world: &mut GameWorld) {
    let weapon = weapon_def(world.player.current_weapon);
    let origin = world.player.position;
    let aim = world.input.aim - origin;
    let angle = aim.y.atan2(aim.x);
    let damage = weapon.damage * world.player.damage_multiplier();
    let spread = weapon.spread_deg.to_radians();

    for _ in 0..weapon.projectile_count {
        let jitter = (world.rng.gen::<f32>() - 0.5) * spread;
        spawn_projectile(
            world,
            ProjectileSpawn {
                position: origin,
                velocity: Vec2::from_angle(angle + jitter) * weapon.projectile_speed,
                damage,
                owner: ProjectileOwner::Player,
                piercing: weapon.piercing,
                explosive: weapon.explosive,
                explosion_radius: weapon.explosion_radius,
                lifetime: weapon.projectile_lifetime(),
            },
        );
    }
    world.player.fire_cooldown = weapon.fire_interval();
}

/// Bring the player back at the core (or the map centre) with full hp and
/// energy and a short grace period.
fn respawn(world: &mut GameWorld) {
    let position = match world.buildings.core() {
        Some(core) => core.center_world(),
        None => world.grid.world_size(TILE_SIZE) / 2.0,
    };

    let player = &mut world.player;
    player.position = position;
    player.velocity = Vec2::ZERO;
    player.hp = player.max_hp;
    player.energy = player.max_energy;
    player.is_dead = false;
    player.respawn_timer = 0.0;
    player.invincible_timer = RESPAWN_INVINCIBILITY;

    world.emit(GameEvent::PlayerRespawned);
    debug!(x = position.x, y = position.y, "player respawned");
}

/// Apply `amount` damage to the player unless dead or invincible. Returns
/// true if the hit landed.
pub fn damage_player(world: &mut GameWorld, amount: f32) -> bool {
    let player = &mut world.player;
    if !player.is_vulnerable() {
        return false;
    }

    player.hp -= amount;
    if player.hp <= 0.0 {
        player.hp = 0.0;
        player.is_dead = true;
        player.respawn_timer = PLAYER_RESPAWN_TIME;
        player.velocity = Vec2::ZERO;
        world.emit(GameEvent::PlayerDied);
        debug!("player died");
    }
    true
}
