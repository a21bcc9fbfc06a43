//! Snapshot system: builds a complete GameStateSnapshot from the world.
//!
//! Read-only apart from the event list, which the caller drains and hands
//! over.

use forgeline_core::components::*;
use forgeline_core::events::GameEvent;
use forgeline_core::state::*;
use forgeline_core::types::{Position, Velocity};

use super::wave_director;
use crate::world::GameWorld;

/// Build a snapshot of the current world state.
pub fn build_snapshot(world: &GameWorld, events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: world.time,
        phase: world.phase,
        game_speed: world.game_speed,
        map_width: world.grid.width(),
        map_height: world.grid.height(),
        camera: world.camera,
        resources: world.resources.iter().collect(),
        player: build_player(&world.player),
        buildings: build_buildings(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        wave: build_wave(world),
        waves_completed: world.waves_completed,
        selection: world.selection,
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        hp: player.hp,
        max_hp: player.max_hp,
        energy: player.energy,
        max_energy: player.max_energy,
        current_weapon: player.current_weapon,
        is_dead: player.is_dead,
        respawn_timer: player.respawn_timer,
        invincible: player.is_invincible(),
        commander_mode: player.commander_mode,
        abilities: player
            .ability_states
            .iter()
            .map(|(&ability, state)| AbilityView {
                ability,
                cooldown_remaining: state.cooldown_remaining,
                active: state.active,
                active_remaining: state.active_remaining,
            })
            .collect(),
    }
}

fn build_buildings(world: &GameWorld) -> Vec<BuildingView> {
    world
        .buildings
        .iter()
        .map(|b| BuildingView {
            id: b.id,
            kind: b.kind,
            x: b.origin.x,
            y: b.origin.y,
            width: b.width,
            height: b.height,
            hp: b.hp,
            max_hp: b.max_hp,
            direction: b.direction,
            powered: b.powered,
            craft_progress: b.craft_progress,
            recipe: b.recipe,
            items: b.conveyor().map(|c| c.items.clone()).unwrap_or_default(),
            fuel: b.generator().map(|g| g.fuel_stored),
        })
        .collect()
}

/// Enemies sorted by id, so output is independent of ECS storage order.
fn build_enemies(world: &GameWorld) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .entities
        .query::<(&Enemy, &Position, &Health, &EnemyAttack)>()
        .iter()
        .map(|(_, (enemy, pos, health, attack))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            faction: enemy.faction,
            position: pos.0,
            hp: health.hp,
            max_hp: health.max_hp,
            is_boss: enemy.is_boss,
            stunned: attack.current_cooldown > 0.0,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &GameWorld) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .entities
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, pos, vel))| ProjectileView {
            id: projectile.id,
            position: pos.0,
            velocity: vel.0,
            owner: projectile.owner,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_wave(world: &GameWorld) -> Option<WaveView> {
    let wave = world.active_wave.as_ref()?;
    Some(WaveView {
        id: wave.id,
        config_id: wave.config.id.clone(),
        name: wave.config.name.clone(),
        phase: wave_director::wave_phase(world),
        modifiers: wave.modifiers.clone(),
        enemies_remaining: wave.enemies_remaining,
        total_enemies: wave.total_enemies,
        live_enemies: wave_director::live_wave_enemies(world, wave.id),
    })
}
