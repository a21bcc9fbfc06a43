//! Wave director: summoning, spawn scheduling and completion rewards.
//!
//! Idle → Spawning (one enemy per interval at a random map edge) →
//! Draining (all spawned, some alive) → Completed → Idle. Rewards are
//! credited exactly once, when the wave leaves the world.

use rand::Rng;
use tracing::{info, trace};

use forgeline_core::components::Enemy;
use forgeline_core::constants::{TILE_SIZE, WAVE_SPAWN_INTERVAL};
use forgeline_core::enums::{WaveModifier, WavePhase};
use forgeline_core::events::GameEvent;
use forgeline_core::types::Vec2;
use forgeline_core::waves::{self, ActiveWave, WaveConfig};

use crate::world::GameWorld;
use crate::world_setup::spawn_enemy;

/// Summon a wave. Rejected (returns false, world unchanged) while another
/// wave is active or when the ledger cannot cover the cost. The cost is
/// debited in the same step that activates the wave.
pub fn start_wave(world: &mut GameWorld, config: &WaveConfig, modifiers: &[WaveModifier]) -> bool {
    if let Some(active) = &world.active_wave {
        trace!(wave = %config.id, active = active.id, "wave rejected: another wave is active");
        return false;
    }
    if !world.resources.try_debit(&config.base_cost) {
        trace!(wave = %config.id, "wave rejected: cannot afford");
        return false;
    }

    let id = world.next_wave_id;
    world.next_wave_id += 1;
    let total = waves::total_enemies(config, modifiers);

    world.active_wave = Some(ActiveWave {
        id,
        config: config.clone(),
        modifiers: modifiers.to_vec(),
        enemies_remaining: total,
        total_enemies: total,
        spawn_timer: 0.0,
    });
    world.emit(GameEvent::WaveStarted {
        wave: id,
        config_id: config.id.clone(),
        total_enemies: total,
    });
    info!(wave = id, config = %config.id, ?modifiers, total_enemies = total, "wave started");
    true
}

/// Live enemies spawned by wave `wave_id`.
pub fn live_wave_enemies(world: &GameWorld, wave_id: u32) -> u32 {
    world
        .entities
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| enemy.wave == Some(wave_id))
        .count() as u32
}

pub fn wave_phase(world: &GameWorld) -> WavePhase {
    match &world.active_wave {
        None => WavePhase::Idle,
        Some(wave) if wave.enemies_remaining > 0 => WavePhase::Spawning,
        Some(wave) if live_wave_enemies(world, wave.id) > 0 => WavePhase::Draining,
        Some(_) => WavePhase::Completed,
    }
}

pub fn run(world: &mut GameWorld, dt: f32) {
    let Some(wave) = world.active_wave.as_mut() else {
        return;
    };

    if wave.enemies_remaining > 0 {
        wave.spawn_timer -= dt;
        if wave.spawn_timer <= 0.0 {
            wave.enemies_remaining -= 1;
            wave.spawn_timer = WAVE_SPAWN_INTERVAL;
            spawn_wave_enemy(world);
        }
    }

    let Some(wave) = &world.active_wave else {
        return;
    };
    if wave.enemies_remaining == 0 && live_wave_enemies(world, wave.id) == 0 {
        complete_wave(world);
    }
}

/// Random point on one of the four map edges.
fn edge_position(world: &mut GameWorld) -> Vec2 {
    let width = world.grid.width() as f32;
    let height = world.grid.height() as f32;
    let rng = &mut world.rng;

    match rng.gen_range(0..4) {
        0 => Vec2::new(rng.gen::<f32>() * width * TILE_SIZE, TILE_SIZE),
        1 => Vec2::new((width - 1.0) * TILE_SIZE, rng.gen::<f32>() * height * TILE_SIZE),
        2 => Vec2::new(rng.gen::<f32>() * width * TILE_SIZE, (height - 1.0) * TILE_SIZE),
        _ => Vec2::new(TILE_SIZE, rng.gen::<f32>() * height * TILE_SIZE),
    }
}

/// Spawn one enemy of a uniformly chosen type entry of the active wave.
fn spawn_wave_enemy(world: &mut GameWorld) {
    let Some(wave) = &world.active_wave else {
        return;
    };
    if wave.config.enemy_types.is_empty() {
        return;
    }
    let wave_id = wave.id;
    let types: Vec<_> = wave.config.enemy_types.iter().map(|e| e.kind).collect();
    let hp_mult = waves::hp_multiplier(&wave.modifiers);
    let speed_mult = waves::speed_multiplier(&wave.modifiers);

    let kind = types[world.rng.gen_range(0..types.len())];
    let position = edge_position(world);
    spawn_enemy(world, kind, position, Some(wave_id), hp_mult, speed_mult);
}

/// Credit the scaled rewards and retire the wave.
fn complete_wave(world: &mut GameWorld) {
    let Some(wave) = world.active_wave.take() else {
        return;
    };

    let rewards = waves::scaled_rewards(&wave.config, &wave.modifiers);
    world.resources.credit_all(&rewards);
    world.waves_completed += 1;
    world.emit(GameEvent::WaveCompleted {
        wave: wave.id,
        waves_completed: world.waves_completed,
    });
    info!(
        wave = wave.id,
        config = %wave.config.id,
        waves_completed = world.waves_completed,
        ?rewards,
        "wave completed"
    );
}
