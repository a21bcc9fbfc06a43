//! Save/load boundary.
//!
//! The whole world minus transient input, selection and pending events is
//! the serializable unit. Saves are pretty-printed JSON, one file per slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use forgeline_core::components::*;
use forgeline_core::enums::GamePhase;
use forgeline_core::resources::{ResourceLedger, ResourceStack};
use forgeline_core::types::{Camera, Position, SimTime, Vec2, Velocity};
use forgeline_core::waves::ActiveWave;
use forgeline_terrain::TileGrid;

use crate::world::{Buildings, GameWorld};

/// An enemy entity flattened out of the ECS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyRecord {
    pub enemy: Enemy,
    pub position: Vec2,
    pub velocity: Vec2,
    pub health: Health,
    pub attack: EnemyAttack,
    pub loot: Vec<ResourceStack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileRecord {
    pub projectile: Projectile,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Full save data written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub slot_name: String,
    pub timestamp: u64,
    pub seed: u64,
    pub time: SimTime,
    pub phase: GamePhase,
    pub game_speed: f32,
    pub grid: TileGrid,
    pub camera: Camera,
    pub resources: ResourceLedger,
    pub buildings: Vec<Building>,
    pub player: Player,
    pub enemies: Vec<EnemyRecord>,
    pub projectiles: Vec<ProjectileRecord>,
    pub active_wave: Option<ActiveWave>,
    pub waves_completed: u32,
    pub next_wave_id: u32,
    pub unlocks: Unlocks,
    pub base_radius: u32,
    pub next_id: u32,
}

/// Lightweight metadata for listing saves without restoring them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub slot_name: String,
    pub timestamp: u64,
    pub tick: u64,
    pub waves_completed: u32,
}

impl SaveData {
    /// Capture the persistent part of `world`.
    pub fn capture(world: &GameWorld, slot_name: &str) -> Self {
        let mut enemies: Vec<EnemyRecord> = world
            .entities
            .query::<(&Enemy, &Position, &Velocity, &Health, &EnemyAttack, &Loot)>()
            .iter()
            .map(|(_, (enemy, pos, vel, health, attack, loot))| EnemyRecord {
                enemy: enemy.clone(),
                position: pos.0,
                velocity: vel.0,
                health: *health,
                attack: *attack,
                loot: loot.0.clone(),
            })
            .collect();
        enemies.sort_by_key(|e| e.enemy.id);

        let mut projectiles: Vec<ProjectileRecord> = world
            .entities
            .query::<(&Projectile, &Position, &Velocity)>()
            .iter()
            .map(|(_, (projectile, pos, vel))| ProjectileRecord {
                projectile: projectile.clone(),
                position: pos.0,
                velocity: vel.0,
            })
            .collect();
        projectiles.sort_by_key(|p| p.projectile.id);

        Self {
            slot_name: slot_name.to_string(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            seed: world.seed,
            time: world.time,
            phase: world.phase,
            game_speed: world.game_speed,
            grid: world.grid.clone(),
            camera: world.camera,
            resources: world.resources.clone(),
            buildings: world.buildings.iter().cloned().collect(),
            player: world.player.clone(),
            enemies,
            projectiles,
            active_wave: world.active_wave.clone(),
            waves_completed: world.waves_completed,
            next_wave_id: world.next_wave_id,
            unlocks: world.unlocks.clone(),
            base_radius: world.base_radius,
            next_id: world.next_id(),
        }
    }

    /// Rebuild a world. The RNG is re-seeded from the seed and the saved
    /// tick; input and selection start empty.
    pub fn restore(self) -> GameWorld {
        let rng = ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(self.time.tick));
        let mut world = GameWorld::new(self.seed, self.grid, self.player, rng);
        world.time = self.time;
        world.phase = self.phase;
        world.game_speed = self.game_speed;
        world.camera = self.camera;
        world.resources = self.resources;
        world.buildings = Buildings::from_buildings(self.buildings);
        world.active_wave = self.active_wave;
        world.waves_completed = self.waves_completed;
        world.next_wave_id = self.next_wave_id;
        world.unlocks = self.unlocks;
        world.base_radius = self.base_radius;
        world.set_next_id(self.next_id);

        for record in self.enemies {
            world.entities.spawn((
                record.enemy,
                Position(record.position),
                Velocity(record.velocity),
                record.health,
                record.attack,
                Loot(record.loot),
            ));
        }
        for record in self.projectiles {
            world.entities.spawn((
                record.projectile,
                Position(record.position),
                Velocity(record.velocity),
            ));
        }
        world
    }

    pub fn metadata(&self) -> SaveMetadata {
        SaveMetadata {
            slot_name: self.slot_name.clone(),
            timestamp: self.timestamp,
            tick: self.time.tick,
            waves_completed: self.waves_completed,
        }
    }
}

const SAVE_EXTENSION: &str = "json";

/// `<dir>/<slot>.json`. Slot names are limited to ASCII letters, digits,
/// `-` and `_` so a slot can never address a file outside `dir`.
fn slot_path(dir: &Path, slot: &str) -> Result<PathBuf, String> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(format!("Invalid save slot name: {slot:?}"));
    }
    Ok(dir.join(slot).with_extension(SAVE_EXTENSION))
}

/// Write `data` to its slot. The JSON goes to a temporary sibling first and
/// is renamed over the old save, so a failed write leaves the previous save
/// intact.
pub fn save_to_file(dir: &Path, slot: &str, data: &SaveData) -> Result<(), String> {
    let path = slot_path(dir, slot)?;
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create save directory {}: {e}", dir.display()))?;
    let json = serde_json::to_vec_pretty(data)
        .map_err(|e| format!("Failed to serialize slot {slot}: {e}"))?;

    let staging = path.with_extension("json.tmp");
    fs::write(&staging, json)
        .map_err(|e| format!("Failed to write save file {}: {e}", staging.display()))?;
    fs::rename(&staging, &path)
        .map_err(|e| format!("Failed to write save file {}: {e}", path.display()))
}

pub fn load_from_file(dir: &Path, slot: &str) -> Result<SaveData, String> {
    let path = slot_path(dir, slot)?;
    let bytes = fs::read(&path)
        .map_err(|e| format!("Failed to read save file {}: {e}", path.display()))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| format!("Failed to parse save file {}: {e}", path.display()))
}

/// Metadata of every readable save in `dir`, newest first. Unreadable or
/// foreign files are skipped.
pub fn list_saves(dir: &Path) -> Vec<SaveMetadata> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut saves: Vec<SaveMetadata> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == SAVE_EXTENSION))
        .filter_map(|path| fs::read(path).ok())
        .filter_map(|bytes| serde_json::from_slice::<SaveData>(&bytes).ok())
        .map(|data| data.metadata())
        .collect();
    saves.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.slot_name.cmp(&b.slot_name))
    });
    saves
}

/// Remove a slot. Deleting a slot that was never saved succeeds.
pub fn delete_save(dir: &Path, slot: &str) -> Result<(), String> {
    let path = slot_path(dir, slot)?;
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(format!("Failed to delete save file {}: {e}", path.display())),
    }
}
