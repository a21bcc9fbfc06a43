//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a tick. Drained into the
/// snapshot after every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    BuildingPlaced {
        building_id: u32,
        kind: BuildingType,
        x: i32,
        y: i32,
    },
    /// Removed by the player; refund already credited.
    BuildingRemoved { building_id: u32, kind: BuildingType },
    /// Destroyed by enemy attacks.
    BuildingDestroyed { building_id: u32, kind: BuildingType },
    EnemyKilled {
        enemy_id: u32,
        kind: EnemyType,
        x: f32,
        y: f32,
    },
    WaveStarted {
        wave: u32,
        config_id: String,
        total_enemies: u32,
    },
    WaveCompleted { wave: u32, waves_completed: u32 },
    PlayerDied,
    PlayerRespawned,
    AbilityActivated { ability: AbilityType },
    /// The core fell. The run is over.
    CoreDestroyed,
    /// A queued command could not be applied.
    CommandRejected { reason: String },
}
