//! Game state snapshot: the read-only view handed to renderers and UI
//! after each tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::{ConveyorItem, PlacementSelection};
use crate::definitions::RecipeId;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Camera, SimTime, Vec2};

/// Complete visible state after a tick. The tile grid is not repeated here;
/// it never changes after generation and is fetched once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub game_speed: f32,
    pub map_width: i32,
    pub map_height: i32,
    pub camera: Camera,
    pub resources: BTreeMap<ResourceType, u32>,
    pub player: PlayerView,
    pub buildings: Vec<BuildingView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub wave: Option<WaveView>,
    pub waves_completed: u32,
    pub selection: PlacementSelection,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub energy: f32,
    pub max_energy: f32,
    pub current_weapon: WeaponType,
    pub is_dead: bool,
    pub respawn_timer: f32,
    pub invincible: bool,
    pub commander_mode: bool,
    pub abilities: Vec<AbilityView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityView {
    pub ability: AbilityType,
    pub cooldown_remaining: f32,
    pub active: bool,
    pub active_remaining: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingView {
    pub id: u32,
    pub kind: BuildingType,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub hp: f32,
    pub max_hp: f32,
    pub direction: Direction,
    pub powered: bool,
    pub craft_progress: f32,
    pub recipe: Option<RecipeId>,
    /// Conveyor belt contents (empty for other buildings).
    pub items: Vec<ConveyorItem>,
    /// Generator fuel, if this is a generator.
    pub fuel: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyType,
    pub faction: EnemyFaction,
    pub position: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub is_boss: bool,
    /// Holding still on attack cooldown or EMP stun.
    pub stunned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub owner: ProjectileOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveView {
    pub id: u32,
    pub config_id: String,
    pub name: String,
    pub phase: WavePhase,
    pub modifiers: Vec<WaveModifier>,
    pub enemies_remaining: u32,
    pub total_enemies: u32,
    /// Live enemies belonging to this wave.
    pub live_enemies: u32,
}
