//! Wave configurations, the built-in wave catalogue and modifier math.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::resources::ResourceStack;

/// One enemy type entry of a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveEnemy {
    pub kind: EnemyType,
    pub count: u32,
}

/// A summonable wave: what it costs, what clearing it pays, and what it sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub faction: EnemyFaction,
    pub base_cost: Vec<ResourceStack>,
    pub base_reward: Vec<ResourceStack>,
    pub enemy_types: Vec<WaveEnemy>,
    pub available_modifiers: Vec<WaveModifier>,
}

impl WaveConfig {
    /// Sum of the per-type counts, before modifiers.
    pub fn base_enemy_count(&self) -> u32 {
        self.enemy_types.iter().map(|e| e.count).sum()
    }
}

/// The wave currently being fought. At most one exists per world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveWave {
    /// Sequential wave number, recorded on every enemy it spawns.
    pub id: u32,
    pub config: WaveConfig,
    pub modifiers: Vec<WaveModifier>,
    /// Enemies not yet spawned.
    pub enemies_remaining: u32,
    pub total_enemies: u32,
    /// Seconds until the next spawn.
    pub spawn_timer: f32,
}

/// Total enemies a wave sends once `modifiers` are applied.
pub fn total_enemies(config: &WaveConfig, modifiers: &[WaveModifier]) -> u32 {
    let base = config.base_enemy_count();
    if modifiers.contains(&WaveModifier::Swarm) {
        (base as f32 * SWARM_COUNT_FACTOR).floor() as u32
    } else {
        base
    }
}

pub fn hp_multiplier(modifiers: &[WaveModifier]) -> f32 {
    modifiers
        .iter()
        .filter(|&&m| m == WaveModifier::Armored)
        .fold(1.0, |acc, _| acc * ARMORED_HP_FACTOR)
}

pub fn speed_multiplier(modifiers: &[WaveModifier]) -> f32 {
    modifiers
        .iter()
        .filter(|&&m| m == WaveModifier::Fast)
        .fold(1.0, |acc, _| acc * FAST_SPEED_FACTOR)
}

/// Reward factors stack multiplicatively.
pub fn reward_multiplier(modifiers: &[WaveModifier]) -> f32 {
    modifiers.iter().fold(1.0, |acc, m| {
        acc * match m {
            WaveModifier::Swarm => SWARM_REWARD_FACTOR,
            WaveModifier::Armored => ARMORED_REWARD_FACTOR,
            WaveModifier::Fast => FAST_REWARD_FACTOR,
            WaveModifier::Regenerating => REGENERATING_REWARD_FACTOR,
            WaveModifier::Boss => BOSS_REWARD_FACTOR,
        }
    })
}

/// Base rewards scaled by the modifiers, floored per resource.
pub fn scaled_rewards(config: &WaveConfig, modifiers: &[WaveModifier]) -> Vec<ResourceStack> {
    let mult = reward_multiplier(modifiers);
    config
        .base_reward
        .iter()
        .map(|r| ResourceStack::new(r.resource, (r.amount as f32 * mult).floor() as u32))
        .collect()
}

// --- Catalogue ---

fn enemies(list: &[(EnemyType, u32)]) -> Vec<WaveEnemy> {
    list.iter()
        .map(|&(kind, count)| WaveEnemy { kind, count })
        .collect()
}

pub fn hive_basic() -> WaveConfig {
    WaveConfig {
        id: "hive_basic".into(),
        name: "Hive Swarm".into(),
        description: "A basic swarm of hive creatures".into(),
        faction: EnemyFaction::Hive,
        base_cost: vec![ResourceStack::new(ResourceType::IronOre, 10)],
        base_reward: vec![
            ResourceStack::new(ResourceType::Biomass, 20),
            ResourceStack::new(ResourceType::CrystalShards, 5),
        ],
        enemy_types: enemies(&[(EnemyType::Swarmer, 10), (EnemyType::Spitter, 3)]),
        available_modifiers: vec![WaveModifier::Swarm, WaveModifier::Fast],
    }
}

pub fn hive_brood() -> WaveConfig {
    WaveConfig {
        id: "hive_brood".into(),
        name: "Hive Brood".into(),
        description: "Brutes escorting a hive queen".into(),
        faction: EnemyFaction::Hive,
        base_cost: vec![
            ResourceStack::new(ResourceType::IronOre, 50),
            ResourceStack::new(ResourceType::Biomass, 20),
        ],
        base_reward: vec![
            ResourceStack::new(ResourceType::Biomass, 80),
            ResourceStack::new(ResourceType::CrystalShards, 25),
        ],
        enemy_types: enemies(&[
            (EnemyType::Swarmer, 12),
            (EnemyType::Brute, 4),
            (EnemyType::Queen, 1),
        ]),
        available_modifiers: vec![
            WaveModifier::Swarm,
            WaveModifier::Armored,
            WaveModifier::Regenerating,
            WaveModifier::Boss,
        ],
    }
}

pub fn machine_patrol() -> WaveConfig {
    WaveConfig {
        id: "machine_patrol".into(),
        name: "Machine Patrol".into(),
        description: "Drones and walkers hunting generators".into(),
        faction: EnemyFaction::Machines,
        base_cost: vec![
            ResourceStack::new(ResourceType::IronIngot, 20),
            ResourceStack::new(ResourceType::CopperWire, 10),
        ],
        base_reward: vec![
            ResourceStack::new(ResourceType::Circuits, 15),
            ResourceStack::new(ResourceType::Steel, 10),
        ],
        enemy_types: enemies(&[
            (EnemyType::Drone, 8),
            (EnemyType::Walker, 4),
            (EnemyType::Tank, 1),
        ]),
        available_modifiers: vec![
            WaveModifier::Armored,
            WaveModifier::Fast,
            WaveModifier::Boss,
        ],
    }
}

pub fn void_incursion() -> WaveConfig {
    WaveConfig {
        id: "void_incursion".into(),
        name: "Void Incursion".into(),
        description: "Phasing wraiths and corruptors from beyond".into(),
        faction: EnemyFaction::Void,
        base_cost: vec![
            ResourceStack::new(ResourceType::Steel, 20),
            ResourceStack::new(ResourceType::CrystalShards, 10),
        ],
        base_reward: vec![
            ResourceStack::new(ResourceType::DarkMatter, 10),
            ResourceStack::new(ResourceType::VoidEssence, 2),
        ],
        enemy_types: enemies(&[(EnemyType::Wraith, 8), (EnemyType::Corruptor, 4)]),
        available_modifiers: vec![
            WaveModifier::Swarm,
            WaveModifier::Armored,
            WaveModifier::Fast,
            WaveModifier::Regenerating,
        ],
    }
}

/// Every built-in wave, cheapest first.
pub fn catalogue() -> Vec<WaveConfig> {
    vec![hive_basic(), hive_brood(), machine_patrol(), void_incursion()]
}

pub fn find_wave(id: &str) -> Option<WaveConfig> {
    catalogue().into_iter().find(|w| w.id == id)
}
