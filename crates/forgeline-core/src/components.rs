//! Entity data: buildings, enemies, projectiles and the player.
//!
//! Enemies and projectiles live in the hecs world as components. Buildings
//! and the player are plain structs owned by the world state. Game logic
//! lives in systems; the methods here are accessors and derived values.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::definitions::{building_def, power_radius, RecipeId};
use crate::enums::*;
use crate::resources::ResourceStack;
use crate::types::{footprint_center_tiles, footprint_center_world, GridPos, Vec2};

// --- Buildings ---

/// A placed building. Fields shared by every building type live here; the
/// type-specific state lives in `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: u32,
    pub kind: BuildingType,
    /// Top-left tile of the footprint.
    pub origin: GridPos,
    pub width: i32,
    pub height: i32,
    pub hp: f32,
    pub max_hp: f32,
    pub direction: Direction,
    /// Recomputed from scratch by the power pass every tick.
    pub powered: bool,
    pub input_storage: Vec<ResourceStack>,
    pub output_storage: Vec<ResourceStack>,
    /// Seconds accumulated toward the next extraction or craft.
    pub craft_progress: f32,
    pub recipe: Option<RecipeId>,
    pub level: u32,
    pub payload: BuildingPayload,
}

impl Building {
    /// A fresh building at full hp with the default payload for its type.
    pub fn new(id: u32, kind: BuildingType, origin: GridPos, direction: Direction) -> Self {
        let def = building_def(kind);
        Self {
            id,
            kind,
            origin,
            width: def.width,
            height: def.height,
            hp: def.max_hp,
            max_hp: def.max_hp,
            direction,
            powered: false,
            input_storage: Vec::new(),
            output_storage: Vec::new(),
            craft_progress: 0.0,
            recipe: None,
            level: 1,
            payload: BuildingPayload::for_kind(kind),
        }
    }

    /// Footprint centre in tile units.
    pub fn center_tiles(&self) -> Vec2 {
        footprint_center_tiles(self.origin, self.width, self.height)
    }

    /// Footprint centre in world pixels.
    pub fn center_world(&self) -> Vec2 {
        footprint_center_world(self.origin, self.width, self.height)
    }

    pub fn contains(&self, cell: GridPos) -> bool {
        cell.x >= self.origin.x
            && cell.x < self.origin.x + self.width
            && cell.y >= self.origin.y
            && cell.y < self.origin.y + self.height
    }

    /// Every tile the footprint covers, row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.height)
            .flat_map(move |dy| (0..self.width).map(move |dx| self.origin.offset(dx, dy)))
    }

    /// Tiles bordering the footprint, in right, left, bottom, top edge order.
    pub fn perimeter(&self) -> Vec<GridPos> {
        let GridPos { x, y } = self.origin;
        let mut out = Vec::with_capacity(2 * (self.width + self.height) as usize);
        out.extend((0..self.height).map(|dy| GridPos::new(x + self.width, y + dy)));
        out.extend((0..self.height).map(|dy| GridPos::new(x - 1, y + dy)));
        out.extend((0..self.width).map(|dx| GridPos::new(x + dx, y + self.height)));
        out.extend((0..self.width).map(|dx| GridPos::new(x + dx, y - 1)));
        out
    }

    pub fn conveyor(&self) -> Option<&ConveyorState> {
        match &self.payload {
            BuildingPayload::Conveyor(state) => Some(state),
            _ => None,
        }
    }

    pub fn conveyor_mut(&mut self) -> Option<&mut ConveyorState> {
        match &mut self.payload {
            BuildingPayload::Conveyor(state) => Some(state),
            _ => None,
        }
    }

    pub fn generator(&self) -> Option<&GeneratorState> {
        match &self.payload {
            BuildingPayload::Generator(state) => Some(state),
            _ => None,
        }
    }
}

/// Type-specific building state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildingPayload {
    Plain,
    Generator(GeneratorState),
    Turret(TurretState),
    Conveyor(ConveyorState),
}

impl BuildingPayload {
    /// Default payload a building of `kind` is placed with.
    pub fn for_kind(kind: BuildingType) -> Self {
        match kind {
            BuildingType::CoalGenerator
            | BuildingType::SteamGenerator
            | BuildingType::FusionReactor => BuildingPayload::Generator(GeneratorState {
                power_radius: power_radius(kind).unwrap_or(0.0),
                fuel_stored: GENERATOR_INITIAL_FUEL,
            }),
            BuildingType::TurretBase | BuildingType::WallTurret => {
                BuildingPayload::Turret(TurretState::default())
            }
            BuildingType::Conveyor
            | BuildingType::ConveyorJunction
            | BuildingType::ConveyorRouter => BuildingPayload::Conveyor(ConveyorState::default()),
            BuildingType::OreExtractor
            | BuildingType::Pump
            | BuildingType::SolarCollector
            | BuildingType::Smelter
            | BuildingType::Assembler
            | BuildingType::AmmoFactory
            | BuildingType::Refinery
            | BuildingType::DroneHub
            | BuildingType::Storage
            | BuildingType::Wall
            | BuildingType::ResearchLab
            | BuildingType::RepairStation
            | BuildingType::Core => BuildingPayload::Plain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorState {
    /// Radius in tiles.
    pub power_radius: f32,
    pub fuel_stored: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurretState {
    pub barrel: TurretBarrel,
    pub modules: Vec<TurretModule>,
    /// Enemy id fired at most recently.
    pub target: Option<u32>,
    /// Seconds until the next shot is allowed.
    pub cooldown: f32,
    pub ammo_type: Option<ResourceType>,
    pub ammo_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConveyorState {
    /// At most `CONVEYOR_CAPACITY` items.
    pub items: Vec<ConveyorItem>,
}

impl ConveyorState {
    pub fn has_capacity(&self) -> bool {
        self.items.len() < CONVEYOR_CAPACITY
    }

    /// Append an item at the start of the belt. Returns false when full.
    pub fn push(&mut self, resource: ResourceType) -> bool {
        if !self.has_capacity() {
            return false;
        }
        self.items.push(ConveyorItem {
            resource,
            progress: 0.0,
        });
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConveyorItem {
    pub resource: ResourceType,
    /// 0.0 at entry, 1.0 when ready to leave the cell.
    pub progress: f32,
}

// --- Enemies ---

/// Identity and movement traits of an enemy entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyType,
    pub faction: EnemyFaction,
    /// Pixels per second, after wave modifiers.
    pub speed: f32,
    pub behavior: TargetBehavior,
    pub can_fly: bool,
    pub can_phase: bool,
    pub is_boss: bool,
    /// Wave that spawned this enemy, if any.
    pub wave: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub hp: f32,
    pub max_hp: f32,
}

impl Health {
    pub fn full(max_hp: f32) -> Self {
        Self { hp: max_hp, max_hp }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyAttack {
    pub damage: f32,
    /// Pixels.
    pub range: f32,
    /// Seconds between attacks.
    pub cooldown: f32,
    /// Remaining post-attack or stun time. The enemy holds still while > 0.
    pub current_cooldown: f32,
}

/// Resources credited to the ledger when the enemy dies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loot(pub Vec<ResourceStack>);

// --- Projectiles ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub damage: f32,
    pub owner: ProjectileOwner,
    pub piercing: bool,
    pub explosive: bool,
    /// Pixels.
    pub explosion_radius: f32,
    /// Enemy ids already hit. Only populated for piercing projectiles.
    pub hit_enemies: BTreeSet<u32>,
    /// Seconds until expiry.
    pub lifetime: f32,
}

// --- Player ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityState {
    pub cooldown_remaining: f32,
    pub active: bool,
    pub active_remaining: f32,
}

impl AbilityState {
    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining <= 0.0 && !self.active
    }
}

/// The player-controlled unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// World pixels.
    pub position: Vec2,
    pub velocity: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub energy: f32,
    pub max_energy: f32,
    pub current_weapon: WeaponType,
    pub weapons: Vec<WeaponType>,
    /// Abilities shown on the player's bar.
    pub abilities: Vec<AbilityType>,
    pub ability_states: BTreeMap<AbilityType, AbilityState>,
    pub is_dead: bool,
    pub respawn_timer: f32,
    /// Dash and respawn grace period.
    pub invincible_timer: f32,
    /// Base multipliers. Overdrive is applied on top, see `damage_multiplier()`.
    pub base_damage_multiplier: f32,
    pub base_speed_multiplier: f32,
    /// Build mode: firing is disabled.
    pub commander_mode: bool,
    /// Seconds until the current weapon may fire again.
    pub fire_cooldown: f32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            energy: PLAYER_MAX_ENERGY,
            max_energy: PLAYER_MAX_ENERGY,
            current_weapon: WeaponType::BasicRifle,
            weapons: vec![WeaponType::BasicRifle],
            abilities: vec![AbilityType::Dash],
            ability_states: AbilityType::ALL
                .iter()
                .map(|&a| (a, AbilityState::default()))
                .collect(),
            is_dead: false,
            respawn_timer: 0.0,
            invincible_timer: 0.0,
            base_damage_multiplier: 1.0,
            base_speed_multiplier: 1.0,
            commander_mode: false,
            fire_cooldown: 0.0,
        }
    }

    pub fn ability(&self, ability: AbilityType) -> AbilityState {
        self.ability_states
            .get(&ability)
            .copied()
            .unwrap_or_default()
    }

    pub fn ability_mut(&mut self, ability: AbilityType) -> &mut AbilityState {
        self.ability_states.entry(ability).or_default()
    }

    fn ability_active(&self, ability: AbilityType) -> bool {
        self.ability(ability).active
    }

    /// True during dash/respawn grace or while the shield is up.
    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0.0 || self.ability_active(AbilityType::Shield)
    }

    pub fn damage_multiplier(&self) -> f32 {
        if self.ability_active(AbilityType::Overdrive) {
            self.base_damage_multiplier * OVERDRIVE_MULTIPLIER
        } else {
            self.base_damage_multiplier
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        if self.ability_active(AbilityType::Overdrive) {
            self.base_speed_multiplier * OVERDRIVE_MULTIPLIER
        } else {
            self.base_speed_multiplier
        }
    }

    /// Whether the player can be targeted and damaged right now.
    pub fn is_vulnerable(&self) -> bool {
        !self.is_dead && !self.is_invincible()
    }
}

// --- Progression and UI state ---

/// Unlock sets consumed by an external progression layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unlocks {
    pub buildings: BTreeSet<BuildingType>,
    pub weapons: BTreeSet<WeaponType>,
    pub abilities: BTreeSet<AbilityType>,
}

impl Unlocks {
    pub fn starting() -> Self {
        Self {
            buildings: [
                BuildingType::OreExtractor,
                BuildingType::Smelter,
                BuildingType::Conveyor,
                BuildingType::Storage,
                BuildingType::Wall,
                BuildingType::CoalGenerator,
            ]
            .into_iter()
            .collect(),
            weapons: [WeaponType::BasicRifle].into_iter().collect(),
            abilities: [AbilityType::Dash].into_iter().collect(),
        }
    }
}

/// Transient input, set by commands and read by the player system.
/// Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Aim point in world pixels.
    pub aim: Vec2,
    pub fire_held: bool,
}

impl InputState {
    /// Unit-length (or zero) movement direction. y grows downward.
    pub fn move_dir(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// Building placement cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementSelection {
    pub selected: Option<BuildingType>,
    pub direction: Direction,
    pub hovered: Option<GridPos>,
}
