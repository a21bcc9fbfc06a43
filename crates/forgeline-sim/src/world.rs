//! World state: the single mutable context every system operates on.
//!
//! Buildings are stored in a registry keyed by id with a tile occupancy
//! index, NOT as ECS entities. Enemies and projectiles live in the hecs
//! world.

use std::collections::{BTreeMap, HashMap};

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use forgeline_core::components::{Building, InputState, PlacementSelection, Player, Unlocks};
use forgeline_core::enums::{BuildingType, GamePhase};
use forgeline_core::events::GameEvent;
use forgeline_core::resources::ResourceLedger;
use forgeline_core::types::{Camera, GridPos, SimTime};
use forgeline_core::waves::ActiveWave;
use forgeline_terrain::TileGrid;

/// Placed buildings plus an index from occupied tile to building id.
///
/// Iteration is in id order, which is placement order.
#[derive(Debug, Clone, Default)]
pub struct Buildings {
    by_id: BTreeMap<u32, Building>,
    occupancy: HashMap<GridPos, u32>,
}

impl Buildings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from a list of buildings (e.g. after loading).
    pub fn from_buildings(buildings: impl IntoIterator<Item = Building>) -> Self {
        let mut registry = Self::new();
        for building in buildings {
            registry.insert(building);
        }
        registry
    }

    /// Insert a building and claim its footprint. The caller guarantees the
    /// footprint is free.
    pub fn insert(&mut self, building: Building) {
        for cell in building.cells() {
            self.occupancy.insert(cell, building.id);
        }
        self.by_id.insert(building.id, building);
    }

    /// Remove a building and release its footprint.
    pub fn remove(&mut self, id: u32) -> Option<Building> {
        let building = self.by_id.remove(&id)?;
        for cell in building.cells() {
            self.occupancy.remove(&cell);
        }
        Some(building)
    }

    pub fn get(&self, id: u32) -> Option<&Building> {
        self.by_id.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Building> {
        self.by_id.get_mut(&id)
    }

    /// Id of the building whose footprint covers `cell`.
    pub fn id_at(&self, cell: GridPos) -> Option<u32> {
        self.occupancy.get(&cell).copied()
    }

    /// Building whose footprint covers `cell`.
    pub fn at(&self, cell: GridPos) -> Option<&Building> {
        self.id_at(cell).and_then(|id| self.get(id))
    }

    pub fn is_occupied(&self, cell: GridPos) -> bool {
        self.occupancy.contains_key(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Building> + '_ {
        self.by_id.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Building> + '_ {
        self.by_id.values_mut()
    }

    /// Snapshot of the current ids, for passes that mutate while iterating.
    pub fn ids(&self) -> Vec<u32> {
        self.by_id.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// The first core building, if one stands.
    pub fn core(&self) -> Option<&Building> {
        self.iter().find(|b| b.kind == BuildingType::Core)
    }
}

/// The complete simulation state.
pub struct GameWorld {
    /// Seed the RNG was created from.
    pub seed: u64,
    pub time: SimTime,
    pub phase: GamePhase,
    /// Multiplier applied to every frame delta.
    pub game_speed: f32,
    pub grid: TileGrid,
    pub camera: Camera,
    pub resources: ResourceLedger,
    pub buildings: Buildings,
    pub player: Player,
    /// Enemies and projectiles.
    pub entities: World,
    pub active_wave: Option<ActiveWave>,
    pub waves_completed: u32,
    /// Number given to the next started wave.
    pub next_wave_id: u32,
    pub unlocks: Unlocks,
    /// Buildable radius for progression layers.
    pub base_radius: u32,
    pub rng: ChaCha8Rng,

    // --- Transient, never persisted ---
    pub input: InputState,
    pub selection: PlacementSelection,
    /// Events accumulated since the last snapshot.
    pub events: Vec<GameEvent>,
    pub despawn_buffer: Vec<Entity>,

    next_id: u32,
}

impl GameWorld {
    /// A world around `grid` with nothing placed and an empty ledger.
    pub fn new(seed: u64, grid: TileGrid, player: Player, rng: ChaCha8Rng) -> Self {
        Self {
            seed,
            time: SimTime::default(),
            phase: GamePhase::Active,
            game_speed: 1.0,
            grid,
            camera: Camera::default(),
            resources: ResourceLedger::new(),
            buildings: Buildings::new(),
            player,
            entities: World::new(),
            active_wave: None,
            waves_completed: 0,
            next_wave_id: 1,
            unlocks: Unlocks::starting(),
            base_radius: 0,
            rng,
            input: InputState::default(),
            selection: PlacementSelection::default(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a world-unique id for a building, enemy or projectile.
    pub fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Id the next allocation will return.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub(crate) fn set_next_id(&mut self, next_id: u32) {
        self.next_id = next_id;
    }

    /// Accepting commands and advancing time (not paused, not defeated).
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
