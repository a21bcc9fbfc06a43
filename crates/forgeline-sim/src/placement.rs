//! Building placement and removal.
//!
//! Gameplay failures are not errors: `can_place_building` and
//! `place_building` answer with a `bool`, `remove_building` is a silent
//! no-op for the core or an unknown id. `check_placement` reports why a
//! placement would fail for callers that want to show a reason.

use tracing::{debug, trace};

use forgeline_core::constants::REFUND_RATIO;
use forgeline_core::components::Building;
use forgeline_core::definitions::building_def;
use forgeline_core::enums::{BuildingType, Direction, TileType};
use forgeline_core::events::GameEvent;
use forgeline_core::resources::ResourceStack;
use forgeline_core::types::GridPos;

use crate::world::GameWorld;

/// Why a building cannot go where it was asked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Footprint extends past the map edge.
    OutOfBounds,
    NotBuildable(GridPos),
    Occupied(GridPos),
    CannotAfford,
    /// Extractors need a deposit tile under their origin.
    RequiresDeposit,
    /// Pumps need a water tile under their origin.
    RequiresWater,
    /// Only one core may stand.
    CoreExists,
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "footprint is outside the map"),
            PlacementError::NotBuildable(p) => write!(f, "tile ({}, {}) is not buildable", p.x, p.y),
            PlacementError::Occupied(p) => write!(f, "tile ({}, {}) is occupied", p.x, p.y),
            PlacementError::CannotAfford => write!(f, "not enough resources"),
            PlacementError::RequiresDeposit => write!(f, "extractor must sit on a deposit"),
            PlacementError::RequiresWater => write!(f, "pump must sit on water"),
            PlacementError::CoreExists => write!(f, "a core already stands"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Validate a placement without touching the world. Checks run in order:
/// bounds, per-tile buildability and overlap, cost, type-specific rules.
pub fn check_placement(
    world: &GameWorld,
    kind: BuildingType,
    origin: GridPos,
) -> Result<(), PlacementError> {
    let def = building_def(kind);

    if !world.grid.rect_in_bounds(origin, def.width, def.height) {
        return Err(PlacementError::OutOfBounds);
    }

    for dy in 0..def.height {
        for dx in 0..def.width {
            let cell = origin.offset(dx, dy);
            if !world.grid.is_buildable(cell) {
                return Err(PlacementError::NotBuildable(cell));
            }
            if world.buildings.is_occupied(cell) {
                return Err(PlacementError::Occupied(cell));
            }
        }
    }

    if !world.resources.can_afford(def.cost) {
        return Err(PlacementError::CannotAfford);
    }

    let origin_tile = world.grid.kind_at(origin);
    match kind {
        BuildingType::OreExtractor if !origin_tile.is_some_and(TileType::is_deposit) => {
            Err(PlacementError::RequiresDeposit)
        }
        BuildingType::Pump if origin_tile != Some(TileType::Water) => {
            Err(PlacementError::RequiresWater)
        }
        BuildingType::Core if world.buildings.core().is_some() => Err(PlacementError::CoreExists),
        _ => Ok(()),
    }
}

pub fn can_place_building(world: &GameWorld, kind: BuildingType, origin: GridPos) -> bool {
    check_placement(world, kind, origin).is_ok()
}

/// Validate, debit the cost and insert a new building. Returns the new id.
pub fn try_place_building(
    world: &mut GameWorld,
    kind: BuildingType,
    origin: GridPos,
    direction: Direction,
) -> Result<u32, PlacementError> {
    check_placement(world, kind, origin)?;
    if !world.resources.try_debit(building_def(kind).cost) {
        return Err(PlacementError::CannotAfford);
    }

    let id = world.alloc_id();
    world
        .buildings
        .insert(Building::new(id, kind, origin, direction));
    world.emit(GameEvent::BuildingPlaced {
        building_id: id,
        kind,
        x: origin.x,
        y: origin.y,
    });
    debug!(building_id = id, ?kind, x = origin.x, y = origin.y, "building placed");
    Ok(id)
}

pub fn place_building(
    world: &mut GameWorld,
    kind: BuildingType,
    origin: GridPos,
    direction: Direction,
) -> bool {
    match try_place_building(world, kind, origin, direction) {
        Ok(_) => true,
        Err(reason) => {
            trace!(?kind, x = origin.x, y = origin.y, %reason, "placement rejected");
            false
        }
    }
}

/// Resources returned when a building of `kind` is removed: half the cost,
/// floored per resource.
pub fn refund_for(kind: BuildingType) -> Vec<ResourceStack> {
    building_def(kind)
        .cost
        .iter()
        .map(|c| ResourceStack::new(c.resource, (c.amount as f32 * REFUND_RATIO).floor() as u32))
        .collect()
}

/// Remove a building and refund part of its cost. No-op for the core and
/// for unknown ids.
pub fn remove_building(world: &mut GameWorld, building_id: u32) {
    let Some(kind) = world.buildings.get(building_id).map(|b| b.kind) else {
        return;
    };
    if kind == BuildingType::Core {
        return;
    }

    world.buildings.remove(building_id);
    world.resources.credit_all(&refund_for(kind));
    world.emit(GameEvent::BuildingRemoved { building_id, kind });
    debug!(building_id, ?kind, "building removed");
}
