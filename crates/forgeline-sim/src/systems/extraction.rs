//! Ore extractor logic.

use forgeline_core::components::Building;
use forgeline_core::constants::EXTRACTOR_BASE_TIME;
use forgeline_core::enums::{ResourceType, TileType};
use forgeline_core::resources::add_to_stacks;
use forgeline_core::types::GridPos;
use forgeline_terrain::TileGrid;

use crate::world::GameWorld;

/// Deposit kind under the footprint and how many tiles of it there are.
/// The kind is that of the first deposit tile in row order; other deposit
/// kinds under the same footprint are ignored.
pub fn deposit_under(grid: &TileGrid, building: &Building) -> Option<(TileType, u32)> {
    let mut found: Option<(TileType, u32)> = None;
    for cell in building.cells() {
        let Some(kind) = grid.kind_at(cell).filter(|k| k.is_deposit()) else {
            continue;
        };
        match &mut found {
            None => found = Some((kind, 1)),
            Some((first, count)) if *first == kind => *count += 1,
            Some(_) => {}
        }
    }
    found
}

/// Seconds per extracted unit with `matching` deposit tiles underneath.
pub fn extract_time(matching: u32) -> f32 {
    EXTRACTOR_BASE_TIME / matching as f32
}

pub fn update(world: &mut GameWorld, id: u32, dt: f32) {
    let Some(building) = world.buildings.get(id) else {
        return;
    };
    let Some((deposit, count)) = deposit_under(&world.grid, building) else {
        return;
    };
    let Some(resource) = deposit.deposit_resource() else {
        return;
    };
    let perimeter = building.perimeter();

    let Some(building) = world.buildings.get_mut(id) else {
        return;
    };
    let period = extract_time(count);
    building.craft_progress += dt;
    let mut units = 0;
    while building.craft_progress >= period {
        building.craft_progress -= period;
        units += 1;
    }

    for _ in 0..units {
        if push_to_adjacent_conveyor(world, &perimeter, resource) {
            continue;
        }
        if let Some(building) = world.buildings.get_mut(id) {
            add_to_stacks(&mut building.output_storage, resource, 1);
        }
    }
}

/// Hand one unit to the first conveyor bordering the footprint. Returns
/// false when there is no such conveyor or it is full.
pub(crate) fn push_to_adjacent_conveyor(
    world: &mut GameWorld,
    perimeter: &[GridPos],
    resource: ResourceType,
) -> bool {
    let conveyor_id = perimeter.iter().find_map(|&cell| {
        world
            .buildings
            .at(cell)
            .filter(|b| b.kind.is_conveyor() && b.origin == cell)
            .map(|b| b.id)
    });

    conveyor_id
        .and_then(|cid| world.buildings.get_mut(cid))
        .and_then(|b| b.conveyor_mut())
        .is_some_and(|belt| belt.push(resource))
}
