//! Conveyor belts: item advance and end-of-belt transfer.
//!
//! Items advance during the per-building pass. Transfer runs once, after
//! every building has updated, so no item crosses two cells in one update.

use tracing::trace;

use forgeline_core::constants::CONVEYOR_SPEED;
use forgeline_core::definitions::accepts_conveyor_input;
use forgeline_core::enums::ResourceType;
use forgeline_core::resources::add_to_stacks;
use forgeline_core::types::GridPos;

use crate::world::GameWorld;

pub fn advance(world: &mut GameWorld, id: u32, dt: f32) {
    let Some(belt) = world.buildings.get_mut(id).and_then(|b| b.conveyor_mut()) else {
        return;
    };
    for item in &mut belt.items {
        item.progress = (item.progress + CONVEYOR_SPEED * dt).min(1.0);
    }
}

/// Hand every finished item to whatever sits in the next cell.
pub fn transfer(world: &mut GameWorld) {
    for id in world.buildings.ids() {
        let Some(building) = world.buildings.get_mut(id) else {
            continue;
        };
        let (dx, dy) = building.direction.offset();
        let next = building.origin.offset(dx, dy);
        let Some(belt) = building.conveyor_mut() else {
            continue;
        };
        if !belt.items.iter().any(|item| item.progress >= 1.0) {
            continue;
        }

        let items = std::mem::take(&mut belt.items);
        let mut kept = Vec::with_capacity(items.len());
        for item in items {
            if item.progress >= 1.0 && deliver(world, next, item.resource) {
                continue;
            }
            kept.push(item);
        }

        if let Some(belt) = world.buildings.get_mut(id).and_then(|b| b.conveyor_mut()) {
            belt.items = kept;
        }
    }
}

/// Deliver one unit into `cell`. Returns false when the item must wait.
fn deliver(world: &mut GameWorld, cell: GridPos, resource: ResourceType) -> bool {
    let Some(target_id) = world.buildings.id_at(cell) else {
        // Nothing there: the item drops straight into the ledger.
        world.resources.credit(resource, 1);
        return true;
    };
    let Some(target) = world.buildings.get_mut(target_id) else {
        return false;
    };

    if let Some(belt) = target.conveyor_mut() {
        return belt.push(resource);
    }
    if target.kind.is_item_sink() {
        world.resources.credit(resource, 1);
        return true;
    }
    if accepts_conveyor_input(target.kind) {
        add_to_stacks(&mut target.input_storage, resource, 1);
        return true;
    }

    trace!(building_id = target_id, kind = ?target.kind, "conveyor blocked");
    false
}
