//! Fuel burn and automatic refuelling for coal and steam generators.

use forgeline_core::components::BuildingPayload;
use forgeline_core::constants::*;
use forgeline_core::enums::ResourceType;

use crate::world::GameWorld;

pub fn update(world: &mut GameWorld, id: u32, dt: f32) {
    let Some(building) = world.buildings.get_mut(id) else {
        return;
    };
    let BuildingPayload::Generator(generator) = &mut building.payload else {
        return;
    };

    if generator.fuel_stored > 0.0 {
        generator.fuel_stored = (generator.fuel_stored - GENERATOR_FUEL_BURN_RATE * dt).max(0.0);
    }

    // One unit of coal per update at most.
    if generator.fuel_stored < GENERATOR_REFUEL_THRESHOLD
        && world.resources.try_debit_one(ResourceType::Coal, 1)
    {
        generator.fuel_stored += FUEL_PER_COAL;
    }
}
