//! Building update pass.
//!
//! Runs in three steps: power recompute, per-building logic dispatched on
//! the building type, then conveyor item transfer. Buildings that need
//! power and have none skip their logic for the update.

use forgeline_core::definitions::building_def;
use forgeline_core::enums::BuildingType;

use super::{conveyor, extraction, generator, power, production, repair, turret};
use crate::world::GameWorld;

pub fn run(world: &mut GameWorld, dt: f32) {
    // 1. Power
    power::run(world);

    // 2. Per-building logic
    for id in world.buildings.ids() {
        let Some(building) = world.buildings.get(id) else {
            continue;
        };
        let kind = building.kind;
        if building_def(kind).power_required && !building.powered {
            continue;
        }

        match kind {
            BuildingType::OreExtractor => extraction::update(world, id, dt),
            BuildingType::Smelter
            | BuildingType::Assembler
            | BuildingType::AmmoFactory
            | BuildingType::Refinery => production::update(world, id, dt),
            BuildingType::CoalGenerator | BuildingType::SteamGenerator => {
                generator::update(world, id, dt)
            }
            BuildingType::TurretBase | BuildingType::WallTurret => turret::update(world, id, dt),
            BuildingType::RepairStation => repair::update(world, id, dt),
            BuildingType::Conveyor
            | BuildingType::ConveyorJunction
            | BuildingType::ConveyorRouter => conveyor::advance(world, id, dt),
            BuildingType::Pump
            | BuildingType::SolarCollector
            | BuildingType::DroneHub
            | BuildingType::Storage
            | BuildingType::Wall
            | BuildingType::FusionReactor
            | BuildingType::ResearchLab
            | BuildingType::Core => {}
        }
    }

    // 3. Conveyor transfer, after every local update
    conveyor::transfer(world);
}
