//! Power system: recomputes every building's `powered` flag from scratch.
//!
//! A building is powered when its footprint centre lies within the radius
//! of at least one active source. Sources are the core (always active),
//! fuelled coal/steam generators and fusion reactors (fuel-less).
//! O(sources × buildings) per update.

use forgeline_core::definitions::{power_radius, requires_fuel};
use forgeline_core::types::Vec2;

use crate::world::GameWorld;

/// An active power source: centre in tile units and radius in tiles.
#[derive(Debug, Clone, Copy)]
pub struct PowerSource {
    pub center: Vec2,
    pub radius: f32,
}

/// Collect every source currently emitting power.
pub fn active_sources(world: &GameWorld) -> Vec<PowerSource> {
    world
        .buildings
        .iter()
        .filter_map(|b| {
            let radius = power_radius(b.kind)?;
            if requires_fuel(b.kind) && b.generator().map_or(true, |g| g.fuel_stored <= 0.0) {
                return None;
            }
            Some(PowerSource {
                center: b.center_tiles(),
                radius,
            })
        })
        .collect()
}

pub fn run(world: &mut GameWorld) {
    let sources = active_sources(world);

    for building in world.buildings.iter_mut() {
        let center = building.center_tiles();
        building.powered = sources
            .iter()
            .any(|s| s.center.distance(center) <= s.radius);
    }
}
