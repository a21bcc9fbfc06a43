//! Static definition tables for buildings, weapons and recipes.
//!
//! Every table is an exhaustive `match`, so adding a variant to an enum
//! fails to compile until its definition exists here.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::resources::ResourceStack;

use ResourceType::*;

// Expands to a struct literal so `&[stack!(..)]` promotes to `'static`.
macro_rules! stack {
    ($resource:expr, $amount:expr) => {
        ResourceStack {
            resource: $resource,
            amount: $amount,
        }
    };
}

/// Fixed properties of a building type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingDef {
    pub name: &'static str,
    /// Footprint in tiles.
    pub width: i32,
    pub height: i32,
    pub max_hp: f32,
    pub cost: &'static [ResourceStack],
    /// Whether the building skips its update while unpowered.
    pub power_required: bool,
    pub category: BuildingCategory,
}

#[allow(clippy::too_many_arguments)]
const fn def(
    name: &'static str,
    width: i32,
    height: i32,
    max_hp: f32,
    cost: &'static [ResourceStack],
    power_required: bool,
    category: BuildingCategory,
) -> BuildingDef {
    BuildingDef {
        name,
        width,
        height,
        max_hp,
        cost,
        power_required,
        category,
    }
}

pub fn building_def(kind: BuildingType) -> BuildingDef {
    use BuildingCategory as C;

    match kind {
        BuildingType::Core => def("Core", 3, 3, 1000.0, &[], false, C::Utility),
        BuildingType::OreExtractor => def(
            "Ore Extractor",
            2,
            2,
            100.0,
            &[stack!(IronIngot, 10)],
            true,
            C::Extraction,
        ),
        BuildingType::Pump => def(
            "Pump",
            2,
            2,
            80.0,
            &[stack!(IronIngot, 8), stack!(CopperWire, 5)],
            true,
            C::Extraction,
        ),
        BuildingType::SolarCollector => def(
            "Solar Collector",
            2,
            2,
            50.0,
            &[stack!(Glass, 10), stack!(CopperWire, 5)],
            false,
            C::Power,
        ),
        BuildingType::Smelter => def(
            "Smelter",
            2,
            2,
            150.0,
            &[stack!(Stone, 20), stack!(IronIngot, 5)],
            true,
            C::Production,
        ),
        BuildingType::Assembler => def(
            "Assembler",
            3,
            3,
            200.0,
            &[stack!(IronIngot, 20), stack!(CopperWire, 10)],
            true,
            C::Production,
        ),
        BuildingType::AmmoFactory => def(
            "Ammo Factory",
            2,
            2,
            120.0,
            &[stack!(IronIngot, 15), stack!(Circuits, 5)],
            true,
            C::Production,
        ),
        BuildingType::Refinery => def(
            "Refinery",
            3,
            3,
            250.0,
            &[stack!(Steel, 30), stack!(Circuits, 15)],
            true,
            C::Production,
        ),
        BuildingType::Conveyor => def(
            "Conveyor",
            1,
            1,
            20.0,
            &[stack!(IronIngot, 1)],
            false,
            C::Logistics,
        ),
        BuildingType::ConveyorJunction => def(
            "Junction",
            1,
            1,
            25.0,
            &[stack!(IronIngot, 2)],
            false,
            C::Logistics,
        ),
        BuildingType::ConveyorRouter => def(
            "Router",
            1,
            1,
            25.0,
            &[stack!(IronIngot, 2), stack!(CopperWire, 1)],
            false,
            C::Logistics,
        ),
        BuildingType::DroneHub => def(
            "Drone Hub",
            2,
            2,
            150.0,
            &[stack!(Steel, 20), stack!(Circuits, 10)],
            true,
            C::Logistics,
        ),
        BuildingType::Storage => def(
            "Storage",
            2,
            2,
            100.0,
            &[stack!(IronIngot, 15)],
            false,
            C::Logistics,
        ),
        BuildingType::TurretBase => def(
            "Turret",
            2,
            2,
            200.0,
            &[stack!(IronIngot, 20), stack!(CopperWire, 10)],
            true,
            C::Defense,
        ),
        BuildingType::Wall => def("Wall", 1, 1, 500.0, &[stack!(Stone, 5)], false, C::Defense),
        BuildingType::WallTurret => def(
            "Wall Turret",
            1,
            1,
            300.0,
            &[stack!(Steel, 10), stack!(Circuits, 3)],
            true,
            C::Defense,
        ),
        BuildingType::CoalGenerator => def(
            "Coal Generator",
            2,
            2,
            120.0,
            &[stack!(IronIngot, 15), stack!(Stone, 10)],
            false,
            C::Power,
        ),
        BuildingType::SteamGenerator => def(
            "Steam Generator",
            3,
            3,
            200.0,
            &[stack!(Steel, 25), stack!(CopperWire, 15)],
            false,
            C::Power,
        ),
        BuildingType::FusionReactor => def(
            "Fusion Reactor",
            4,
            4,
            500.0,
            &[stack!(Steel, 100), stack!(Circuits, 50), stack!(DarkMatter, 10)],
            false,
            C::Power,
        ),
        BuildingType::ResearchLab => def(
            "Research Lab",
            3,
            3,
            150.0,
            &[stack!(IronIngot, 30), stack!(Circuits, 20)],
            true,
            C::Utility,
        ),
        BuildingType::RepairStation => def(
            "Repair Station",
            2,
            2,
            100.0,
            &[stack!(IronIngot, 20), stack!(Circuits, 10)],
            true,
            C::Utility,
        ),
    }
}

/// Radius (tiles, centre to centre) a power source energises.
/// `None` for buildings that are not power sources.
pub fn power_radius(kind: BuildingType) -> Option<f32> {
    match kind {
        BuildingType::Core => Some(CORE_POWER_RADIUS),
        BuildingType::CoalGenerator => Some(COAL_GENERATOR_RADIUS),
        BuildingType::SteamGenerator => Some(STEAM_GENERATOR_RADIUS),
        BuildingType::FusionReactor => Some(FUSION_REACTOR_RADIUS),
        _ => None,
    }
}

/// Whether a power source needs stored fuel to emit power.
pub fn requires_fuel(kind: BuildingType) -> bool {
    matches!(
        kind,
        BuildingType::CoalGenerator | BuildingType::SteamGenerator
    )
}

/// Player weapon stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponDef {
    pub damage: f32,
    /// Shots per second.
    pub fire_rate: f32,
    /// Range in pixels; projectile lifetime is `range / projectile_speed`.
    pub range: f32,
    pub projectile_speed: f32,
    /// Total spread cone in degrees.
    pub spread_deg: f32,
    pub projectile_count: u32,
    pub piercing: bool,
    pub explosive: bool,
    pub explosion_radius: f32,
}

impl WeaponDef {
    /// Seconds between shots.
    pub fn fire_interval(&self) -> f32 {
        1.0 / self.fire_rate
    }

    pub fn projectile_lifetime(&self) -> f32 {
        self.range / self.projectile_speed
    }
}

pub fn weapon_def(weapon: WeaponType) -> WeaponDef {
    let base = WeaponDef {
        damage: 10.0,
        fire_rate: 5.0,
        range: 300.0,
        projectile_speed: 800.0,
        spread_deg: 2.0,
        projectile_count: 1,
        piercing: false,
        explosive: false,
        explosion_radius: 0.0,
    };
    match weapon {
        WeaponType::BasicRifle => base,
        WeaponType::Shotgun => WeaponDef {
            damage: 8.0,
            fire_rate: 1.5,
            range: 150.0,
            projectile_speed: 600.0,
            spread_deg: 20.0,
            projectile_count: 6,
            ..base
        },
        WeaponType::Sniper => WeaponDef {
            damage: 80.0,
            fire_rate: 0.5,
            range: 600.0,
            projectile_speed: 1500.0,
            spread_deg: 0.0,
            piercing: true,
            ..base
        },
        WeaponType::Flamethrower => WeaponDef {
            damage: 5.0,
            fire_rate: 20.0,
            range: 120.0,
            projectile_speed: 400.0,
            spread_deg: 15.0,
            piercing: true,
            ..base
        },
        WeaponType::RocketLauncher => WeaponDef {
            damage: 100.0,
            fire_rate: 0.8,
            range: 400.0,
            projectile_speed: 500.0,
            spread_deg: 0.0,
            explosive: true,
            explosion_radius: 60.0,
            ..base
        },
        WeaponType::PlasmaCannon => WeaponDef {
            damage: 50.0,
            fire_rate: 2.0,
            range: 350.0,
            projectile_speed: 700.0,
            spread_deg: 0.0,
            piercing: true,
            ..base
        },
        WeaponType::VoidBeam => WeaponDef {
            damage: 200.0,
            fire_rate: 0.3,
            range: 500.0,
            projectile_speed: 2000.0,
            spread_deg: 0.0,
            piercing: true,
            explosive: true,
            explosion_radius: 40.0,
            ..base
        },
    }
}

/// Ability timings in seconds. `duration` is zero for instant abilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityDef {
    pub cooldown: f32,
    pub duration: f32,
}

pub fn ability_def(ability: AbilityType) -> AbilityDef {
    let (cooldown, duration) = match ability {
        AbilityType::Dash => (1.0, 0.0),
        AbilityType::Shield => (10.0, 3.0),
        AbilityType::Overdrive => (15.0, 5.0),
        AbilityType::Emp => (20.0, 0.0),
        AbilityType::TurretBoost => (30.0, 10.0),
    };
    AbilityDef { cooldown, duration }
}

/// Production recipes a crafting building can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeId {
    SmeltIron,
    SmeltCopper,
    SmeltGlass,
    ForgeSteel,
    DrawWire,
    AssembleCircuits,
    RefineSilicon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeDef {
    pub inputs: &'static [ResourceStack],
    pub outputs: &'static [ResourceStack],
    /// Seconds of powered operation per craft.
    pub craft_time: f32,
}

const fn recipe(
    inputs: &'static [ResourceStack],
    outputs: &'static [ResourceStack],
    craft_time: f32,
) -> RecipeDef {
    RecipeDef {
        inputs,
        outputs,
        craft_time,
    }
}

pub fn recipe_def(id: RecipeId) -> RecipeDef {
    match id {
        RecipeId::SmeltIron => recipe(&[stack!(IronOre, 1)], &[stack!(IronIngot, 1)], 2.0),
        RecipeId::SmeltCopper => recipe(
            &[stack!(CopperOre, 1)],
            &[stack!(CopperIngot, 1)],
            2.0,
        ),
        RecipeId::SmeltGlass => recipe(&[stack!(Stone, 2)], &[stack!(Glass, 1)], 3.0),
        RecipeId::ForgeSteel => recipe(
            &[stack!(IronIngot, 2), stack!(Coal, 1)],
            &[stack!(Steel, 1)],
            4.0,
        ),
        RecipeId::DrawWire => recipe(
            &[stack!(CopperIngot, 1)],
            &[stack!(CopperWire, 2)],
            1.0,
        ),
        RecipeId::AssembleCircuits => recipe(
            &[stack!(CopperWire, 3), stack!(IronIngot, 1)],
            &[stack!(Circuits, 1)],
            5.0,
        ),
        RecipeId::RefineSilicon => recipe(
            &[stack!(Stone, 3), stack!(Coal, 1)],
            &[stack!(Silicon, 1)],
            6.0,
        ),
    }
}

/// Recipes a building type may run. Empty for non-crafting buildings.
pub fn recipes_for(kind: BuildingType) -> &'static [RecipeId] {
    match kind {
        BuildingType::Smelter => &[
            RecipeId::SmeltIron,
            RecipeId::SmeltCopper,
            RecipeId::SmeltGlass,
            RecipeId::ForgeSteel,
        ],
        BuildingType::Assembler => &[RecipeId::DrawWire, RecipeId::AssembleCircuits],
        BuildingType::Refinery => &[RecipeId::RefineSilicon],
        _ => &[],
    }
}

/// Whether a building runs the crafting update.
pub fn is_production(kind: BuildingType) -> bool {
    building_def(kind).category == BuildingCategory::Production
}

/// Whether items arriving on a conveyor are appended to this building's
/// input storage.
pub fn accepts_conveyor_input(kind: BuildingType) -> bool {
    is_production(kind)
}
