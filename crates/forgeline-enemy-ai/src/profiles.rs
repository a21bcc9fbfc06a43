//! Archetype-specific enemy profiles.
//!
//! Consolidates the per-type stats an enemy is spawned with.

use forgeline_core::enums::{EnemyFaction, EnemyType, ResourceType, TargetBehavior};
use forgeline_core::resources::ResourceStack;

macro_rules! loot {
    ($($resource:ident: $amount:expr),* $(,)?) => {
        &[$(ResourceStack {
            resource: ResourceType::$resource,
            amount: $amount,
        }),*]
    };
}

/// Spawn stats for an enemy type, before wave modifiers.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    pub name: &'static str,
    pub faction: EnemyFaction,
    pub hp: f32,
    /// Damage per attack.
    pub damage: f32,
    /// Pixels per second.
    pub speed: f32,
    /// Pixels. The enemy stops and attacks once its target is this close.
    pub attack_range: f32,
    pub behavior: TargetBehavior,
    pub can_fly: bool,
    /// Passes through walls.
    pub can_phase: bool,
    pub is_boss: bool,
    /// Credited to the ledger on death.
    pub loot: &'static [ResourceStack],
}

/// Get the profile for a given enemy type.
pub fn get_profile(kind: EnemyType) -> EnemyProfile {
    use EnemyFaction::*;
    use TargetBehavior as B;

    let base = EnemyProfile {
        name: "",
        faction: Hive,
        hp: 0.0,
        damage: 0.0,
        speed: 0.0,
        attack_range: 0.0,
        behavior: B::Nearest,
        can_fly: false,
        can_phase: false,
        is_boss: false,
        loot: &[],
    };

    match kind {
        // --- Hive ---
        EnemyType::Swarmer => EnemyProfile {
            name: "Swarmer",
            hp: 20.0,
            damage: 5.0,
            speed: 100.0,
            attack_range: 20.0,
            loot: loot![Biomass: 1],
            ..base
        },
        EnemyType::Spitter => EnemyProfile {
            name: "Spitter",
            hp: 40.0,
            damage: 15.0,
            speed: 60.0,
            attack_range: 150.0,
            behavior: B::Turrets,
            loot: loot![Biomass: 2],
            ..base
        },
        EnemyType::Brute => EnemyProfile {
            name: "Brute",
            hp: 200.0,
            damage: 30.0,
            speed: 40.0,
            attack_range: 30.0,
            behavior: B::Core,
            loot: loot![Biomass: 5],
            ..base
        },
        EnemyType::Queen => EnemyProfile {
            name: "Hive Queen",
            hp: 1000.0,
            damage: 50.0,
            speed: 30.0,
            attack_range: 40.0,
            behavior: B::Smart,
            is_boss: true,
            loot: loot![Biomass: 20, CrystalShards: 5],
            ..base
        },
        // --- Machines ---
        EnemyType::Drone => EnemyProfile {
            name: "Drone",
            faction: Machines,
            hp: 30.0,
            damage: 10.0,
            speed: 120.0,
            attack_range: 100.0,
            behavior: B::Generators,
            can_fly: true,
            loot: loot![Circuits: 1],
            ..base
        },
        EnemyType::Walker => EnemyProfile {
            name: "Walker",
            faction: Machines,
            hp: 80.0,
            damage: 20.0,
            speed: 70.0,
            attack_range: 80.0,
            loot: loot![IronIngot: 2, Circuits: 1],
            ..base
        },
        EnemyType::Tank => EnemyProfile {
            name: "Tank",
            faction: Machines,
            hp: 400.0,
            damage: 40.0,
            speed: 30.0,
            attack_range: 120.0,
            behavior: B::Core,
            loot: loot![Steel: 3, Circuits: 2],
            ..base
        },
        EnemyType::Overseer => EnemyProfile {
            name: "Overseer",
            faction: Machines,
            hp: 800.0,
            damage: 30.0,
            speed: 50.0,
            attack_range: 200.0,
            behavior: B::Smart,
            can_fly: true,
            is_boss: true,
            loot: loot![Steel: 10, Circuits: 10, DarkMatter: 3],
            ..base
        },
        // --- Void ---
        EnemyType::Wraith => EnemyProfile {
            name: "Wraith",
            faction: Void,
            hp: 60.0,
            damage: 25.0,
            speed: 90.0,
            attack_range: 30.0,
            can_phase: true,
            loot: loot![DarkMatter: 1],
            ..base
        },
        EnemyType::Corruptor => EnemyProfile {
            name: "Corruptor",
            faction: Void,
            hp: 150.0,
            damage: 15.0,
            speed: 50.0,
            attack_range: 100.0,
            behavior: B::Turrets,
            loot: loot![DarkMatter: 2],
            ..base
        },
        EnemyType::VoidLord => EnemyProfile {
            name: "Void Lord",
            faction: Void,
            hp: 2000.0,
            damage: 80.0,
            speed: 40.0,
            attack_range: 150.0,
            behavior: B::Smart,
            can_fly: true,
            can_phase: true,
            is_boss: true,
            loot: loot![DarkMatter: 15, VoidEssence: 5],
            ..base
        },
    }
}
