//! World construction and entity spawn factories.
//!
//! Creates the starting world (map, core, ledger, player) and the enemy
//! and projectile entities with their component bundles.

use std::collections::BTreeSet;

use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use forgeline_core::components::*;
use forgeline_core::constants::*;
use forgeline_core::enums::*;
use forgeline_core::resources::ResourceLedger;
use forgeline_core::types::{GridPos, Position, Vec2, Velocity};
use forgeline_enemy_ai::profiles::get_profile;
use forgeline_procgen::generate_map;
use forgeline_terrain::TileGrid;

use crate::engine::SimConfig;
use crate::placement;
use crate::world::GameWorld;

/// Build a fresh game: generated map, core at the centre, starting
/// resources and unlocks, player at the map centre.
pub fn create_initial_state(config: &SimConfig) -> GameWorld {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let grid = generate_map(config.map_width, config.map_height, &mut rng);
    let mut world = create_world_with_grid(config, grid, rng);
    world.resources = ResourceLedger::starting();
    place_core(&mut world);
    world
}

/// Build a world around an existing grid with an empty ledger and no
/// buildings. Used for restores and hand-built test maps.
pub fn create_world_with_grid(config: &SimConfig, grid: TileGrid, rng: ChaCha8Rng) -> GameWorld {
    let center = grid.world_size(TILE_SIZE) / 2.0;
    let mut world = GameWorld::new(config.seed, grid, Player::new(center), rng);
    world.game_speed = config.time_scale.clamp(MIN_GAME_SPEED, MAX_GAME_SPEED);
    world.base_radius = BASE_RADIUS;
    world.camera.x = center.x;
    world.camera.y = center.y;
    world
}

/// Place the core with its top-left tile one step up-left of the centre.
pub fn place_core(world: &mut GameWorld) -> Option<u32> {
    let origin = GridPos::new(world.grid.width() / 2 - 1, world.grid.height() / 2 - 1);
    match placement::try_place_building(world, BuildingType::Core, origin, Direction::Up) {
        Ok(id) => {
            world.events.clear();
            Some(id)
        }
        Err(reason) => {
            warn!(x = origin.x, y = origin.y, %reason, "could not place core");
            None
        }
    }
}

/// Spawn an enemy of `kind` at `position` with wave multipliers applied.
pub fn spawn_enemy(
    world: &mut GameWorld,
    kind: EnemyType,
    position: Vec2,
    wave: Option<u32>,
    hp_multiplier: f32,
    speed_multiplier: f32,
) -> Entity {
    let profile = get_profile(kind);
    let id = world.alloc_id();

    let enemy = Enemy {
        id,
        kind,
        faction: profile.faction,
        speed: profile.speed * speed_multiplier,
        behavior: profile.behavior,
        can_fly: profile.can_fly,
        can_phase: profile.can_phase,
        is_boss: profile.is_boss,
        wave,
    };
    let attack = EnemyAttack {
        damage: profile.damage,
        range: profile.attack_range,
        cooldown: ENEMY_ATTACK_COOLDOWN,
        current_cooldown: 0.0,
    };

    world.entities.spawn((
        enemy,
        Position(position),
        Velocity::default(),
        Health::full(profile.hp * hp_multiplier),
        attack,
        Loot(profile.loot.to_vec()),
    ))
}

/// Parameters of a projectile about to be fired.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: f32,
    pub owner: ProjectileOwner,
    pub piercing: bool,
    pub explosive: bool,
    pub explosion_radius: f32,
    pub lifetime: f32,
}

pub fn spawn_projectile(world: &mut GameWorld, spawn: ProjectileSpawn) -> Entity {
    let id = world.alloc_id();
    let projectile = Projectile {
        id,
        damage: spawn.damage,
        owner: spawn.owner,
        piercing: spawn.piercing,
        explosive: spawn.explosive,
        explosion_radius: spawn.explosion_radius,
        hit_enemies: BTreeSet::new(),
        lifetime: spawn.lifetime,
    };
    world.entities.spawn((
        projectile,
        Position(spawn.position),
        Velocity(spawn.velocity),
    ))
}
