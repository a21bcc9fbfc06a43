//! End-to-end scenarios driven through the public engine API.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use forgeline_sim::core::commands::PlayerCommand;
use forgeline_sim::core::components::EnemyAttack;
use forgeline_sim::core::constants::DT;
use forgeline_sim::core::definitions::power_radius;
use forgeline_sim::core::enums::*;
use forgeline_sim::core::events::GameEvent;
use forgeline_sim::core::resources::{ResourceLedger, ResourceStack};
use forgeline_sim::core::types::{GridPos, Vec2};
use forgeline_sim::core::waves;
use forgeline_sim::placement;
use forgeline_sim::systems::{abilities, power, wave_director};
use forgeline_sim::world_setup::{self, spawn_enemy};
use forgeline_sim::{GameWorld, SimConfig, SimulationEngine};
use forgeline_terrain::{Tile, TileGrid};

fn grass_world(size: i32, seed: u64) -> GameWorld {
    let grid = TileGrid::filled(size, size, Tile::new(TileType::Grass, true));
    let config = SimConfig {
        seed,
        map_width: size,
        map_height: size,
        ..Default::default()
    };
    let mut world =
        world_setup::create_world_with_grid(&config, grid, ChaCha8Rng::seed_from_u64(seed));
    world.resources = ResourceLedger::starting();
    world_setup::place_core(&mut world).expect("core fits on an open map");
    world
}

/// Extractor → conveyor → storage: the ledger gains exactly one unit per
/// completed extraction and the belt never exceeds its capacity.
#[test]
fn scenario_extractor_to_storage() {
    let mut world = grass_world(40, 1);
    *world.grid.get_mut(GridPos::new(5, 5)).unwrap() = Tile::new(TileType::IronDeposit, true);

    let mut engine = SimulationEngine::from_world(world);
    engine.queue_commands([
        PlayerCommand::PlaceBuilding {
            building: BuildingType::OreExtractor,
            x: 5,
            y: 5,
            direction: Direction::Right,
        },
        PlayerCommand::PlaceBuilding {
            building: BuildingType::Conveyor,
            x: 7,
            y: 5,
            direction: Direction::Right,
        },
        PlayerCommand::PlaceBuilding {
            building: BuildingType::Storage,
            x: 8,
            y: 5,
            direction: Direction::Right,
        },
    ]);
    let first = engine.tick(0.0);
    assert_eq!(first.buildings.len(), 4);
    let ore = first.resources[&ResourceType::IronOre];

    // One deposit tile: 4 s per unit. 10 s leaves the third unit unmade.
    for _ in 0..100 {
        let snap = engine.tick(0.1);
        for b in &snap.buildings {
            assert!(b.items.len() <= 3);
        }
    }

    let snap = engine.snapshot();
    assert_eq!(snap.resources[&ResourceType::IronOre], ore + 2);
}

/// Two rifle hits kill a 20 hp enemy; loot is credited once.
#[test]
fn scenario_rifle_kills_swarmer() {
    let mut world = grass_world(40, 2);
    let target = world.player.position + Vec2::new(100.0, 0.0);
    let enemy = spawn_enemy(&mut world, EnemyType::Swarmer, target, None, 1.0, 1.0);
    // Stunned: holds position for the whole exchange.
    world.entities.get::<&mut EnemyAttack>(enemy).unwrap().current_cooldown = 100.0;
    let biomass = world.resources.get(ResourceType::Biomass);

    let mut engine = SimulationEngine::from_world(world);
    engine.queue_command(PlayerCommand::SetAim {
        x: target.x,
        y: target.y,
    });
    engine.queue_command(PlayerCommand::SetFiring { held: true });

    let mut seen_hp = Vec::new();
    let mut killed = false;
    for _ in 0..120 {
        let snap = engine.tick(DT);
        match snap.enemies.first() {
            Some(e) => {
                if seen_hp.last() != Some(&e.hp) {
                    seen_hp.push(e.hp);
                }
            }
            None => {
                killed = true;
                break;
            }
        }
    }

    assert!(killed);
    assert_eq!(seen_hp, vec![20.0, 10.0]);
    engine.queue_command(PlayerCommand::SetFiring { held: false });
    let snap = engine.tick(DT);
    assert_eq!(snap.resources[&ResourceType::Biomass], biomass + 1);
}

/// An unaffordable wave leaves the world untouched.
#[test]
fn scenario_unaffordable_wave() {
    let mut world = grass_world(40, 3);
    world.resources.set(ResourceType::IronOre, 5);

    assert!(!wave_director::start_wave(&mut world, &waves::hive_basic(), &[]));
    assert!(world.active_wave.is_none());
    assert_eq!(world.resources.get(ResourceType::IronOre), 5);

    let mut engine = SimulationEngine::from_world(world);
    engine.queue_command(PlayerCommand::StartWave {
        wave_id: "hive_basic".into(),
        modifiers: vec![],
    });
    let snap = engine.tick(DT);
    assert!(snap.wave.is_none());
    assert_eq!(snap.resources[&ResourceType::IronOre], 5);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::CommandRejected { .. })));
}

/// A second shield activation while active is rejected without resetting
/// anything.
#[test]
fn scenario_shield_twice() {
    let mut world = grass_world(40, 4);

    assert!(abilities::activate_ability(&mut world, AbilityType::Shield));
    abilities::tick(&mut world.player, 0.5);
    let state = world.player.ability(AbilityType::Shield);
    assert!(state.active);

    assert!(!abilities::activate_ability(&mut world, AbilityType::Shield));
    assert_eq!(world.player.ability(AbilityType::Shield), state);
}

/// Core placement is refused anywhere while one stands, through either
/// entry point.
#[test]
fn scenario_single_core() {
    let world = grass_world(40, 6);
    let mut engine = SimulationEngine::from_world(world);

    for (x, y) in [(2, 2), (30, 5), (5, 30)] {
        assert!(!engine.place_building(BuildingType::Core, x, y, Direction::Up));
        engine.queue_command(PlayerCommand::PlaceBuilding {
            building: BuildingType::Core,
            x,
            y,
            direction: Direction::Up,
        });
    }
    let snap = engine.tick(DT);

    let cores = snap
        .buildings
        .iter()
        .filter(|b| b.kind == BuildingType::Core)
        .count();
    assert_eq!(cores, 1);
    let rejected = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::CommandRejected { .. }))
        .count();
    assert_eq!(rejected, 3);
}

// ---- Invariants under random play ----

const PLACEABLE: [BuildingType; 9] = [
    BuildingType::Conveyor,
    BuildingType::Wall,
    BuildingType::Storage,
    BuildingType::Smelter,
    BuildingType::CoalGenerator,
    BuildingType::TurretBase,
    BuildingType::RepairStation,
    BuildingType::OreExtractor,
    BuildingType::Core,
];

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn random_command(rng: &mut ChaCha8Rng, world: &GameWorld) -> PlayerCommand {
    match rng.gen_range(0..10) {
        0..=4 => PlayerCommand::PlaceBuilding {
            building: PLACEABLE[rng.gen_range(0..PLACEABLE.len())],
            x: rng.gen_range(-2..world.grid.width()),
            y: rng.gen_range(-2..world.grid.height()),
            direction: DIRECTIONS[rng.gen_range(0..4)],
        },
        5 => {
            let ids = world.buildings.ids();
            PlayerCommand::RemoveBuilding {
                building_id: ids[rng.gen_range(0..ids.len())],
            }
        }
        6 => PlayerCommand::StartWave {
            wave_id: "hive_basic".into(),
            modifiers: vec![],
        },
        7 => PlayerCommand::ActivateAbility {
            ability: AbilityType::ALL[rng.gen_range(0..AbilityType::ALL.len())],
        },
        8 => PlayerCommand::SetMovement {
            up: rng.gen(),
            down: rng.gen(),
            left: rng.gen(),
            right: rng.gen(),
        },
        _ => PlayerCommand::SetFiring { held: rng.gen() },
    }
}

fn check_invariants(world: &GameWorld) {
    let mut claimed = HashSet::new();
    let mut cores = 0;
    for building in world.buildings.iter() {
        if building.kind == BuildingType::Core {
            cores += 1;
        }
        for cell in building.cells() {
            assert!(claimed.insert(cell), "footprints overlap at {cell:?}");
            assert!(world.grid.is_buildable(cell));
            assert_eq!(world.buildings.id_at(cell), Some(building.id));
        }
        if let Some(belt) = building.conveyor() {
            assert!(belt.items.len() <= 3);
            assert!(belt.items.iter().all(|i| (0.0..=1.0).contains(&i.progress)));
        }
        if let Some(generator) = building.generator() {
            assert!(generator.fuel_stored >= 0.0);
        }
    }
    assert!(cores <= 1, "{cores} cores standing");
    if world.phase != GamePhase::Defeated {
        assert_eq!(cores, 1);
    }
    assert!(world.player.hp >= 0.0 && world.player.hp <= world.player.max_hp);
}

/// Power flags match a from-scratch evaluation of every source.
fn check_power(world: &GameWorld) {
    let sources: Vec<(Vec2, f32)> = world
        .buildings
        .iter()
        .filter_map(|b| {
            let radius = power_radius(b.kind)?;
            let fuelled = b.generator().map_or(true, |g| g.fuel_stored > 0.0)
                || b.kind == BuildingType::FusionReactor;
            fuelled.then(|| (b.center_tiles(), radius))
        })
        .collect();
    for b in world.buildings.iter() {
        let expected = sources
            .iter()
            .any(|(c, r)| c.distance(b.center_tiles()) <= *r);
        assert_eq!(b.powered, expected, "building {} power mismatch", b.id);
    }
}

#[test]
fn invariants_hold_under_random_play() {
    for seed in [11u64, 12, 13] {
        let mut world = grass_world(48, seed);
        for (x, y) in [(4, 4), (5, 4), (40, 40), (41, 41)] {
            *world.grid.get_mut(GridPos::new(x, y)).unwrap() =
                Tile::new(TileType::IronDeposit, true);
        }
        let mut engine = SimulationEngine::from_world(world);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut waves_completed = 0;
        let mut next_wave_id = 1;
        for _ in 0..600 {
            if engine.world().phase == GamePhase::Defeated {
                break;
            }
            let command = random_command(&mut rng, engine.world());
            engine.queue_command(command);
            engine.tick(DT * 3.0);

            let world = engine.world();
            check_invariants(world);
            assert!(world.waves_completed >= waves_completed);
            assert!(world.next_wave_id >= next_wave_id);
            waves_completed = world.waves_completed;
            next_wave_id = world.next_wave_id;

            power::run(engine.world_mut());
            check_power(engine.world());
        }
    }
}

/// Placing then removing returns at least half of every cost component
/// and never more than was paid.
#[test]
fn refund_never_exceeds_cost() {
    for kind in PLACEABLE {
        if matches!(kind, BuildingType::OreExtractor | BuildingType::Core) {
            continue;
        }
        let mut world = grass_world(40, 5);
        let before = world.resources.clone();
        let origin = GridPos::new(3, 3);
        let id = placement::try_place_building(&mut world, kind, origin, Direction::Right)
            .expect("open tile");
        placement::remove_building(&mut world, id);

        let refund: Vec<ResourceStack> = placement::refund_for(kind);
        for stack in refund {
            assert!(world.resources.get(stack.resource) <= before.get(stack.resource));
        }
        assert!(!world.buildings.is_occupied(origin));
    }
}
