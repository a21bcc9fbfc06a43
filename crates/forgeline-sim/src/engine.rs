//! Simulation engine, the core of the game.
//!
//! `update_game` advances a `GameWorld` by one frame, running every system
//! in a fixed order. `SimulationEngine` wraps a world with a command queue
//! and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use forgeline_core::commands::PlayerCommand;
use forgeline_core::constants::*;
use forgeline_core::enums::{AbilityType, BuildingType, Direction, GamePhase, WaveModifier};
use forgeline_core::events::GameEvent;
use forgeline_core::state::GameStateSnapshot;
use forgeline_core::types::{GridPos, SimTime, Vec2};
use forgeline_core::waves::{find_wave, WaveConfig};

use crate::placement;
use crate::systems;
use crate::world::GameWorld;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial game speed (1.0 = normal).
    pub time_scale: f32,
    pub map_width: i32,
    pub map_height: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
        }
    }
}

/// Advance the world by one frame of `dt` seconds, scaled by the game
/// speed. No-op while paused or defeated.
pub fn update_game(world: &mut GameWorld, dt: f32) {
    if !world.is_running() {
        return;
    }
    let dt = dt * world.game_speed;
    if dt <= 0.0 {
        return;
    }
    world.time.advance(dt);

    // 1. Player
    systems::player::run(world, dt);
    // 2. Buildings (power, logic, conveyor transfer)
    systems::buildings::run(world, dt);
    // 3. Enemies
    systems::enemy_ai::run(world, dt);
    // 4. Projectiles
    systems::projectile::run(world, dt);
    // 5. Wave director
    systems::wave_director::run(world, dt);
    // 6. Collisions
    systems::collision::run(world);
    // 7. Camera
    systems::camera::run(world);
}

/// The simulation engine. Owns the world and the pending command queue.
pub struct SimulationEngine {
    world: GameWorld,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Create a new simulation with a freshly generated world.
    pub fn new(config: SimConfig) -> Self {
        Self::from_world(world_setup::create_initial_state(&config))
    }

    /// Wrap an existing world, e.g. one restored from a save.
    pub fn from_world(world: GameWorld) -> Self {
        Self {
            world,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands, advance by `frame_delta` seconds (clamped to
    /// `MAX_FRAME_DELTA`) and return the resulting snapshot.
    pub fn tick(&mut self, frame_delta: f32) -> GameStateSnapshot {
        self.process_commands();
        update_game(&mut self.world, frame_delta.clamp(0.0, MAX_FRAME_DELTA));
        self.snapshot()
    }

    /// Snapshot the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.world.events);
        systems::snapshot::build_snapshot(&self.world, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.world.time
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Get a mutable reference to the world, for hosts and tests that set
    /// up state directly.
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    // --- Direct operations ---

    pub fn can_place_building(&self, kind: BuildingType, x: i32, y: i32) -> bool {
        placement::can_place_building(&self.world, kind, GridPos::new(x, y))
    }

    pub fn place_building(&mut self, kind: BuildingType, x: i32, y: i32, direction: Direction) -> bool {
        placement::place_building(&mut self.world, kind, GridPos::new(x, y), direction)
    }

    pub fn remove_building(&mut self, building_id: u32) {
        placement::remove_building(&mut self.world, building_id);
    }

    pub fn activate_ability(&mut self, ability: AbilityType) -> bool {
        systems::abilities::activate_ability(&mut self.world, ability)
    }

    pub fn start_wave(&mut self, config: &WaveConfig, modifiers: &[WaveModifier]) -> bool {
        systems::wave_director::start_wave(&mut self.world, config, modifiers)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(reason) = self.handle_command(&command) {
                trace!(?command, %reason, "command rejected");
                self.world.emit(GameEvent::CommandRejected { reason });
            }
        }
    }

    /// Handle a single player command. `Err` carries the rejection reason.
    fn handle_command(&mut self, command: &PlayerCommand) -> Result<(), String> {
        let world = &mut self.world;

        if world.phase == GamePhase::Defeated && !matches!(command, PlayerCommand::AdjustZoom { .. })
        {
            return Err("the core has been destroyed".into());
        }

        match *command {
            PlayerCommand::SetMovement {
                up,
                down,
                left,
                right,
            } => {
                world.input.up = up;
                world.input.down = down;
                world.input.left = left;
                world.input.right = right;
            }
            PlayerCommand::SetAim { x, y } => {
                world.input.aim = Vec2::new(x, y);
            }
            PlayerCommand::SetFiring { held } => {
                world.input.fire_held = held;
            }
            PlayerCommand::SelectWeapon { weapon } => {
                if !world.unlocks.weapons.contains(&weapon) {
                    return Err(format!("weapon {weapon:?} is locked"));
                }
                if !world.player.weapons.contains(&weapon) {
                    world.player.weapons.push(weapon);
                }
                world.player.current_weapon = weapon;
            }
            PlayerCommand::ToggleCommanderMode => {
                world.player.commander_mode = !world.player.commander_mode;
            }
            PlayerCommand::ActivateAbility { ability } => {
                if !systems::abilities::activate_ability(world, ability) {
                    return Err(format!("ability {ability:?} is not ready"));
                }
            }
            PlayerCommand::SelectBuilding { building } => {
                if !world.unlocks.buildings.contains(&building) {
                    return Err(format!("building {building:?} is locked"));
                }
                world.selection.selected = Some(building);
            }
            PlayerCommand::RotatePlacement => {
                world.selection.direction = world.selection.direction.rotate_cw();
            }
            PlayerCommand::CancelPlacement => {
                world.selection.selected = None;
            }
            PlayerCommand::SetHoveredTile { x, y } => {
                world.selection.hovered = Some(GridPos::new(x, y));
            }
            PlayerCommand::PlaceBuilding {
                building,
                x,
                y,
                direction,
            } => {
                placement::try_place_building(world, building, GridPos::new(x, y), direction)
                    .map_err(|e| e.to_string())?;
            }
            PlayerCommand::PlaceSelected { x, y } => {
                let Some(building) = world.selection.selected else {
                    return Err("no building selected".into());
                };
                let direction = world.selection.direction;
                placement::try_place_building(world, building, GridPos::new(x, y), direction)
                    .map_err(|e| e.to_string())?;
            }
            PlayerCommand::RemoveBuilding { building_id } => {
                placement::remove_building(world, building_id);
            }
            PlayerCommand::SetRecipe {
                building_id,
                recipe,
            } => {
                if !systems::production::set_recipe(world, building_id, recipe) {
                    return Err(format!("cannot set recipe on building {building_id}"));
                }
            }
            PlayerCommand::StartWave {
                ref wave_id,
                ref modifiers,
            } => {
                let config = find_wave(wave_id).ok_or_else(|| format!("unknown wave {wave_id}"))?;
                if let Some(m) = modifiers
                    .iter()
                    .find(|&&m| !config.available_modifiers.contains(&m))
                {
                    return Err(format!("modifier {m:?} is not available for {wave_id}"));
                }
                if !systems::wave_director::start_wave(world, &config, modifiers) {
                    return Err(format!("cannot start wave {wave_id}"));
                }
            }
            PlayerCommand::SetGameSpeed { speed } => {
                world.game_speed = speed.clamp(MIN_GAME_SPEED, MAX_GAME_SPEED);
            }
            PlayerCommand::Pause => {
                if world.phase == GamePhase::Active {
                    world.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if world.phase == GamePhase::Paused {
                    world.phase = GamePhase::Active;
                }
            }
            PlayerCommand::TogglePause => {
                world.phase = match world.phase {
                    GamePhase::Active => GamePhase::Paused,
                    GamePhase::Paused => GamePhase::Active,
                    GamePhase::Defeated => GamePhase::Defeated,
                };
            }
            PlayerCommand::AdjustZoom { steps } => {
                systems::camera::adjust_zoom(world, steps);
            }
        }
        Ok(())
    }
}
