//! Simulation constants and tuning parameters.
//!
//! Distances are in tiles unless the name says `_PX` (world pixels).
//! Durations are in seconds of simulated time.

// --- Frame / time ---

/// Nominal update rate the front end drives the simulation at (Hz).
pub const TICKS_PER_SECOND: u32 = 60;

/// Nominal seconds per update.
pub const DT: f32 = 1.0 / TICKS_PER_SECOND as f32;

/// Largest frame delta accepted per update. Longer gaps (a backgrounded tab)
/// are clamped to this.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Allowed game speed range.
pub const MIN_GAME_SPEED: f32 = 0.0;
pub const MAX_GAME_SPEED: f32 = 4.0;

// --- Map ---

/// Pixels per tile edge.
pub const TILE_SIZE: f32 = 22.0;

pub const DEFAULT_MAP_WIDTH: i32 = 128;
pub const DEFAULT_MAP_HEIGHT: i32 = 128;

/// Tiles within this distance of the centre are buildable.
pub const BUILDABLE_RADIUS: f32 = 50.0;

/// Core power radius and inner limit for generated deposits.
pub const SAFE_ZONE_RADIUS: f32 = 36.0;

/// Deposits never spawn closer than this to the centre.
pub const ORE_MIN_DIST: f32 = 8.0;

/// Deposits never spawn farther than this from the centre.
pub const ORE_MAX_DIST: f32 = SAFE_ZONE_RADIUS - 2.0;

/// Attempts at finding a vein seed before giving up on that vein.
pub const VEIN_SEED_ATTEMPTS: u32 = 50;

/// Vein size range (inclusive).
pub const VEIN_MIN_TILES: usize = 3;
pub const VEIN_MAX_TILES: usize = 8;

/// Keep vein seeds this many tiles away from the map edge.
pub const VEIN_EDGE_MARGIN: i32 = 2;

/// Per-tile chance of a water patch in the outer ring.
pub const WATER_PROBABILITY: f64 = 0.015;

/// Water never spawns beyond this distance from the centre.
pub const WATER_MAX_DIST: f32 = 55.0;

/// Initial buildable radius around the core for progression layers.
pub const BASE_RADIUS: u32 = 10;

// --- Buildings ---

/// Fraction of cost refunded on removal (floored per resource).
pub const REFUND_RATIO: f32 = 0.5;

/// Power radius of the core.
pub const CORE_POWER_RADIUS: f32 = 36.0;

pub const COAL_GENERATOR_RADIUS: f32 = 5.0;
pub const STEAM_GENERATOR_RADIUS: f32 = 8.0;
pub const FUSION_REACTOR_RADIUS: f32 = 15.0;

/// Fuel a freshly placed generator starts with.
pub const GENERATOR_INITIAL_FUEL: f32 = 10.0;

/// Fuel burned per second while fuel remains.
pub const GENERATOR_FUEL_BURN_RATE: f32 = 0.1;

/// Generators pull coal from the ledger when below this much fuel.
pub const GENERATOR_REFUEL_THRESHOLD: f32 = 10.0;

/// Stored fuel gained from one unit of coal.
pub const FUEL_PER_COAL: f32 = 5.0;

/// Extraction time with one matching deposit tile under the footprint.
pub const EXTRACTOR_BASE_TIME: f32 = 4.0;

/// Conveyor item progress per second (1.0 = one full cell).
pub const CONVEYOR_SPEED: f32 = 1.5;

/// Items a single conveyor cell holds at once.
pub const CONVEYOR_CAPACITY: usize = 3;

pub const TURRET_RANGE_PX: f32 = 200.0;
pub const TURRET_DAMAGE: f32 = 15.0;
pub const TURRET_PROJECTILE_SPEED: f32 = 500.0;
pub const TURRET_PROJECTILE_LIFETIME: f32 = 1.0;
pub const TURRET_FIRE_INTERVAL: f32 = 0.5;

pub const REPAIR_RADIUS: f32 = 5.0;
pub const REPAIR_RATE: f32 = 5.0;

// --- Player ---

pub const PLAYER_MAX_HP: f32 = 100.0;
pub const PLAYER_MAX_ENERGY: f32 = 100.0;
pub const PLAYER_SPEED_PX: f32 = 200.0;
pub const PLAYER_ENERGY_REGEN: f32 = 10.0;
pub const PLAYER_RESPAWN_TIME: f32 = 5.0;
pub const RESPAWN_INVINCIBILITY: f32 = 2.0;

pub const DASH_DISTANCE_PX: f32 = 100.0;
pub const DASH_INVINCIBILITY: f32 = 0.2;
/// Below this speed the dash follows the aim point instead of the velocity.
pub const DASH_MIN_SPEED_PX: f32 = 10.0;

pub const OVERDRIVE_MULTIPLIER: f32 = 1.5;
pub const EMP_RADIUS_PX: f32 = 200.0;
pub const EMP_STUN_SECS: f32 = 3.0;

// --- Enemies / combat ---

/// Enemy cooldown after each attack.
pub const ENEMY_ATTACK_COOLDOWN: f32 = 1.0;

/// An attack aimed within this distance of the player hits the player.
pub const ENEMY_PLAYER_HIT_RADIUS_PX: f32 = 30.0;

/// Smart enemies chase the player when closer than this.
pub const SMART_AGGRO_RANGE_PX: f32 = 300.0;

/// Projectile vs. unit collision radius.
pub const PROJECTILE_HIT_RADIUS_PX: f32 = 20.0;

/// Fraction of damage dealt by an explosion to bystanders.
pub const EXPLOSION_DAMAGE_RATIO: f32 = 0.5;

// --- Waves ---

pub const WAVE_SPAWN_INTERVAL: f32 = 0.5;
pub const SWARM_COUNT_FACTOR: f32 = 1.5;
pub const ARMORED_HP_FACTOR: f32 = 2.0;
pub const FAST_SPEED_FACTOR: f32 = 1.5;

pub const SWARM_REWARD_FACTOR: f32 = 1.25;
pub const ARMORED_REWARD_FACTOR: f32 = 1.3;
pub const FAST_REWARD_FACTOR: f32 = 1.2;
pub const REGENERATING_REWARD_FACTOR: f32 = 1.35;
pub const BOSS_REWARD_FACTOR: f32 = 2.0;

// --- Camera ---

pub const CAMERA_LERP: f32 = 0.1;
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.1;
