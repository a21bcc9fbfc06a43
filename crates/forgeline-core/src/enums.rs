//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Every kind of item the resource ledger can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    // Tier 1 - raw
    IronOre,
    CopperOre,
    Coal,
    Stone,
    Water,
    // Tier 2 - processed
    IronIngot,
    CopperIngot,
    CopperWire,
    Silicon,
    // Tier 3 - advanced
    Steel,
    Circuits,
    Glass,
    // Rare, dropped by enemies and wave rewards
    Biomass,
    CrystalShards,
    DarkMatter,
    VoidEssence,
}

impl ResourceType {
    pub const ALL: [ResourceType; 16] = [
        ResourceType::IronOre,
        ResourceType::CopperOre,
        ResourceType::Coal,
        ResourceType::Stone,
        ResourceType::Water,
        ResourceType::IronIngot,
        ResourceType::CopperIngot,
        ResourceType::CopperWire,
        ResourceType::Silicon,
        ResourceType::Steel,
        ResourceType::Circuits,
        ResourceType::Glass,
        ResourceType::Biomass,
        ResourceType::CrystalShards,
        ResourceType::DarkMatter,
        ResourceType::VoidEssence,
    ];
}

/// Terrain kind of a single map tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    #[default]
    Grass,
    Dirt,
    StoneFloor,
    Water,
    IronDeposit,
    CopperDeposit,
    CoalDeposit,
    StoneDeposit,
    /// Outside the playable area.
    Void,
}

impl TileType {
    /// Raw resource yielded by an extractor standing on this tile.
    pub fn deposit_resource(self) -> Option<ResourceType> {
        match self {
            TileType::IronDeposit => Some(ResourceType::IronOre),
            TileType::CopperDeposit => Some(ResourceType::CopperOre),
            TileType::CoalDeposit => Some(ResourceType::Coal),
            TileType::StoneDeposit => Some(ResourceType::Stone),
            _ => None,
        }
    }

    pub fn is_deposit(self) -> bool {
        self.deposit_resource().is_some()
    }
}

/// Every placeable building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    // Extractors
    OreExtractor,
    Pump,
    SolarCollector,
    // Production
    Smelter,
    Assembler,
    AmmoFactory,
    Refinery,
    // Logistics
    Conveyor,
    ConveyorJunction,
    ConveyorRouter,
    DroneHub,
    Storage,
    // Defense
    TurretBase,
    Wall,
    WallTurret,
    // Power
    CoalGenerator,
    SteamGenerator,
    FusionReactor,
    // Utility
    ResearchLab,
    RepairStation,
    Core,
}

impl BuildingType {
    pub const ALL: [BuildingType; 21] = [
        BuildingType::OreExtractor,
        BuildingType::Pump,
        BuildingType::SolarCollector,
        BuildingType::Smelter,
        BuildingType::Assembler,
        BuildingType::AmmoFactory,
        BuildingType::Refinery,
        BuildingType::Conveyor,
        BuildingType::ConveyorJunction,
        BuildingType::ConveyorRouter,
        BuildingType::DroneHub,
        BuildingType::Storage,
        BuildingType::TurretBase,
        BuildingType::Wall,
        BuildingType::WallTurret,
        BuildingType::CoalGenerator,
        BuildingType::SteamGenerator,
        BuildingType::FusionReactor,
        BuildingType::ResearchLab,
        BuildingType::RepairStation,
        BuildingType::Core,
    ];

    pub fn is_conveyor(self) -> bool {
        matches!(
            self,
            BuildingType::Conveyor | BuildingType::ConveyorJunction | BuildingType::ConveyorRouter
        )
    }

    pub fn is_generator(self) -> bool {
        matches!(
            self,
            BuildingType::CoalGenerator | BuildingType::SteamGenerator | BuildingType::FusionReactor
        )
    }

    pub fn is_turret(self) -> bool {
        matches!(self, BuildingType::TurretBase | BuildingType::WallTurret)
    }

    /// Whether items arriving on a conveyor are credited to the global ledger.
    pub fn is_item_sink(self) -> bool {
        matches!(self, BuildingType::Storage | BuildingType::Core)
    }
}

/// Broad building grouping used by menus and by item routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingCategory {
    Extraction,
    Production,
    Logistics,
    Defense,
    Power,
    Utility,
}

/// Facing of a building; conveyors move items this way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Grid step (dx, dy) one cell in this direction. y grows downward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Next direction in placement rotation order: right, down, left, up.
    pub fn rotate_cw(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }
}

/// Player weapons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    #[default]
    BasicRifle,
    Shotgun,
    Sniper,
    Flamethrower,
    RocketLauncher,
    PlasmaCannon,
    VoidBeam,
}

/// Player abilities. A closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityType {
    Dash,
    Shield,
    Overdrive,
    Emp,
    TurretBoost,
}

impl AbilityType {
    pub const ALL: [AbilityType; 5] = [
        AbilityType::Dash,
        AbilityType::Shield,
        AbilityType::Overdrive,
        AbilityType::Emp,
        AbilityType::TurretBoost,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyFaction {
    Hive,
    Machines,
    Void,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyType {
    // Hive
    Swarmer,
    Spitter,
    Brute,
    Queen,
    // Machines
    Drone,
    Walker,
    Tank,
    Overseer,
    // Void
    Wraith,
    Corruptor,
    VoidLord,
}

/// Target lookup strategy of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetBehavior {
    /// Nearest of the player and every building.
    Nearest,
    /// Always the core.
    Core,
    /// Nearest turret, falling back to the core.
    Turrets,
    /// Nearest generator, falling back to the core.
    Generators,
    /// Player if close, else turret, else generator, else core.
    Smart,
}

/// Wave-level modifiers chosen when a wave is summoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveModifier {
    Swarm,
    Armored,
    Fast,
    Regenerating,
    Boss,
}

/// Who fired a projectile; decides which side it can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileOwner {
    Player,
    Turret,
    Enemy,
}

impl ProjectileOwner {
    /// Whether this projectile damages enemies (as opposed to the player).
    pub fn hits_enemies(self) -> bool {
        matches!(self, ProjectileOwner::Player | ProjectileOwner::Turret)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurretBarrel {
    #[default]
    Mg,
    Cannon,
    Laser,
    Missile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurretModule {
    RangeBoost,
    DamageBoost,
    FireRate,
    ArmorPiercing,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// The core was destroyed; the run is over.
    Defeated,
}

/// Observable state of the wave director.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WavePhase {
    /// No active wave.
    #[default]
    Idle,
    /// Enemies still queued for spawning.
    Spawning,
    /// Everything spawned; waiting for live wave enemies to die.
    Draining,
    /// All wave enemies dead; rewards are granted on the next director pass.
    Completed,
}
