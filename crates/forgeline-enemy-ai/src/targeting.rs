//! Target selection by behavior tag.
//!
//! The simulation flattens the player and buildings into plain candidates;
//! these functions pick the point an enemy walks toward and, when it
//! attacks, what the attack lands on.

use glam::Vec2;

use forgeline_core::constants::{ENEMY_PLAYER_HIT_RADIUS_PX, SMART_AGGRO_RANGE_PX, TILE_SIZE};
use forgeline_core::enums::TargetBehavior;

/// What a building candidate counts as for targeting purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetClass {
    Core,
    Turret,
    Generator,
    Other,
}

/// A building an enemy may target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub building_id: u32,
    pub class: TargetClass,
    /// Footprint centre in world pixels.
    pub position: Vec2,
}

/// The chosen target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Player(Vec2),
    Building { building_id: u32, position: Vec2 },
}

impl Target {
    pub fn position(&self) -> Vec2 {
        match *self {
            Target::Player(p) => p,
            Target::Building { position, .. } => position,
        }
    }
}

/// Input to target selection for a single enemy.
pub struct TargetContext<'a> {
    pub behavior: TargetBehavior,
    pub position: Vec2,
    /// Player position, `None` while the player is dead.
    pub player: Option<Vec2>,
    /// Buildings in a stable order. Ties go to the earlier candidate.
    pub buildings: &'a [Candidate],
}

/// Pick a target for one enemy. `None` when nothing targetable exists.
pub fn select_target(ctx: &TargetContext) -> Option<Target> {
    match ctx.behavior {
        TargetBehavior::Nearest => nearest_any(ctx),
        TargetBehavior::Core => core(ctx),
        TargetBehavior::Turrets => nearest_of(ctx, TargetClass::Turret).or_else(|| core(ctx)),
        TargetBehavior::Generators => {
            nearest_of(ctx, TargetClass::Generator).or_else(|| core(ctx))
        }
        TargetBehavior::Smart => smart(ctx),
    }
}

fn building_target(c: &Candidate) -> Target {
    Target::Building {
        building_id: c.building_id,
        position: c.position,
    }
}

/// Nearest of the player and every building. The player wins ties.
fn nearest_any(ctx: &TargetContext) -> Option<Target> {
    let mut best: Option<(f32, Target)> = ctx
        .player
        .map(|p| (ctx.position.distance(p), Target::Player(p)));
    for c in ctx.buildings {
        let d = ctx.position.distance(c.position);
        if best.map_or(true, |(bd, _)| d < bd) {
            best = Some((d, building_target(c)));
        }
    }
    best.map(|(_, t)| t)
}

fn nearest_of(ctx: &TargetContext, class: TargetClass) -> Option<Target> {
    let mut best: Option<(f32, &Candidate)> = None;
    for c in ctx.buildings.iter().filter(|c| c.class == class) {
        let d = ctx.position.distance(c.position);
        if best.map_or(true, |(bd, _)| d < bd) {
            best = Some((d, c));
        }
    }
    best.map(|(_, c)| building_target(c))
}

fn core(ctx: &TargetContext) -> Option<Target> {
    ctx.buildings
        .iter()
        .find(|c| c.class == TargetClass::Core)
        .map(building_target)
}

/// Player if close, else turret, else generator, else core.
fn smart(ctx: &TargetContext) -> Option<Target> {
    if let Some(p) = ctx.player {
        if ctx.position.distance(p) < SMART_AGGRO_RANGE_PX {
            return Some(Target::Player(p));
        }
    }
    nearest_of(ctx, TargetClass::Turret)
        .or_else(|| nearest_of(ctx, TargetClass::Generator))
        .or_else(|| core(ctx))
}

/// What an attack aimed at `point` lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackVictim {
    Player,
    Building(u32),
}

/// Resolve an attack at `point`: the living player if within the hit
/// radius, else the first building whose centre lies within one tile.
/// A point near the player never falls through to buildings, even if the
/// player then shrugs the hit off.
pub fn attack_victim(
    point: Vec2,
    player: Option<Vec2>,
    buildings: &[Candidate],
) -> Option<AttackVictim> {
    if let Some(p) = player {
        if point.distance(p) < ENEMY_PLAYER_HIT_RADIUS_PX {
            return Some(AttackVictim::Player);
        }
    }
    buildings
        .iter()
        .find(|c| point.distance(c.position) < TILE_SIZE)
        .map(|c| AttackVictim::Building(c.building_id))
}
