//! Player abilities: activation and per-update timers.
//!
//! Each ability cycles ready → active (timed abilities only) → cooldown →
//! ready. Shield and overdrive effects are read off the ability state by
//! `Player::is_invincible` and the multiplier accessors, so expiry needs no
//! explicit revert.

use tracing::{debug, trace};

use forgeline_core::components::{EnemyAttack, Player};
use forgeline_core::constants::*;
use forgeline_core::definitions::ability_def;
use forgeline_core::enums::AbilityType;
use forgeline_core::events::GameEvent;
use forgeline_core::types::{Position, Vec2};

use crate::world::GameWorld;

/// Count down cooldowns and active durations.
pub fn tick(player: &mut Player, dt: f32) {
    for state in player.ability_states.values_mut() {
        if state.cooldown_remaining > 0.0 {
            state.cooldown_remaining = (state.cooldown_remaining - dt).max(0.0);
        }
        if state.active {
            state.active_remaining -= dt;
            if state.active_remaining <= 0.0 {
                state.active = false;
                state.active_remaining = 0.0;
            }
        }
    }
}

/// Trigger an ability. Rejected (returns false, nothing changes) while the
/// player is dead, the ability is cooling down, or it is already active.
pub fn activate_ability(world: &mut GameWorld, ability: AbilityType) -> bool {
    let state = world.player.ability(ability);
    if world.player.is_dead || !state.is_ready() {
        trace!(?ability, cooldown = state.cooldown_remaining, active = state.active, "ability rejected");
        return false;
    }

    let def = ability_def(ability);
    match ability {
        AbilityType::Dash => dash(world),
        AbilityType::Emp => emp(world),
        // Timed buffs; effects derive from the active flag.
        AbilityType::Shield | AbilityType::Overdrive | AbilityType::TurretBoost => {}
    }

    let state = world.player.ability_mut(ability);
    state.cooldown_remaining = def.cooldown;
    if def.duration > 0.0 {
        state.active = true;
        state.active_remaining = def.duration;
    }

    world.emit(GameEvent::AbilityActivated { ability });
    debug!(?ability, "ability activated");
    true
}

/// Jump along the current velocity, or toward the aim point when standing
/// (nearly) still.
fn dash(world: &mut GameWorld) {
    let map_size = world.grid.world_size(TILE_SIZE);
    let aim = world.input.aim;
    let player = &mut world.player;

    let direction = if player.velocity.length() > DASH_MIN_SPEED_PX {
        player.velocity.normalize_or_zero()
    } else {
        (aim - player.position).normalize_or_zero()
    };
    player.position = (player.position + direction * DASH_DISTANCE_PX)
        .clamp(Vec2::splat(TILE_SIZE), map_size - Vec2::splat(TILE_SIZE));
    player.invincible_timer = player.invincible_timer.max(DASH_INVINCIBILITY);
}

/// Stun every enemy within range of the player.
fn emp(world: &mut GameWorld) {
    let center = world.player.position;
    for (_entity, (pos, attack)) in world.entities.query_mut::<(&Position, &mut EnemyAttack)>() {
        if center.distance(pos.0) < EMP_RADIUS_PX {
            attack.current_cooldown = EMP_STUN_SECS;
        }
    }
}
