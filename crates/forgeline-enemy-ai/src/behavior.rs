//! Per-tick enemy decision: hold, step toward the target, or attack.
//!
//! Pure function over plain data. No ECS dependency.

use glam::Vec2;

/// Input to the decision for a single enemy.
pub struct EnemyContext {
    pub position: Vec2,
    /// Pixels per second.
    pub speed: f32,
    pub attack_range: f32,
    /// Seconds between attacks.
    pub attack_cooldown: f32,
    /// Remaining post-attack or stun time.
    pub current_cooldown: f32,
    /// Target point, if any.
    pub target: Option<Vec2>,
    pub dt: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyAction {
    /// Cooling down or stunned: no movement, no attack.
    Hold,
    /// Nothing to target.
    Idle,
    Move,
    /// Attack the target point this tick.
    Attack,
}

/// Output of the decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyUpdate {
    pub action: EnemyAction,
    pub new_position: Vec2,
    pub new_cooldown: f32,
}

/// Evaluate one enemy for one tick.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let hold = |cooldown| EnemyUpdate {
        action: EnemyAction::Hold,
        new_position: ctx.position,
        new_cooldown: cooldown,
    };

    if ctx.current_cooldown > 0.0 {
        return hold(ctx.current_cooldown - ctx.dt);
    }

    let Some(target) = ctx.target else {
        return EnemyUpdate {
            action: EnemyAction::Idle,
            ..hold(ctx.current_cooldown)
        };
    };

    let to_target = target - ctx.position;
    let dist = to_target.length();
    if dist > ctx.attack_range {
        EnemyUpdate {
            action: EnemyAction::Move,
            new_position: ctx.position + to_target / dist * ctx.speed * ctx.dt,
            new_cooldown: ctx.current_cooldown,
        }
    } else {
        EnemyUpdate {
            action: EnemyAction::Attack,
            new_position: ctx.position,
            new_cooldown: ctx.attack_cooldown,
        }
    }
}
