//! Enemy behavior finite state machine.
//!
//! Pure functions that compute movement, state transitions and attacks for
//! one enemy per call, based on its archetype and the player's position.
//! No ECS dependency; operates on plain data.

use glam::DVec3;
use rand::Rng;

use strafe_core::components::ShooterState;
use strafe_core::enums::{EnemyArchetype, ShooterPhase};
use strafe_core::types::Position;

use crate::profiles::{get_profile, EnemyBehaviorProfile};

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub archetype: EnemyArchetype,
    pub position: Position,
    pub player_position: Position,
    /// Shooter timers. Ignored for archetypes without a firing loop.
    pub shooter: ShooterState,
    /// Nominal seconds per tick, used to count timers down.
    pub delta: f64,
}

/// What the enemy does to the player this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyAction {
    None,
    /// Melee hit; the attacker is spent afterwards.
    Strike { damage: i32 },
    /// Launch a hostile bullet along `direction` (unit vector).
    Fire { direction: DVec3 },
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub new_position: Position,
    pub shooter: ShooterState,
    pub action: EnemyAction,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate<R: Rng + ?Sized>(ctx: &EnemyContext, rng: &mut R) -> EnemyUpdate {
    let profile = get_profile(ctx.archetype);

    match ctx.archetype {
        EnemyArchetype::Charger => evaluate_charger(ctx, &profile),
        EnemyArchetype::Shooter => evaluate_shooter(ctx, &profile, rng),
    }
}

fn evaluate_charger(ctx: &EnemyContext, profile: &EnemyBehaviorProfile) -> EnemyUpdate {
    let mut position = ctx.position;
    if profile.pursues_player {
        let heading = position.horizontal_direction_to(&ctx.player_position);
        position.advance(heading, profile.step);
    }

    let action = match profile.melee {
        Some((range, damage)) if position.range_to(&ctx.player_position) < range => {
            EnemyAction::Strike { damage }
        }
        _ => EnemyAction::None,
    };

    EnemyUpdate {
        new_position: position,
        shooter: ctx.shooter,
        action,
    }
}

fn evaluate_shooter<R: Rng + ?Sized>(
    ctx: &EnemyContext,
    profile: &EnemyBehaviorProfile,
    rng: &mut R,
) -> EnemyUpdate {
    let mut position = ctx.position;
    let mut shooter = ctx.shooter;

    match shooter.phase {
        ShooterPhase::Paused => {
            shooter.pause_remaining_secs -= ctx.delta;
            if shooter.pause_remaining_secs <= 0.0 {
                shooter.phase = ShooterPhase::Wandering;
                shooter.pause_remaining_secs = 0.0;
            }
        }
        ShooterPhase::Wandering => {
            if rng.gen_bool(profile.pause_chance) {
                let (min, max) = profile.pause_secs;
                shooter.phase = ShooterPhase::Paused;
                shooter.pause_remaining_secs = rng.gen_range(min..=max);
            } else {
                position.advance(random_heading(rng), profile.step);
            }
        }
    }

    // Firing runs on its own clock; pausing does not block it.
    let action = match profile.fire_cooldown_secs {
        Some(cooldown) => {
            shooter.fire_cooldown_secs -= ctx.delta;
            if shooter.fire_cooldown_secs <= 0.0 {
                shooter.fire_cooldown_secs = cooldown;
                EnemyAction::Fire {
                    direction: position.direction_to(&ctx.player_position),
                }
            } else {
                EnemyAction::None
            }
        }
        None => EnemyAction::None,
    };

    EnemyUpdate {
        new_position: position,
        shooter,
        action,
    }
}

/// Fresh horizontal unit vector; not persisted between ticks.
fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> DVec3 {
    DVec3::new(rng.gen::<f64>() - 0.5, 0.0, rng.gen::<f64>() - 0.5).normalize_or_zero()
}
