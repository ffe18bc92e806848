//! Weapon system: turns fire intent and the selected mode into projectiles.
//!
//! Rate of fire is gated probabilistically: each tick the trigger is held,
//! the mode's trigger chance decides whether a volley leaves this tick. A
//! volley is one bullet from the player plus one from every escort, all
//! flying along the same (possibly jittered) aim.

use glam::DVec3;
use hecs::Entity;
use rand::Rng;
use tracing::debug;

use strafe_core::constants::*;
use strafe_core::enums::{Side, WeaponMode};
use strafe_core::events::GameEvent;
use strafe_core::types::Position;
use strafe_core::visuals::VisualId;

use crate::registry::EntityRegistry;
use crate::state::PlayerState;
use crate::systems::escorts;

/// Firing characteristics of a weapon mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponProfile {
    /// Probability per held tick that a volley is emitted.
    pub trigger_chance: f64,
    /// Units per tick.
    pub bullet_speed: f64,
    /// Max per-axis aim offset; zero for a perfectly straight shot.
    pub jitter: f64,
    /// Damage dealt on impact while this mode is selected.
    pub damage: i32,
}

pub fn weapon_profile(mode: WeaponMode) -> WeaponProfile {
    match mode {
        WeaponMode::Machine => WeaponProfile {
            trigger_chance: MACHINE_TRIGGER_CHANCE,
            bullet_speed: MACHINE_BULLET_SPEED,
            jitter: MACHINE_JITTER,
            damage: MACHINE_DAMAGE,
        },
        WeaponMode::Laser => WeaponProfile {
            trigger_chance: LASER_TRIGGER_CHANCE,
            bullet_speed: LASER_BULLET_SPEED,
            jitter: 0.0,
            damage: LASER_DAMAGE,
        },
    }
}

/// Create one friendly bullet for `mode` at `origin` heading along `direction`.
pub fn fire(
    registry: &mut EntityRegistry,
    mode: WeaponMode,
    origin: Position,
    direction: DVec3,
) -> Entity {
    let profile = weapon_profile(mode);
    registry.spawn_bullet(
        Side::Friendly,
        origin,
        direction.normalize_or_zero(),
        profile.bullet_speed,
    )
}

/// One tick of held fire. Returns how many bullets were emitted.
pub fn run<R: Rng + ?Sized>(
    registry: &mut EntityRegistry,
    rng: &mut R,
    mode: WeaponMode,
    player: &PlayerState,
) -> usize {
    let profile = weapon_profile(mode);
    if !rng.gen_bool(profile.trigger_chance) {
        return 0;
    }

    let mut origins = vec![player.position];
    origins.extend(escorts::positions(registry));

    // One aim per volley, shared by every origin.
    let direction = jittered(player.view_direction, profile.jitter, rng);
    for origin in &origins {
        fire(registry, mode, *origin, direction);
    }

    debug!(?mode, bullets = origins.len(), "volley fired");
    origins.len()
}

fn jittered<R: Rng + ?Sized>(aim: DVec3, jitter: f64, rng: &mut R) -> DVec3 {
    if jitter <= 0.0 {
        return aim;
    }
    let offset = DVec3::new(
        rng.gen_range(-jitter..=jitter),
        rng.gen_range(-jitter..=jitter),
        0.0,
    );
    (aim + offset).try_normalize().unwrap_or(aim)
}

/// Put a homing missile on the rails at the player's position, untargeted.
pub fn launch_missile(
    registry: &mut EntityRegistry,
    player: &PlayerState,
    events: &mut Vec<GameEvent>,
) -> Entity {
    let missile = registry.spawn_missile(player.position, MISSILE_SPEED);
    let id = VisualId::from_entity(missile);
    debug!(id = id.0, "missile launched");
    events.push(GameEvent::MissileLaunched { id });
    missile
}
