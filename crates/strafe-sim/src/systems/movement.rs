//! Kinematic integration system.
//!
//! Player locomotion from the directional inputs, and straight-line bullet
//! flight: position += direction * speed, once per tick. Bullets that stray
//! beyond `BULLET_RANGE` of the player are marked for removal.

use glam::DVec3;

use strafe_core::components::Bullet;
use strafe_core::constants::{BULLET_RANGE, PLAYER_MOVE_SPEED};
use strafe_core::input::{InputAction, InputState};
use strafe_core::types::Position;

use crate::registry::EntityRegistry;
use crate::state::PlayerState;

/// Walk the player relative to the horizontal part of the view direction.
pub fn move_player(player: &mut PlayerState, held: &InputState, delta: f64) {
    let mut forward = player.view_direction;
    forward.y = 0.0;
    let forward = forward.try_normalize().unwrap_or(DVec3::NEG_Z);
    let right = forward.cross(DVec3::Y);

    let mut wish = DVec3::ZERO;
    if held.is_held(InputAction::Forward) {
        wish += forward;
    }
    if held.is_held(InputAction::Back) {
        wish -= forward;
    }
    if held.is_held(InputAction::Right) {
        wish += right;
    }
    if held.is_held(InputAction::Left) {
        wish -= right;
    }

    player
        .position
        .advance(wish.normalize_or_zero(), PLAYER_MOVE_SPEED * delta);
}

/// Advance every bullet (both sides) and mark the ones out of range.
pub fn run(registry: &mut EntityRegistry, player_position: &Position) {
    let mut expired = Vec::new();

    for (entity, (bullet, pos)) in registry.world_mut().query_mut::<(&Bullet, &mut Position)>() {
        pos.advance(bullet.direction, bullet.speed);
        if pos.range_to(player_position) > BULLET_RANGE {
            expired.push(entity);
        }
    }

    for entity in expired {
        registry.mark_for_removal(entity);
    }
}
