//! Collision and damage resolution.
//!
//! Distance-threshold hit tests. Friendly bullet damage follows the weapon
//! mode selected at resolution time, not the mode the bullet was fired in.

use hecs::Entity;

use strafe_core::components::{Bullet, Enemy, Health};
use strafe_core::constants::{BULLET_HIT_RADIUS, HOSTILE_BULLET_DAMAGE};
use strafe_core::enums::{DamageSource, Side, WeaponMode};
use strafe_core::events::GameEvent;
use strafe_core::types::Position;

use crate::registry::EntityRegistry;
use crate::state::PlayerState;
use crate::systems::damage::{apply_damage, damage_player};
use crate::systems::weapons::weapon_profile;

/// Resolve every bullet hit for this tick.
pub fn run(
    registry: &mut EntityRegistry,
    player: &mut PlayerState,
    mode: WeaponMode,
    events: &mut Vec<GameEvent>,
) {
    resolve_hostile_hits(registry, player, events);
    resolve_friendly_hits(registry, mode);
}

/// Hostile bullets inside the hit radius of the player.
pub fn resolve_hostile_hits(
    registry: &mut EntityRegistry,
    player: &mut PlayerState,
    events: &mut Vec<GameEvent>,
) {
    let hits: Vec<Entity> = registry
        .world()
        .query::<(&Bullet, &Position)>()
        .iter()
        .filter(|(entity, (bullet, pos))| {
            bullet.side == Side::Hostile
                && !registry.is_marked(*entity)
                && pos.range_to(&player.position) < BULLET_HIT_RADIUS
        })
        .map(|(entity, _)| entity)
        .collect();

    for bullet in hits {
        if registry.mark_for_removal(bullet) {
            damage_player(player, HOSTILE_BULLET_DAMAGE, DamageSource::HostileBullet, events);
        }
    }
}

/// Friendly bullets against live enemies. A bullet damages every enemy it
/// overlaps this tick but is removed once.
pub fn resolve_friendly_hits(registry: &mut EntityRegistry, mode: WeaponMode) {
    let damage = weapon_profile(mode).damage;

    let bullets: Vec<(Entity, Position)> = registry
        .world()
        .query::<(&Bullet, &Position)>()
        .iter()
        .filter(|(entity, (bullet, _))| bullet.side == Side::Friendly && !registry.is_marked(*entity))
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    let mut spent = Vec::new();
    for (bullet, bullet_pos) in bullets {
        for (_enemy, (_, health, pos)) in registry
            .world_mut()
            .query_mut::<(&Enemy, &mut Health, &Position)>()
        {
            if health.hp > 0 && pos.range_to(&bullet_pos) < BULLET_HIT_RADIUS {
                apply_damage(&mut health.hp, damage);
                spent.push(bullet);
            }
        }
    }

    for bullet in spent {
        registry.mark_for_removal(bullet);
    }
}
