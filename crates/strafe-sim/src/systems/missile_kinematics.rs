//! Homing missile guidance and impact.
//!
//! Each tick a missile validates its target handle, re-acquiring the first
//! enemy with health left when the handle is stale or the referent is spent.
//! With no candidates the missile self-destructs. Otherwise it steps toward
//! the target and detonates inside `MISSILE_HIT_RADIUS`.

use hecs::{Entity, World};
use tracing::debug;

use strafe_core::components::{Enemy, Health, HomingMissile};
use strafe_core::constants::{MISSILE_DAMAGE, MISSILE_HIT_RADIUS};
use strafe_core::events::GameEvent;
use strafe_core::types::Position;
use strafe_core::visuals::VisualId;

use crate::registry::EntityRegistry;
use crate::systems::damage::apply_damage;

/// Advance all homing missiles by one tick.
pub fn run(registry: &mut EntityRegistry, events: &mut Vec<GameEvent>) {
    let missiles: Vec<(Entity, HomingMissile, Position)> = registry
        .world()
        .query::<(&HomingMissile, &Position)>()
        .iter()
        .map(|(entity, (missile, pos))| (entity, *missile, *pos))
        .collect();

    for (entity, missile, mut pos) in missiles {
        let world = registry.world();
        let target = missile
            .target
            .filter(|target| is_live_enemy(world, *target))
            .or_else(|| acquire_target(world));

        let Some(target) = target else {
            registry.mark_for_removal(entity);
            let id = VisualId::from_entity(entity);
            debug!(id = id.0, "missile expended, no targets left");
            events.push(GameEvent::MissileExpended { id });
            continue;
        };

        let target_pos = match world.get::<&Position>(target) {
            Ok(target_pos) => *target_pos,
            Err(_) => continue,
        };
        pos.advance(pos.direction_to(&target_pos), missile.speed);
        let hit = pos.range_to(&target_pos) < MISSILE_HIT_RADIUS;

        let world = registry.world_mut();
        if let Ok((state, current)) = world.query_one_mut::<(&mut HomingMissile, &mut Position)>(entity) {
            state.target = Some(target);
            *current = pos;
        }

        if hit {
            if let Ok(mut health) = world.get::<&mut Health>(target) {
                apply_damage(&mut health.hp, MISSILE_DAMAGE);
                debug!(enemy = VisualId::from_entity(target).0, hp = health.hp, "missile impact");
            }
            registry.mark_for_removal(entity);
        }
    }
}

/// A target is live while it is still an enemy in the world with health left.
pub fn is_live_enemy(world: &World, entity: Entity) -> bool {
    let is_enemy = world
        .entity(entity)
        .map_or(false, |entity_ref| entity_ref.has::<Enemy>());
    is_enemy && world.get::<&Health>(entity).map_or(false, |health| health.hp > 0)
}

/// First enemy with health left, in registry iteration order.
pub fn acquire_target(world: &World) -> Option<Entity> {
    world
        .query::<(&Enemy, &Health)>()
        .iter()
        .find(|(_, (_, health))| health.hp > 0)
        .map(|(entity, _)| entity)
}
