//! Cleanup system: sweeps spent enemies and compacts the registry.

use hecs::Entity;
use tracing::debug;

use strafe_core::components::{Enemy, Health};
use strafe_core::enums::EnemyArchetype;
use strafe_core::events::GameEvent;
use strafe_core::visuals::VisualId;

use crate::registry::EntityRegistry;

/// Mark every enemy with no health left, then despawn all marked entities.
/// Returns how many entities left the registry.
pub fn run(registry: &mut EntityRegistry, events: &mut Vec<GameEvent>) -> usize {
    let destroyed: Vec<(Entity, EnemyArchetype)> = registry
        .world()
        .query::<(&Enemy, &Health)>()
        .iter()
        .filter(|(_, (_, health))| health.hp <= 0)
        .map(|(entity, (enemy, _))| (entity, enemy.archetype))
        .collect();

    for (entity, archetype) in destroyed {
        if registry.mark_for_removal(entity) {
            let id = VisualId::from_entity(entity);
            debug!(id = id.0, ?archetype, "enemy destroyed");
            events.push(GameEvent::EnemyDestroyed { id, archetype });
        }
    }

    registry.compact()
}
