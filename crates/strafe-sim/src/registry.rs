//! Entity registry: the live enemies, escorts and projectiles of a match.
//!
//! Wraps the hecs world. Systems never despawn while iterating; they mark
//! entities instead, and the frame driver compacts the world once at the
//! end of the tick. Every insertion and removal is mirrored as a
//! `SceneEvent` for the renderer.

use std::collections::HashSet;

use glam::DVec3;
use hecs::{Entity, World};

use strafe_core::components::*;
use strafe_core::enums::{EnemyArchetype, Side};
use strafe_core::events::SceneEvent;
use strafe_core::types::Position;
use strafe_core::visuals::{VisualId, VisualKind};

#[derive(Default)]
pub struct EntityRegistry {
    world: World,
    /// Marked for removal, in marking order.
    doomed: Vec<Entity>,
    doomed_set: HashSet<Entity>,
    scene_events: Vec<SceneEvent>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the underlying world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn spawn_enemy(&mut self, archetype: EnemyArchetype, position: Position, hp: i32) -> Entity {
        let visual = Visual {
            kind: VisualKind::for_enemy(archetype),
        };
        let entity = match archetype {
            EnemyArchetype::Charger => {
                self.world
                    .spawn((Enemy { archetype }, Health { hp }, position, visual))
            }
            EnemyArchetype::Shooter => self.world.spawn((
                Enemy { archetype },
                Health { hp },
                ShooterState::default(),
                position,
                visual,
            )),
        };
        self.announce(entity, visual.kind, position);
        entity
    }

    pub fn spawn_bullet(
        &mut self,
        side: Side,
        position: Position,
        direction: DVec3,
        speed: f64,
    ) -> Entity {
        let visual = Visual {
            kind: VisualKind::for_bullet(side),
        };
        let entity = self.world.spawn((
            Bullet {
                side,
                direction,
                speed,
            },
            position,
            visual,
        ));
        self.announce(entity, visual.kind, position);
        entity
    }

    pub fn spawn_missile(&mut self, position: Position, speed: f64) -> Entity {
        let visual = Visual {
            kind: VisualKind::Missile,
        };
        let entity = self.world.spawn((
            HomingMissile {
                target: None,
                speed,
            },
            position,
            visual,
        ));
        self.announce(entity, visual.kind, position);
        entity
    }

    pub fn spawn_escort(&mut self, slot: usize, position: Position) -> Entity {
        let visual = Visual {
            kind: VisualKind::Escort,
        };
        let entity = self.world.spawn((Escort { slot }, position, visual));
        self.announce(entity, visual.kind, position);
        entity
    }

    fn announce(&mut self, entity: Entity, visual: VisualKind, position: Position) {
        self.scene_events.push(SceneEvent::Added {
            id: VisualId::from_entity(entity),
            visual,
            position,
        });
    }

    /// Schedule `entity` for removal at the end of the tick.
    /// Returns `true` only the first time an entity is marked.
    pub fn mark_for_removal(&mut self, entity: Entity) -> bool {
        if !self.world.contains(entity) || !self.doomed_set.insert(entity) {
            return false;
        }
        self.doomed.push(entity);
        true
    }

    pub fn is_marked(&self, entity: Entity) -> bool {
        self.doomed_set.contains(&entity)
    }

    /// Despawn every marked entity in one pass. Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let mut removed = 0;
        for entity in self.doomed.drain(..) {
            if self.world.despawn(entity).is_ok() {
                self.scene_events.push(SceneEvent::Removed {
                    id: VisualId::from_entity(entity),
                });
                removed += 1;
            }
        }
        self.doomed_set.clear();
        removed
    }

    /// Remove everything, e.g. before a restart.
    pub fn despawn_all(&mut self) -> usize {
        let all: Vec<Entity> = self.world.iter().map(|entity_ref| entity_ref.entity()).collect();
        for entity in all {
            self.mark_for_removal(entity);
        }
        self.compact()
    }

    /// Hand pending scene events to the caller.
    pub fn drain_scene_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.scene_events)
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn bullet_count(&self, side: Side) -> usize {
        self.world
            .query::<&Bullet>()
            .iter()
            .filter(|(_, bullet)| bullet.side == side)
            .count()
    }

    pub fn missile_count(&self) -> usize {
        self.world.query::<&HomingMissile>().iter().count()
    }
}
