//! Enemy AI system: updates every enemy each tick.
//!
//! Calls the enemy FSM from strafe-enemy-ai for movement and timers, then
//! applies the results to the world. Melee strikes damage the player and
//! spend the charger; shooter volleys spawn hostile bullets.

use hecs::Entity;
use rand::Rng;

use strafe_core::components::{Enemy, Health, ShooterState};
use strafe_core::constants::HOSTILE_BULLET_SPEED;
use strafe_core::enums::{DamageSource, Side};
use strafe_core::events::GameEvent;
use strafe_core::types::Position;

use strafe_enemy_ai::fsm::{evaluate, EnemyAction, EnemyContext, EnemyUpdate};

use crate::registry::EntityRegistry;
use crate::state::PlayerState;
use crate::systems::damage::damage_player;

/// Run the enemy AI: evaluate the FSM for each live enemy, then apply updates.
pub fn run<R: Rng + ?Sized>(
    registry: &mut EntityRegistry,
    rng: &mut R,
    player: &mut PlayerState,
    delta: f64,
    events: &mut Vec<GameEvent>,
) {
    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut updates: Vec<(Entity, EnemyUpdate)> = Vec::new();

    {
        let mut query = registry
            .world()
            .query::<(&Enemy, &Health, &Position, Option<&ShooterState>)>();
        for (entity, (enemy, health, pos, shooter)) in query.iter() {
            // Already spent this tick; cleanup removes it.
            if health.hp <= 0 {
                continue;
            }

            let ctx = EnemyContext {
                archetype: enemy.archetype,
                position: *pos,
                player_position: player.position,
                shooter: shooter.copied().unwrap_or_default(),
                delta,
            };
            updates.push((entity, evaluate(&ctx, rng)));
        }
    }

    for (entity, update) in updates {
        let world = registry.world_mut();
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = update.new_position;
        }
        if let Ok(mut shooter) = world.get::<&mut ShooterState>(entity) {
            *shooter = update.shooter;
        }

        match update.action {
            EnemyAction::None => {}
            EnemyAction::Strike { damage } => {
                damage_player(player, damage, DamageSource::ChargerMelee, events);
                if let Ok(mut health) = world.get::<&mut Health>(entity) {
                    health.hp = 0;
                }
            }
            EnemyAction::Fire { direction } => {
                registry.spawn_bullet(
                    Side::Hostile,
                    update.new_position,
                    direction,
                    HOSTILE_BULLET_SPEED,
                );
            }
        }
    }
}
