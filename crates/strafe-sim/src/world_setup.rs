//! Entity spawn factories for setting up a match.
//!
//! Creates escorts and enemy waves with the appropriate component bundles.

use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use strafe_core::constants::*;
use strafe_core::enums::EnemyArchetype;
use strafe_core::types::Position;

use crate::config::{SimConfig, WaveEntry};
use crate::registry::EntityRegistry;
use crate::systems::escorts;
use crate::state::PlayerState;

/// Populate a fresh registry: escorts around the player, then the opening wave.
pub fn setup_match(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    player: &PlayerState,
) {
    spawn_escorts(registry, config.escort_count, player);
    spawn_wave(registry, rng, &config.initial_wave);
}

/// Spawn the escort formation already in its orbit slots.
pub fn spawn_escorts(registry: &mut EntityRegistry, count: usize, player: &PlayerState) {
    for slot in 0..count {
        let position = escorts::orbit_position(&player.position, slot, count, 0.0);
        registry.spawn_escort(slot, position);
    }
}

/// Spawn every entry of a wave, in order.
pub fn spawn_wave(registry: &mut EntityRegistry, rng: &mut ChaCha8Rng, wave: &[WaveEntry]) {
    for entry in wave {
        for _ in 0..entry.count {
            spawn_enemy(registry, rng, entry.archetype);
        }
    }
}

/// Spawn a single enemy at a random point of the far spawn band.
pub fn spawn_enemy(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    archetype: EnemyArchetype,
) -> Entity {
    let x: f64 = rng.gen_range(-SPAWN_HALF_WIDTH..SPAWN_HALF_WIDTH);
    let depth: f64 = rng.gen_range(SPAWN_DEPTH_NEAR..SPAWN_DEPTH_FAR);
    spawn_enemy_at(registry, archetype, Position::new(x, SPAWN_HEIGHT, -depth))
}

/// Spawn an enemy at an exact position with full health and idle timers.
pub fn spawn_enemy_at(
    registry: &mut EntityRegistry,
    archetype: EnemyArchetype,
    position: Position,
) -> Entity {
    registry.spawn_enemy(archetype, position, ENEMY_MAX_HEALTH)
}
